//! Durable key/value storage for theme preferences
//!
//! The theme service only needs string get/set/remove by key. Two
//! backends are provided: an in-process map and a JSON file.

use crate::error::{StoreError, StoreResult};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Key holding the theme mode
pub const MODE_KEY: &str = "theme-mode";
/// Key holding the JSON-encoded custom colors
pub const COLORS_KEY: &str = "theme-colors";

/// String key/value store that survives process restarts
pub trait PreferenceStore: Send + Sync {
    /// Read a value; `None` when the key is absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a key. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-process store. Clones share the same map, so a clone kept by the
/// caller observes every write made through the service.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every key
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk, written through on every change
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that does not hold a JSON
    /// string map is logged and treated as empty; it is replaced on the
    /// next write.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let entries = match read_map(&path) {
            Ok(entries) => entries,
            Err(StoreError::Corrupt { path, source }) => {
                warn!(path = %path.display(), error = %source, "Ignoring unreadable preference file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened preference store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn read_map(path: &Path) -> StoreResult<BTreeMap<String, String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.save(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.save(&updated)?;
        *entries = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get(MODE_KEY), None);

        store.set(MODE_KEY, "dark").unwrap();
        assert_eq!(store.get(MODE_KEY), Some("dark".to_string()));

        store.remove(MODE_KEY).unwrap();
        assert_eq!(store.get(MODE_KEY), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set(COLORS_KEY, "{}").unwrap();
        assert_eq!(handle.get(COLORS_KEY), Some("{}".to_string()));

        handle.clear();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_memory_store_remove_absent_key() {
        let store = MemoryStore::new();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("theme.json")).unwrap();
        assert_eq!(store.get(MODE_KEY), None);
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("theme.json");

        let store = FileStore::open(&path).unwrap();
        store.set(MODE_KEY, "system").unwrap();
        store.set(COLORS_KEY, r##"{"primaryColor":"#ff0000"}"##).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(MODE_KEY), Some("system".to_string()));
        assert_eq!(
            reopened.get(COLORS_KEY),
            Some(r##"{"primaryColor":"#ff0000"}"##.to_string())
        );
    }

    #[test]
    fn test_file_store_remove_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.json");

        let store = FileStore::open(&path).unwrap();
        store.set(MODE_KEY, "dark").unwrap();
        store.remove(MODE_KEY).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(MODE_KEY), None);
    }

    #[test]
    fn test_file_store_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(MODE_KEY), None);

        store.set(MODE_KEY, "light").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(MODE_KEY), Some("light".to_string()));
    }
    #[test]
    fn test_file_store_failed_write_keeps_previous_value() {
        let dir = tempdir().unwrap();
        let parent = dir.path().join("bricks");
        let store = FileStore::open(parent.join("theme.json")).unwrap();

        // A plain file where the parent directory should go
        std::fs::write(&parent, "").unwrap();

        assert!(store.set(MODE_KEY, "dark").is_err());
        assert_eq!(store.get(MODE_KEY), None);
    }

    #[test]
    fn test_file_store_failed_remove_keeps_value() {
        let dir = tempdir().unwrap();
        let parent = dir.path().join("bricks");
        let store = FileStore::open(parent.join("theme.json")).unwrap();
        store.set(MODE_KEY, "dark").unwrap();

        std::fs::remove_dir_all(&parent).unwrap();
        std::fs::write(&parent, "").unwrap();

        assert!(store.remove(MODE_KEY).is_err());
        assert_eq!(store.get(MODE_KEY), Some("dark".to_string()));
    }
}
