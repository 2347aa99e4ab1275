//! # Bricks Theme
//!
//! Theme management and component state for the Bricks UI kit.
//!
//! This library provides:
//! - Theme mode (light/dark/system) with persistence
//! - Custom accent colors expanded into shade ramps
//! - System color-scheme preference tracking
//! - Icon registries with state-color resolution
//! - Renderer-independent button, icon and picker state

pub mod colors;
pub mod error;
pub mod icons;
pub mod service;
pub mod store;
pub mod surface;
pub mod system;
pub mod theme;
pub mod widgets;

pub use colors::{generate_shades, BricksTokens, ColorRole, ShadeSet};
pub use error::{ColorError, StoreError};
pub use icons::{find_icon, IconItem, IconState, IconType};
pub use service::ThemeService;
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use surface::{MemorySurface, PresentationSurface};
pub use system::{ManualPreference, Subscription, SystemPreference};
pub use theme::{CustomColors, ThemeMode, ThemeSnapshot};

use std::sync::Arc;

/// Theme service over in-memory store and surface, following `system`
pub fn in_memory(system: Arc<dyn SystemPreference>) -> (ThemeService, MemoryStore, MemorySurface) {
    let store = MemoryStore::new();
    let surface = MemorySurface::new();
    let service = ThemeService::new(store.clone(), surface.clone(), system);
    (service, store, surface)
}
