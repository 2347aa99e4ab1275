//! Root presentation node
//!
//! The theme becomes visible only through this surface: a `data-theme`
//! attribute and `dark` class for darkness, and custom properties for the
//! accent color ramps. Writes are fire-and-forget.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::sync::{Arc, PoisonError, RwLock};

/// Attribute marking the dark theme on the root node
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Class marking the dark theme on the root node
pub const DARK_CLASS: &str = "dark";

/// Side-effect sink for theme state
pub trait PresentationSurface: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_property(&self, name: &str, value: &str);
    fn remove_property(&self, name: &str);
}

#[derive(Debug, Default)]
struct RootNode {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
}

/// In-memory root node. Clones share the same node.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    node: Arc<RwLock<RootNode>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.read(|node| node.attributes.get(name).cloned())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.read(|node| node.classes.contains(class))
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.read(|node| node.properties.get(name).cloned())
    }

    /// All custom properties, sorted by name
    pub fn properties(&self) -> Vec<(String, String)> {
        self.read(|node| {
            node.properties
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
    }

    /// Render the node as a `:root` rule, with attributes and classes as comments
    pub fn to_css(&self) -> String {
        self.read(|node| {
            let mut css = String::new();
            for (name, value) in &node.attributes {
                let _ = writeln!(css, "/* [{}=\"{}\"] */", name, value);
            }
            if !node.classes.is_empty() {
                let classes: Vec<&str> = node.classes.iter().map(String::as_str).collect();
                let _ = writeln!(css, "/* class=\"{}\" */", classes.join(" "));
            }
            css.push_str(":root {\n");
            for (name, value) in &node.properties {
                let _ = writeln!(css, "  {}: {};", name, value);
            }
            css.push_str("}\n");
            css
        })
    }

    fn read<T>(&self, f: impl FnOnce(&RootNode) -> T) -> T {
        f(&self.node.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn write(&self, f: impl FnOnce(&mut RootNode)) {
        f(&mut self.node.write().unwrap_or_else(PoisonError::into_inner))
    }
}

impl PresentationSurface for MemorySurface {
    fn set_attribute(&self, name: &str, value: &str) {
        self.write(|node| {
            node.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attribute(&self, name: &str) {
        self.write(|node| {
            node.attributes.remove(name);
        });
    }

    fn add_class(&self, class: &str) {
        self.write(|node| {
            node.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, class: &str) {
        self.write(|node| {
            node.classes.remove(class);
        });
    }

    fn set_property(&self, name: &str, value: &str) {
        self.write(|node| {
            node.properties.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_property(&self, name: &str) {
        self.write(|node| {
            node.properties.remove(name);
        });
    }
}
