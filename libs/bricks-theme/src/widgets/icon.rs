//! Icon button state for Bricks
//!
//! Resolves which colors an icon button is drawn with from its registry
//! entry (or an explicit config) and its selected/disabled flags.

use crate::colors::BricksTokens;
use crate::icons::{find_icon, IconItem, IconState, IconType};
use std::ops::Index;

/// Icon outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconShape {
    #[default]
    Circle,
}

impl IconShape {
    pub fn as_str(self) -> &'static str {
        match self {
            IconShape::Circle => "circle",
        }
    }
}

/// Icon sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl IconSize {
    pub fn as_str(self) -> &'static str {
        match self {
            IconSize::Small => "small",
            IconSize::Medium => "medium",
            IconSize::Large => "large",
        }
    }
}

/// Inline style declarations in the order they are written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconStyles {
    entries: Vec<(&'static str, String)>,
}

impl IconStyles {
    fn insert(&mut self, name: &'static str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((name, value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Declarations joined as an inline `style` attribute
    pub fn to_inline(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Index<&str> for IconStyles {
    type Output = String;

    fn index(&self, name: &str) -> &String {
        match self.entries.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => value,
            None => panic!("no style named {:?}", name),
        }
    }
}

/// Icon button inputs and interaction state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconView {
    pub icon_type: Option<IconType>,
    /// Explicit config; wins over `icon_type`
    pub config: Option<IconItem>,
    pub shape: IconShape,
    pub has_border: bool,
    /// Fallback background when disabled or unconfigured
    pub background_color: String,
    pub is_selected: bool,
    pub size: IconSize,
    pub disabled: bool,
}

impl Default for IconView {
    fn default() -> Self {
        Self {
            icon_type: None,
            config: None,
            shape: IconShape::Circle,
            has_border: true,
            background_color: BricksTokens::ICON_BACKGROUND.to_string(),
            is_selected: false,
            size: IconSize::Medium,
            disabled: false,
        }
    }
}

impl IconView {
    /// Icon for a registered type
    pub fn of_type(icon_type: IconType) -> Self {
        Self {
            icon_type: Some(icon_type),
            ..Default::default()
        }
    }

    /// Icon with an explicit config
    pub fn with_config(config: IconItem) -> Self {
        Self {
            config: Some(config),
            ..Default::default()
        }
    }

    /// Resolved config: explicit config, else registry lookup by type
    pub fn current_config(&self) -> Option<&IconItem> {
        self.config
            .as_ref()
            .or_else(|| self.icon_type.and_then(find_icon))
    }

    fn state(&self) -> IconState {
        if self.is_selected {
            IconState::Active
        } else {
            IconState::Inactive
        }
    }

    /// Space-separated CSS classes
    pub fn classes(&self) -> String {
        let mut classes = vec![
            "icon".to_string(),
            format!("icon--{}", self.shape.as_str()),
            format!("icon--{}", self.size.as_str()),
        ];

        if let Some(icon_type) = self.icon_type {
            classes.push(format!("icon--{}", icon_type.name()));
        }
        if self.has_border {
            classes.push("icon--bordered".to_string());
        }
        if self.is_selected {
            classes.push("icon--selected".to_string());
        }
        if self.disabled {
            classes.push("icon--disabled".to_string());
        }

        classes.join(" ")
    }

    /// Asset path, empty when nothing resolves
    pub fn icon_src(&self) -> &str {
        self.current_config().map_or("", |config| config.icon.as_str())
    }

    pub fn current_background_color(&self) -> &str {
        if self.disabled {
            return self.background_color.as_str();
        }
        match self.current_config() {
            Some(config) => config.background_color(self.state()),
            None => self.background_color.as_str(),
        }
    }

    /// Inline styles; border entries only when bordered
    pub fn styles(&self) -> IconStyles {
        let mut styles = IconStyles::default();
        styles.insert("background-color", self.current_background_color());

        let Some(config) = self.current_config() else {
            return styles;
        };

        if self.has_border {
            styles.insert("border-color", config.border_color(self.state()));
        }

        styles.insert("--icon-hover-bg-color", config.background_color(IconState::Hover));
        styles.insert("--icon-active-bg-color", config.background_color(IconState::Active));

        if self.has_border {
            styles.insert(
                "--icon-hover-border-color",
                config.border_color(IconState::Hover),
            );
            styles.insert(
                "--icon-active-border-color",
                config.border_color(IconState::Active),
            );
        }

        styles
    }

    /// Class applied to the inner SVG
    pub fn svg_class(&self) -> &'static str {
        if !self.disabled && self.is_selected {
            "active"
        } else {
            "inactive"
        }
    }

    /// Toggle selection. Returns whether a click was emitted.
    pub fn click(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.is_selected = !self.is_selected;
        true
    }

    /// Keyboard activation: Enter and Space click
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "Enter" | " " => self.click(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = IconView::default();
        assert_eq!(view.shape, IconShape::Circle);
        assert!(view.has_border);
        assert_eq!(view.background_color, "#F2F2F2");
        assert!(!view.is_selected);
        assert_eq!(view.size, IconSize::Medium);
        assert!(!view.disabled);
        assert_eq!(view.icon_type, None);
        assert_eq!(view.config, None);
    }

    #[test]
    fn test_classes() {
        assert_eq!(
            IconView::default().classes(),
            "icon icon--circle icon--medium icon--bordered"
        );

        let mut view = IconView::of_type(IconType::Facebook);
        view.size = IconSize::Small;
        view.is_selected = true;
        view.disabled = true;
        assert_eq!(
            view.classes(),
            "icon icon--circle icon--small icon--facebook icon--bordered icon--selected icon--disabled"
        );

        let mut view = IconView::default();
        view.has_border = false;
        assert_eq!(view.classes(), "icon icon--circle icon--medium");
    }

    #[test]
    fn test_explicit_config_wins_over_type() {
        let config = IconItem::new(IconType::Heart, "/custom.svg").with_colors("#1", "#2", "#3");
        let mut view = IconView::with_config(config);
        view.icon_type = Some(IconType::Facebook);

        assert_eq!(view.icon_src(), "/custom.svg");
        assert_eq!(view.current_background_color(), "#1");
    }

    #[test]
    fn test_icon_src() {
        assert_eq!(IconView::of_type(IconType::Bag).icon_src(), "/images/icon-bag.svg");
        assert_eq!(IconView::default().icon_src(), "");
    }

    #[test]
    fn test_background_by_state() {
        let mut view = IconView::of_type(IconType::Facebook);
        assert_eq!(view.current_background_color(), BricksTokens::WHITE);

        view.is_selected = true;
        assert_eq!(view.current_background_color(), BricksTokens::PRIMARY);
    }

    #[test]
    fn test_disabled_uses_fallback_background() {
        let mut view = IconView::of_type(IconType::Facebook);
        view.is_selected = true;
        view.disabled = true;
        view.background_color = "#000000".to_string();
        assert_eq!(view.current_background_color(), "#000000");
    }

    #[test]
    fn test_unconfigured_uses_fallback_background() {
        assert_eq!(IconView::default().current_background_color(), "#F2F2F2");
    }

    #[test]
    fn test_styles_with_border() {
        let styles = IconView::of_type(IconType::Close).styles();
        assert_eq!(styles["background-color"], BricksTokens::WHITE);
        assert_eq!(styles["border-color"], BricksTokens::GRAY_2);
        assert_eq!(styles["--icon-hover-bg-color"], BricksTokens::WHITE);
        assert_eq!(styles["--icon-active-bg-color"], BricksTokens::WHITE);
        assert_eq!(styles["--icon-hover-border-color"], BricksTokens::GRAY_9);
        assert_eq!(styles["--icon-active-border-color"], BricksTokens::GRAY_9);
    }

    #[test]
    fn test_styles_without_border() {
        let mut view = IconView::of_type(IconType::Close);
        view.has_border = false;
        let styles = view.styles();

        assert!(!styles.contains_key("border-color"));
        assert!(!styles.contains_key("--icon-hover-border-color"));
        assert!(!styles.contains_key("--icon-active-border-color"));
        assert!(styles.contains_key("--icon-hover-bg-color"));
        assert!(styles.contains_key("--icon-active-bg-color"));
    }

    #[test]
    fn test_styles_keep_declaration_order() {
        let styles = IconView::of_type(IconType::Close).styles();
        let names: Vec<&str> = styles.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "background-color",
                "border-color",
                "--icon-hover-bg-color",
                "--icon-active-bg-color",
                "--icon-hover-border-color",
                "--icon-active-border-color",
            ]
        );
        assert!(styles
            .to_inline()
            .starts_with(&format!("background-color: {};", BricksTokens::WHITE)));
    }

    #[test]
    fn test_styles_without_config() {
        let styles = IconView::default().styles();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles["background-color"], "#F2F2F2");
    }

    #[test]
    fn test_svg_class() {
        let mut view = IconView::default();
        assert_eq!(view.svg_class(), "inactive");
        view.is_selected = true;
        assert_eq!(view.svg_class(), "active");
        view.disabled = true;
        assert_eq!(view.svg_class(), "inactive");
    }

    #[test]
    fn test_click_toggles_selection() {
        let mut view = IconView::default();
        assert!(view.click());
        assert!(view.is_selected);
        assert!(view.click());
        assert!(!view.is_selected);
    }

    #[test]
    fn test_click_ignored_when_disabled() {
        let mut view = IconView::default();
        view.disabled = true;
        assert!(!view.click());
        assert!(!view.is_selected);
    }

    #[test]
    fn test_key_down() {
        let mut view = IconView::default();
        assert!(view.key_down("Enter"));
        assert!(view.key_down(" "));
        assert!(!view.key_down("Escape"));
        assert!(!view.is_selected);
    }
}
