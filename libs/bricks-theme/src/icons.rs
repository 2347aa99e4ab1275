//! Icon system for the Bricks theme
//!
//! Provides the static icon registries and the state-color resolution used
//! by icon buttons. Each icon can carry a background and a border color
//! per state; missing colors fall back through fixed chains ending in
//! design tokens.

use crate::colors::BricksTokens;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    // ═══════════════════════════════════════════════════════════════════════════
    // SOCIAL
    // ═══════════════════════════════════════════════════════════════════════════
    Facebook,
    Twitter,
    Instagram,
    Pinterest,
    /// Copy/share link
    Link,

    // ═══════════════════════════════════════════════════════════════════════════
    // UTILITY
    // ═══════════════════════════════════════════════════════════════════════════
    /// Close (X)
    Close,
    /// Shopping bag
    Bag,
    /// Favorite
    Heart,
    /// Quick view
    Eye,
}

impl IconType {
    /// Get the icon name as a string (used in CSS class names)
    pub fn name(self) -> &'static str {
        match self {
            IconType::Facebook => "facebook",
            IconType::Twitter => "twitter",
            IconType::Instagram => "instagram",
            IconType::Pinterest => "pinterest",
            IconType::Link => "link",
            IconType::Close => "close",
            IconType::Bag => "bag",
            IconType::Heart => "heart",
            IconType::Eye => "eye",
        }
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interaction state an icon is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconState {
    Inactive,
    Active,
    Hover,
}

/// Icon configuration with per-state background and border colors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconItem {
    #[serde(rename = "type")]
    pub icon_type: Option<IconType>,
    /// Path to the SVG icon asset
    pub icon: String,
    /// Optional navigation target
    pub router_link: Option<String>,
    /// Background when not selected
    pub inactive_color: Option<String>,
    /// Background when selected
    pub active_color: Option<String>,
    /// Background on hover
    pub hover_color: Option<String>,
    pub inactive_border_color: Option<String>,
    pub active_border_color: Option<String>,
    pub hover_border_color: Option<String>,
}

/// Treat empty strings like missing values
fn present(color: &Option<String>) -> Option<&str> {
    color.as_deref().filter(|c| !c.is_empty())
}

impl IconItem {
    /// Item for a registered type with only its asset path set
    pub fn new(icon_type: IconType, icon: &str) -> Self {
        Self {
            icon_type: Some(icon_type),
            icon: icon.to_string(),
            ..Default::default()
        }
    }

    /// Set the three background colors
    pub fn with_colors(mut self, inactive: &str, active: &str, hover: &str) -> Self {
        self.inactive_color = Some(inactive.to_string());
        self.active_color = Some(active.to_string());
        self.hover_color = Some(hover.to_string());
        self
    }

    pub fn with_inactive_border(mut self, color: &str) -> Self {
        self.inactive_border_color = Some(color.to_string());
        self
    }

    pub fn with_active_border(mut self, color: &str) -> Self {
        self.active_border_color = Some(color.to_string());
        self
    }

    pub fn with_hover_border(mut self, color: &str) -> Self {
        self.hover_border_color = Some(color.to_string());
        self
    }

    /// Background color for a state, falling back to the state's default token
    pub fn background_color(&self, state: IconState) -> &str {
        let own = match state {
            IconState::Inactive => present(&self.inactive_color),
            IconState::Active => present(&self.active_color),
            IconState::Hover => present(&self.hover_color),
        };
        own.unwrap_or_else(|| default_color(state))
    }

    /// Border color for a state: own border, then the same state's
    /// background, then the default token
    pub fn border_color(&self, state: IconState) -> &str {
        let border = match state {
            IconState::Inactive => present(&self.inactive_border_color),
            IconState::Active => present(&self.active_border_color),
            IconState::Hover => present(&self.hover_border_color),
        };
        border.unwrap_or_else(|| self.background_color(state))
    }

    /// Flatten to resolved background colors
    pub fn to_icon_config(&self) -> IconConfig {
        IconConfig {
            icon_type: self.icon_type,
            icon: self.icon.clone(),
            inactive_color: self.background_color(IconState::Inactive).to_string(),
            active_color: self.background_color(IconState::Active).to_string(),
            hover_color: self.background_color(IconState::Hover).to_string(),
        }
    }
}

/// Fully resolved background colors of an icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconConfig {
    #[serde(rename = "type")]
    pub icon_type: Option<IconType>,
    pub icon: String,
    pub inactive_color: String,
    pub active_color: String,
    pub hover_color: String,
}

/// Default token for a state
pub fn default_color(state: IconState) -> &'static str {
    match state {
        IconState::Inactive => BricksTokens::GRAY_05,
        IconState::Active => BricksTokens::PRIMARY,
        IconState::Hover => BricksTokens::SUCCESS_700,
    }
}

/// Background color for `item` in `state`
pub fn get_background_color(item: &IconItem, state: IconState) -> &str {
    item.background_color(state)
}

/// Border color for `item` in `state`
pub fn get_border_color(item: &IconItem, state: IconState) -> &str {
    item.border_color(state)
}

/// Social media icons
pub static SOCIAL_MEDIA_ICONS: Lazy<Vec<IconItem>> = Lazy::new(|| {
    let social = |icon_type, path| {
        IconItem::new(icon_type, path).with_colors(
            BricksTokens::WHITE,
            BricksTokens::PRIMARY,
            BricksTokens::PRIMARY,
        )
    };

    vec![
        social(IconType::Facebook, "/images/icon-facebook.svg"),
        social(IconType::Twitter, "/images/icon-twitter.svg"),
        social(IconType::Instagram, "/images/icon-instagram.svg"),
        social(IconType::Pinterest, "/images/icon-pinterest.svg"),
        social(IconType::Link, "/images/icon-link.svg"),
    ]
});

/// Utility icons
pub static UTILITY_ICONS: Lazy<Vec<IconItem>> = Lazy::new(|| {
    vec![
        IconItem::new(IconType::Close, "/images/icon-close.svg")
            .with_colors(BricksTokens::WHITE, BricksTokens::WHITE, BricksTokens::WHITE)
            .with_inactive_border(BricksTokens::GRAY_2)
            .with_active_border(BricksTokens::GRAY_9)
            .with_hover_border(BricksTokens::GRAY_9),
        IconItem::new(IconType::Bag, "/images/icon-bag.svg")
            .with_colors(BricksTokens::GRAY_05, BricksTokens::PRIMARY, BricksTokens::PRIMARY)
            .with_inactive_border(BricksTokens::GRAY_05),
        IconItem::new(IconType::Heart, "/images/icon-favorite.svg")
            .with_colors(BricksTokens::WHITE, BricksTokens::PRIMARY, BricksTokens::PRIMARY)
            .with_inactive_border(BricksTokens::GRAY_05),
        IconItem::new(IconType::Eye, "/images/icon-eye.svg")
            .with_colors(BricksTokens::WHITE, BricksTokens::PRIMARY, BricksTokens::PRIMARY)
            .with_inactive_border(BricksTokens::GRAY_05),
    ]
});

/// Look up a registered icon: social registry first, then utility
pub fn find_icon(icon_type: IconType) -> Option<&'static IconItem> {
    SOCIAL_MEDIA_ICONS
        .iter()
        .chain(UTILITY_ICONS.iter())
        .find(|item| item.icon_type == Some(icon_type))
}
