//! Theme data model for Bricks
//!
//! Provides the theme mode, the user's custom colors, and the derived
//! snapshot consumed by renderers.

use crate::colors::ColorRole;
use crate::error::UnknownMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme mode (light, dark or following the system)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// System preference (follows OS setting)
    System,
}

impl ThemeMode {
    /// Every mode, in presentation order
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Stored/serialized name of the mode
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Mode reached by toggling. System always lands on light.
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark | ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Resolve whether this mode renders dark, given the system preference
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_prefers_dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// User-selected accent colors. Absent fields fall back to the stylesheet defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

impl CustomColors {
    /// No custom colors
    pub fn empty() -> Self {
        Self::default()
    }

    /// Only a primary color
    pub fn primary(hex: &str) -> Self {
        Self {
            primary_color: Some(hex.to_string()),
            secondary_color: None,
        }
    }

    /// Only a secondary color
    pub fn secondary(hex: &str) -> Self {
        Self {
            primary_color: None,
            secondary_color: Some(hex.to_string()),
        }
    }

    /// Set primary color
    pub fn with_primary(mut self, hex: &str) -> Self {
        self.primary_color = Some(hex.to_string());
        self
    }

    /// Set secondary color
    pub fn with_secondary(mut self, hex: &str) -> Self {
        self.secondary_color = Some(hex.to_string());
        self
    }

    /// Color for a role, if set
    pub fn get(&self, role: ColorRole) -> Option<&str> {
        match role {
            ColorRole::Primary => self.primary_color.as_deref(),
            ColorRole::Secondary => self.secondary_color.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary_color.is_none() && self.secondary_color.is_none()
    }
}

/// Resolved view of the theme at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub is_dark: bool,
    pub colors: CustomColors,
}
