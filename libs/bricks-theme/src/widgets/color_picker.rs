//! Accent color picker
//!
//! Holds the colors being edited and forwards valid ones to the theme
//! service. Invalid input never reaches the service.

use crate::colors::is_valid_hex_color;
use crate::service::ThemeService;
use crate::theme::CustomColors;
use tracing::warn;

/// Brand green
pub const DEFAULT_PRIMARY: &str = "#00b207";
/// Brand green-gray
pub const DEFAULT_SECONDARY: &str = "#618062";

/// Editing state of the primary/secondary color inputs
#[derive(Debug)]
pub struct ColorPicker<'a> {
    service: &'a ThemeService,
    pub primary_color: String,
    pub secondary_color: String,
}

impl<'a> ColorPicker<'a> {
    /// Start from the service's current custom colors, else the defaults
    pub fn new(service: &'a ThemeService) -> Self {
        let current = service.colors();
        Self {
            service,
            primary_color: current
                .primary_color
                .unwrap_or_else(|| DEFAULT_PRIMARY.to_string()),
            secondary_color: current
                .secondary_color
                .unwrap_or_else(|| DEFAULT_SECONDARY.to_string()),
        }
    }

    /// Apply the primary color alone. Returns whether it was applied.
    pub fn update_primary(&self) -> bool {
        if !check(&self.primary_color) {
            return false;
        }
        self.service
            .set_colors(CustomColors::primary(&self.primary_color));
        true
    }

    /// Apply the secondary color alone. Returns whether it was applied.
    pub fn update_secondary(&self) -> bool {
        if !check(&self.secondary_color) {
            return false;
        }
        self.service
            .set_colors(CustomColors::secondary(&self.secondary_color));
        true
    }

    /// Apply both colors, only if both are valid
    pub fn apply(&self) -> bool {
        // Evaluate both so each invalid input is reported
        let primary_ok = check(&self.primary_color);
        let secondary_ok = check(&self.secondary_color);
        if !(primary_ok && secondary_ok) {
            return false;
        }
        self.service.set_colors(
            CustomColors::primary(&self.primary_color).with_secondary(&self.secondary_color),
        );
        true
    }

    /// Restore the default inputs and reset the whole theme
    pub fn reset(&mut self) {
        self.primary_color = DEFAULT_PRIMARY.to_string();
        self.secondary_color = DEFAULT_SECONDARY.to_string();
        self.service.reset();
    }
}

fn check(color: &str) -> bool {
    let valid = is_valid_hex_color(color);
    if !valid {
        warn!(color, "Ignoring invalid hex color");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::surface::MemorySurface;
    use crate::system::ManualPreference;
    use crate::theme::ThemeMode;
    use std::sync::Arc;

    fn service() -> ThemeService {
        ThemeService::new(
            MemoryStore::new(),
            MemorySurface::new(),
            Arc::new(ManualPreference::new(false)),
        )
    }

    #[test]
    fn test_defaults_without_custom_colors() {
        let service = service();
        let picker = ColorPicker::new(&service);
        assert_eq!(picker.primary_color, DEFAULT_PRIMARY);
        assert_eq!(picker.secondary_color, DEFAULT_SECONDARY);
    }

    #[test]
    fn test_seeded_from_service() {
        let service = service();
        service.set_colors(CustomColors::secondary("#123456"));

        let picker = ColorPicker::new(&service);
        assert_eq!(picker.primary_color, DEFAULT_PRIMARY);
        assert_eq!(picker.secondary_color, "#123456");
    }

    #[test]
    fn test_update_primary_replaces_colors() {
        let service = service();
        service.set_colors(CustomColors::secondary("#123456"));

        let mut picker = ColorPicker::new(&service);
        picker.primary_color = "#abcdef".to_string();
        assert!(picker.update_primary());
        assert_eq!(service.colors(), CustomColors::primary("#abcdef"));
    }

    #[test]
    fn test_invalid_input_is_ignored() {
        let service = service();
        let mut picker = ColorPicker::new(&service);

        picker.secondary_color = "green".to_string();
        assert!(!picker.update_secondary());
        assert!(!picker.apply());
        assert!(service.colors().is_empty());
    }

    #[test]
    fn test_apply_sets_both() {
        let service = service();
        let picker = ColorPicker::new(&service);

        assert!(picker.apply());
        assert_eq!(
            service.colors(),
            CustomColors::primary(DEFAULT_PRIMARY).with_secondary(DEFAULT_SECONDARY)
        );
    }

    #[test]
    fn test_reset() {
        let service = service();
        service.set_mode(ThemeMode::Dark);

        let mut picker = ColorPicker::new(&service);
        picker.primary_color = "#000000".to_string();
        assert!(picker.update_primary());

        picker.reset();
        assert_eq!(picker.primary_color, DEFAULT_PRIMARY);
        assert_eq!(service.mode(), ThemeMode::Light);
        assert!(service.colors().is_empty());
    }
}
