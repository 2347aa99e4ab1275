//! Button state for Bricks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Button variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary action button (filled with the primary color)
    #[default]
    Primary,
    /// Outlined button
    Outline,
    /// Low-emphasis text button
    Subtle,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Subtle => "subtle",
        }
    }
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

/// Form role of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        })
    }
}

/// Button inputs as seen by a renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub button_type: ButtonType,
    pub aria_label: Option<String>,
}

impl Button {
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn with_aria_label(mut self, label: &str) -> Self {
        self.aria_label = Some(label.to_string());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// CSS classes, e.g. `btn btn-medium btn-primary`
    pub fn classes(&self) -> String {
        format!("btn btn-{} btn-{}", self.size.as_str(), self.variant.as_str())
    }

    /// Whether a click should be emitted
    pub fn click(&self) -> bool {
        !self.disabled
    }

    pub fn is_focusable(&self) -> bool {
        !self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let button = Button::default();
        assert_eq!(button.variant, ButtonVariant::Primary);
        assert_eq!(button.size, ButtonSize::Medium);
        assert_eq!(button.button_type, ButtonType::Button);
        assert!(!button.disabled);
        assert_eq!(button.aria_label, None);
    }

    #[test]
    fn test_classes() {
        assert_eq!(Button::default().classes(), "btn btn-medium btn-primary");
        assert_eq!(
            Button::new(ButtonVariant::Primary)
                .with_size(ButtonSize::Small)
                .classes(),
            "btn btn-small btn-primary"
        );
        assert_eq!(
            Button::new(ButtonVariant::Outline)
                .with_size(ButtonSize::Large)
                .classes(),
            "btn btn-large btn-outline"
        );
        assert_eq!(
            Button::new(ButtonVariant::Subtle).classes(),
            "btn btn-medium btn-subtle"
        );
    }

    #[test]
    fn test_disabled_button_does_not_click() {
        let button = Button::default().disabled(true);
        assert!(!button.click());
        assert!(!button.is_focusable());

        let button = button.with_size(ButtonSize::Large);
        assert!(button.disabled);
    }

    #[test]
    fn test_type_and_label() {
        let button = Button::default()
            .with_type(ButtonType::Submit)
            .with_aria_label("Close dialog");
        assert_eq!(button.button_type.to_string(), "submit");
        assert_eq!(button.aria_label.as_deref(), Some("Close dialog"));
    }
}
