//! Color definitions and shade ramps for the Bricks theme
//!
//! Custom accent colors are supplied as `#RRGGBB` strings. Each one is
//! expanded into a ramp of lighter and darker shades keyed `50..=900`,
//! with `500` being the base color itself.

use crate::error::ColorError;
use once_cell::sync::Lazy;
use palette::Srgb;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Design token references used as fallbacks by the component models
pub struct BricksTokens;

impl BricksTokens {
    // ═══════════════════════════════════════════════════════════════════════════
    // BRAND
    // ═══════════════════════════════════════════════════════════════════════════

    /// Primary brand color
    pub const PRIMARY: &'static str = "var(--color-primary)";
    /// Dark success shade, used for hover states
    pub const SUCCESS_700: &'static str = "var(--color-success-700)";

    // ═══════════════════════════════════════════════════════════════════════════
    // NEUTRALS
    // ═══════════════════════════════════════════════════════════════════════════

    /// White
    pub const WHITE: &'static str = "var(--color-white)";
    /// Lightest gray, used for inactive states
    pub const GRAY_05: &'static str = "var(--color-gray-05)";
    pub const GRAY_2: &'static str = "var(--color-gray-2)";
    pub const GRAY_9: &'static str = "var(--color-gray-9)";

    /// Static icon background when no state color applies
    pub const ICON_BACKGROUND: &'static str = "#F2F2F2";
}

/// Which custom base color a shade ramp belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
}

impl ColorRole {
    /// Both roles, in application order
    pub const ALL: [ColorRole; 2] = [ColorRole::Primary, ColorRole::Secondary];

    /// Role tag as used in custom property names
    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
        }
    }

    /// Custom property name for one shade of this role, e.g. `--color-primary-500`
    pub fn property_name(self, shade: u16) -> String {
        format!("--color-{}-{}", self.as_str(), shade)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shade steps lighter than the base
pub const LIGHTER_STEPS: [u16; 8] = [50, 100, 150, 200, 250, 300, 350, 400];
/// Shade step holding the unmodified base color
pub const BASE_STEP: u16 = 500;
/// Shade steps darker than the base
pub const DARKER_STEPS: [u16; 4] = [600, 700, 800, 900];
/// Every shade key, lightest first
pub const SHADE_KEYS: [u16; 13] = [
    50, 100, 150, 200, 250, 300, 350, 400, 500, 600, 700, 800, 900,
];

/// Ordered mapping from shade key to color string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadeSet {
    shades: BTreeMap<u16, String>,
}

impl ShadeSet {
    /// A set mapping every shade key to the same string
    fn uniform(color: &str) -> Self {
        Self {
            shades: SHADE_KEYS
                .iter()
                .map(|&key| (key, color.to_string()))
                .collect(),
        }
    }

    /// Color for a shade key
    pub fn get(&self, key: u16) -> Option<&str> {
        self.shades.get(&key).map(String::as_str)
    }

    /// Iterate shades lightest first
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.shades.iter().map(|(key, color)| (*key, color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// Custom property assignments for this set under the given role
    pub fn custom_properties(&self, role: ColorRole) -> Vec<(String, String)> {
        self.iter()
            .map(|(key, color)| (role.property_name(key), color.to_string()))
            .collect()
    }
}

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid")
});

/// Strict `#RRGGBB` check used for user input
pub fn is_valid_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// Parse a `#RRGGBB` (or bare `RRGGBB`) string
pub fn parse_hex_color(input: &str) -> Result<Srgb<u8>, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    // Length is counted in bytes; non-ASCII input must not reach the slicing parser
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorError::InvalidLength {
            input: input.to_string(),
            len: digits.chars().count(),
        });
    }

    // palette's channel parser also takes a sign, so `+f+f+f` would pass
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::NonHexDigit {
            input: input.to_string(),
        });
    }

    digits
        .parse::<Srgb<u8>>()
        .map_err(|source| ColorError::InvalidDigits {
            input: input.to_string(),
            source,
        })
}

/// Format a color as lowercase `#rrggbb`
pub fn color_to_hex(color: Srgb<u8>) -> String {
    format!("#{:x}", color)
}

/// Mix a channel toward white; `step` is a lighter shade key
fn lighten_channel(channel: u8, step: u16) -> u8 {
    let c = u32::from(channel);
    let weight = u32::from(BASE_STEP.saturating_sub(step));
    // c + round((255 - c) * weight / 500), rounding half up
    (c + ((255 - c) * weight * 2 + 500) / 1000) as u8
}

/// Mix a channel toward black; `step` is a darker shade key
fn darken_channel(channel: u8, step: u16) -> u8 {
    let c = u32::from(channel);
    let keep = u32::from((2 * BASE_STEP).saturating_sub(step));
    // round(c * (1 - (step - 500) / 500)), rounding half up
    ((c * keep * 2 + 500) / 1000) as u8
}

/// Lighter shade of `color` for a step in `LIGHTER_STEPS`
pub fn lighten(color: Srgb<u8>, step: u16) -> Srgb<u8> {
    Srgb::new(
        lighten_channel(color.red, step),
        lighten_channel(color.green, step),
        lighten_channel(color.blue, step),
    )
}

/// Darker shade of `color` for a step in `DARKER_STEPS`
pub fn darken(color: Srgb<u8>, step: u16) -> Srgb<u8> {
    Srgb::new(
        darken_channel(color.red, step),
        darken_channel(color.green, step),
        darken_channel(color.blue, step),
    )
}

/// Derive the full shade ramp for a base color.
///
/// Never fails: if `base_color` cannot be parsed, every shade maps to the
/// base string verbatim so the base color is still applied.
pub fn generate_shades(base_color: &str, role: ColorRole) -> ShadeSet {
    let rgb = match parse_hex_color(base_color) {
        Ok(rgb) => rgb,
        Err(error) => {
            warn!(%role, color = base_color, %error, "Failed to generate color shades");
            return ShadeSet::uniform(base_color);
        }
    };

    let mut shades = BTreeMap::new();
    for step in LIGHTER_STEPS {
        shades.insert(step, color_to_hex(lighten(rgb, step)));
    }
    for step in DARKER_STEPS {
        shades.insert(step, color_to_hex(darken(rgb, step)));
    }
    shades.insert(BASE_STEP, base_color.to_string());

    ShadeSet { shades }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn channel_sum(hex: &str) -> u32 {
        let c = parse_hex_color(hex).unwrap();
        u32::from(c.red) + u32::from(c.green) + u32::from(c.blue)
    }

    #[test]
    fn test_parse_hex_color_with_hash() {
        let color = parse_hex_color("#FF0000").unwrap();
        assert_eq!((color.red, color.green, color.blue), (255, 0, 0));
    }

    #[test]
    fn test_parse_hex_color_without_hash() {
        let color = parse_hex_color("00ff00").unwrap();
        assert_eq!((color.red, color.green, color.blue), (0, 255, 0));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#ééé").is_err());
    }

    #[test]
    fn test_parse_hex_color_rejects_signs() {
        assert!(matches!(
            parse_hex_color("#+f+f+f"),
            Err(ColorError::NonHexDigit { .. })
        ));
        assert!(parse_hex_color("-1-1-1").is_err());
    }

    #[test]
    fn test_generate_shades_signed_digits_fall_back_to_base() {
        let shades = generate_shades("#+f+f+f", ColorRole::Primary);
        assert_eq!(shades.get(50), Some("#+f+f+f"));
        assert_eq!(shades.get(900), Some("#+f+f+f"));
    }

    #[test]
    fn test_color_to_hex_is_lowercase_and_padded() {
        assert_eq!(color_to_hex(Srgb::new(255, 0, 10)), "#ff000a");
    }

    #[test]
    fn test_is_valid_hex_color() {
        assert!(is_valid_hex_color("#00b207"));
        assert!(is_valid_hex_color("#ABCDEF"));
        assert!(!is_valid_hex_color("00b207"));
        assert!(!is_valid_hex_color("#00b20"));
        assert!(!is_valid_hex_color("#00b2077"));
        assert!(!is_valid_hex_color("#00g207"));
    }

    #[test]
    fn test_generate_shades_red() {
        let shades = generate_shades("#ff0000", ColorRole::Primary);

        assert_eq!(shades.len(), SHADE_KEYS.len());
        assert_eq!(shades.get(500), Some("#ff0000"));
        assert_eq!(shades.get(50), Some("#ffe6e6"));
        assert_eq!(shades.get(400), Some("#ff3333"));
        assert_eq!(shades.get(600), Some("#cc0000"));
        assert_eq!(shades.get(700), Some("#990000"));
        assert_eq!(shades.get(800), Some("#660000"));
        assert_eq!(shades.get(900), Some("#330000"));
    }

    #[test]
    fn test_generate_shades_keeps_base_verbatim() {
        let shades = generate_shades("#FF0000", ColorRole::Secondary);
        assert_eq!(shades.get(500), Some("#FF0000"));
        assert_eq!(shades.get(600), Some("#cc0000"));
    }

    #[test]
    fn test_generate_shades_monotonic() {
        let shades = generate_shades("#618062", ColorRole::Secondary);
        let sums: Vec<u32> = shades.iter().map(|(_, c)| channel_sum(c)).collect();

        // Lightest first, so brightness never increases along the ramp
        for pair in sums.windows(2) {
            assert!(pair[0] > pair[1], "ramp not strictly darkening: {:?}", sums);
        }
    }

    #[test]
    #[traced_test]
    fn test_generate_shades_invalid_falls_back_to_base() {
        let shades = generate_shades("not-a-color", ColorRole::Primary);

        assert_eq!(shades.len(), SHADE_KEYS.len());
        for (_, color) in shades.iter() {
            assert_eq!(color, "not-a-color");
        }
        assert!(logs_contain("Failed to generate color shades"));
    }

    #[test]
    fn test_generate_shades_white_and_black() {
        let white = generate_shades("#ffffff", ColorRole::Primary);
        assert_eq!(white.get(50), Some("#ffffff"));
        assert_eq!(white.get(900), Some("#333333"));

        let black = generate_shades("#000000", ColorRole::Primary);
        assert_eq!(black.get(50), Some("#e6e6e6"));
        assert_eq!(black.get(900), Some("#000000"));
    }

    #[test]
    fn test_custom_properties_naming() {
        let shades = generate_shades("#00ff00", ColorRole::Secondary);
        let props = shades.custom_properties(ColorRole::Secondary);

        assert_eq!(props.len(), 13);
        assert_eq!(props[0].0, "--color-secondary-50");
        assert!(props
            .iter()
            .any(|(name, value)| name == "--color-secondary-500" && value == "#00ff00"));
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(ColorRole::Primary.as_str(), "primary");
        assert_eq!(ColorRole::Secondary.to_string(), "secondary");
        assert_eq!(ColorRole::Primary.property_name(150), "--color-primary-150");
    }
}
