//! Component state for Bricks widgets
//!
//! The renderer-independent half of each component: inputs, derived
//! classes and styles, and interaction handling.

pub mod button;
pub mod color_picker;
pub mod icon;
pub mod theme_toggle;

pub use button::*;
pub use color_picker::*;
pub use icon::*;
pub use theme_toggle::*;
