//! tincture models a single color that can be read and written as hex, RGB(A)
//! or HSL(A), and derives new colors from it by lightening, darkening, mixing,
//! inverting and complementing.
//!
//! ```rust
//! use tincture::Color;
//!
//! let mut c = Color::new("#ff9966").unwrap();
//! assert_eq!(c.hsl_string(), "hsl(20,100%,70%)");
//!
//! c.darken(20.0).complementary();
//! assert!(c.is_dark(tincture::DEFAULT_BRIGHTNESS_THRESHOLD));
//! ```

#![deny(missing_docs)]

mod adjust;
mod color;
pub mod convert;
mod error;
mod format;
mod math;
pub mod models;
pub mod parse;

pub use adjust::{Gradient, DEFAULT_ADJUST, DEFAULT_BRIGHTNESS_THRESHOLD};
pub use color::{Channel, Color, Component, Components};
pub use convert::{
    hex_brightness, hex_is_dark, hex_is_light, hex_to_hsl, hex_to_rgb, hexa_to_rgba, hsl_to_hex,
    hsl_to_hexa, hsl_to_rgb, hsl_to_rgba, hsl_to_string, hsla_to_string, rgb_to_hex, rgb_to_hexa,
    rgb_to_hsl, rgb_to_string, rgba_to_string, string_to_hsl, string_to_rgb,
};
pub use error::{Error, Result};
pub use models::{Hsla, Model, Rgba};
pub use parse::{ChannelKey, ChannelMap, ChannelValue, ColorInput, Formats};
