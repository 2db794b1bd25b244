//! Format canonical records as hex digits or CSS function strings.

use crate::{
    color::Component,
    models::{Hsla, Rgba},
};

/// Number of decimals kept when writing a component in a CSS function.
const DECIMALS: usize = 3;

/// Write red, green and blue as 6 hex digits. Channels are rounded and clamped
/// to `[0, 255]`.
pub fn hex(rgb: &Rgba) -> String {
    format!(
        "{:02x}{:02x}{:02x}",
        to_byte(rgb.red),
        to_byte(rgb.green),
        to_byte(rgb.blue)
    )
}

/// Write red, green, blue and alpha as 8 hex digits. An unset alpha is written
/// as `ff`.
pub fn hexa(rgb: &Rgba) -> String {
    format!(
        "{}{:02x}",
        hex(rgb),
        to_byte(rgb.alpha_or_opaque() * 255.0)
    )
}

/// Write an `rgb(r,g,b)` string.
pub fn rgb(rgb: &Rgba) -> String {
    format!(
        "rgb({},{},{})",
        number(rgb.red),
        number(rgb.green),
        number(rgb.blue)
    )
}

/// Write an `rgba(r,g,b,a)` string. An unset alpha is written as `1`.
pub fn rgba(rgb: &Rgba) -> String {
    format!(
        "rgba({},{},{},{})",
        number(rgb.red),
        number(rgb.green),
        number(rgb.blue),
        number(rgb.alpha_or_opaque())
    )
}

/// Write an `hsl(h,s%,l%)` string.
pub fn hsl(hsl: &Hsla) -> String {
    format!(
        "hsl({},{}%,{}%)",
        number(hsl.hue),
        number(hsl.saturation * 100.0),
        number(hsl.lightness * 100.0)
    )
}

/// Write an `hsla(h,s%,l%,a)` string. An unset alpha is written as `1`.
pub fn hsla(hsl: &Hsla) -> String {
    format!(
        "hsla({},{}%,{}%,{})",
        number(hsl.hue),
        number(hsl.saturation * 100.0),
        number(hsl.lightness * 100.0),
        number(hsl.alpha_or_opaque())
    )
}

fn to_byte(value: Component) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Write a number with at most [`DECIMALS`] decimals and no trailing zeros.
/// The decimal separator is always a `.`.
fn number(value: Component) -> String {
    let mut formatted = format!("{:.*}", DECIMALS, value);
    while formatted.contains('.') && formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }
    if formatted == "-0" {
        formatted = "0".to_string();
    }
    formatted
}
