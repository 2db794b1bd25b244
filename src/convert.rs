//! Conversions between the RGB and HSL representations of a color, and the
//! pairwise conversion functions between hex strings, records and CSS
//! strings.
//!
//! Conversions pass the alpha component through untouched.
//!
//! ```rust
//! use tincture::convert;
//! let hsl = convert::hex_to_hsl("#ff0000").unwrap();
//! assert_eq!(hsl.hue, 0.0);
//! assert_eq!(convert::hsl_to_hex(&hsl), "ff0000");
//! ```

use crate::{
    color::Component,
    error::Result,
    format,
    models::{Hsla, Rgba},
    parse,
};

/// Convert from RGB notation to HSL notation.
pub fn rgb_to_hsl(rgb: &Rgba) -> Hsla {
    Hsla::from_components(util::rgb_to_hsl(&rgb.to_components()), rgb.alpha)
}

/// Convert from HSL notation to RGB notation. Channels are rounded to the
/// nearest integer, except for grays which keep `lightness * 255`.
pub fn hsl_to_rgb(hsl: &Hsla) -> Rgba {
    Rgba::from_components(util::hsl_to_rgb(&hsl.to_components()), hsl.alpha)
}

/// Convert from HSL notation to RGB notation, with an unset alpha reported as
/// fully opaque.
pub fn hsl_to_rgba(hsl: &Hsla) -> Rgba {
    hsl_to_rgb(hsl).with_alpha(hsl.alpha_or_opaque())
}

/// Parse a hex string into an RGB record.
pub fn hex_to_rgb(hex: &str) -> Result<Rgba> {
    parse::parse_hex(hex)
}

/// Parse a hex string with alpha (`#RGBA` or `#RRGGBBAA`) into an RGB record.
pub fn hexa_to_rgba(hex: &str) -> Result<Rgba> {
    parse::parse_hexa(hex)
}

/// Parse a hex string into an HSL record.
pub fn hex_to_hsl(hex: &str) -> Result<Hsla> {
    Ok(rgb_to_hsl(&parse::parse_hex(hex)?))
}

/// Format an RGB record as 6 hex digits.
pub fn rgb_to_hex(rgb: &Rgba) -> String {
    format::hex(rgb)
}

/// Format an RGB record as 8 hex digits including alpha.
pub fn rgb_to_hexa(rgb: &Rgba) -> String {
    format::hexa(rgb)
}

/// Format an RGB record as an `rgb(r,g,b)` string.
pub fn rgb_to_string(rgb: &Rgba) -> String {
    format::rgb(rgb)
}

/// Format an RGB record as an `rgba(r,g,b,a)` string.
pub fn rgba_to_string(rgb: &Rgba) -> String {
    format::rgba(rgb)
}

/// Format an HSL record as 6 hex digits.
pub fn hsl_to_hex(hsl: &Hsla) -> String {
    format::hex(&hsl_to_rgb(hsl))
}

/// Format an HSL record as 8 hex digits including alpha.
pub fn hsl_to_hexa(hsl: &Hsla) -> String {
    format::hexa(&hsl_to_rgb(hsl))
}

/// Format an HSL record as an `hsl(h,s%,l%)` string.
pub fn hsl_to_string(hsl: &Hsla) -> String {
    format::hsl(hsl)
}

/// Format an HSL record as an `hsla(h,s%,l%,a)` string.
pub fn hsla_to_string(hsl: &Hsla) -> String {
    format::hsla(hsl)
}

/// Parse an `rgb()` or `rgba()` string into an RGB record.
pub fn string_to_rgb(s: &str) -> Result<Rgba> {
    parse::parse_rgb_str(s)
}

/// Parse an `hsl()` or `hsla()` string into an HSL record.
pub fn string_to_hsl(s: &str) -> Result<Hsla> {
    parse::parse_hsl_str(s)
}

/// Calculate the perceived brightness of a hex color, as
/// `(R * 299 + G * 587 + B * 114) / 1000`. Only the first 6 digits are used.
pub fn hex_brightness(hex: &str) -> Result<Component> {
    let rgb = parse::parse_hex(hex)?;
    Ok(util::brightness(&rgb.to_components()))
}

/// Return true if the perceived brightness of the hex color is above the
/// threshold.
pub fn hex_is_light(hex: &str, threshold: Component) -> Result<bool> {
    Ok(hex_brightness(hex)? > threshold)
}

/// Return true if the perceived brightness of the hex color is at or below the
/// threshold.
pub fn hex_is_dark(hex: &str, threshold: Component) -> Result<bool> {
    Ok(hex_brightness(hex)? <= threshold)
}

pub(crate) mod util {
    use crate::{
        color::{Component, Components},
        math::{weighted_sum, wrap_unit, LUMINANCE_WEIGHTS},
    };

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(|v| v / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let delta_of = |c: Component| ((max - c) / 6.0 + delta / 2.0) / delta;
        let (delta_red, delta_green, delta_blue) = (delta_of(red), delta_of(green), delta_of(blue));

        let hue = if red == max {
            delta_blue - delta_green
        } else if green == max {
            1.0 / 3.0 + delta_red - delta_blue
        } else {
            2.0 / 3.0 + delta_green - delta_red
        };

        Components(wrap_unit(hue) * 360.0, saturation, lightness)
    }

    /// A channel is snapped to `1 / SNAP` before it is rounded.
    const SNAP: Component = 1e9;

    /// Convert from HSL notation to RGB notation, rounding each channel to
    /// the nearest integer. Gray stays unrounded.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation == 0.0 {
            let gray = lightness * 255.0;
            return Components(gray, gray, gray);
        }

        let hue = hue / 360.0;

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            (lightness + saturation) - (saturation * lightness)
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
        .map(|v| round_to_nearest(v * 255.0))
    }

    /// Round to the nearest integer after dropping the error left below
    /// `1 / SNAP`, so that a channel landing on an exact half rounds up.
    fn round_to_nearest(value: Component) -> Component {
        ((value * SNAP).round() / SNAP).round()
    }

    /// Calculate the value of one channel from the two HSL helper values and a
    /// hue fraction.
    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        let t = wrap_unit(t);

        if 6.0 * t < 1.0 {
            p + (q - p) * 6.0 * t
        } else if 2.0 * t < 1.0 {
            q
        } else if 3.0 * t < 2.0 {
            p + (q - p) * (4.0 - 6.0 * t)
        } else {
            p
        }
    }

    /// Perceived brightness of RGB components, taken as the values they are
    /// written as in hex.
    pub fn brightness(from: &Components) -> Component {
        let Components(red, green, blue) = from.map(|v| v.round().clamp(0.0, 255.0));
        (red * 299.0 + green * 587.0 + blue * 114.0) / 1000.0
    }

    /// Relative luminance of RGB components in the range `[0, 255]`.
    /// <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
    pub fn luminance(from: &Components) -> Component {
        let linear = from.map(|v| {
            let v = v / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        });

        weighted_sum(&LUMINANCE_WEIGHTS, &linear)
    }
}
