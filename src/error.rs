//! Errors reported when an input does not describe a color.

use thiserror::Error;

/// Every way an input can fail to describe a color. Each variant maps to one
/// malformed input shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Hex string with a length other than 3, 4, 6 or 8 digits, or a 3/6
    /// digit string with a non-hex character.
    #[error("invalid hex color `{0}`, expected #RGB or #RRGGBB")]
    InvalidHex(String),

    /// Hex string with alpha containing a non-hex character, or a hex string
    /// without alpha where one was required.
    #[error("invalid hex color with alpha `{0}`, expected #RGBA or #RRGGBBAA")]
    InvalidHexa(String),

    /// Red, green or blue missing from an RGB array, or not a number.
    #[error("invalid RGB array, expected numeric r, g and b channels")]
    InvalidRgb,

    /// Alpha of an RGBA array is not a number.
    #[error("invalid RGBA array, alpha must be a number or percentage")]
    InvalidRgba,

    /// Hue, saturation or lightness missing from an HSL array, or not a number.
    #[error("invalid HSL array, expected numeric h, s and l channels")]
    InvalidHsl,

    /// Alpha of an HSLA array is not a number.
    #[error("invalid HSLA array, alpha must be a number or percentage")]
    InvalidHsla,

    /// Text that is not an `rgb(r,g,b)` or `rgba(r,g,b,a)` function.
    #[error("invalid rgb()/rgba() string `{0}`")]
    InvalidRgbString(String),

    /// Text that is not an `hsl(h,s,l)` or `hsla(h,s,l,a)` function.
    #[error("invalid hsl()/hsla() string `{0}`")]
    InvalidHslString(String),

    /// The input did not match any of the accepted color formats.
    #[error("unrecognized color format `{0}`")]
    UnknownFormat(String),

    /// A channel was accessed by a name that does not exist.
    #[error("unknown color channel `{0}`")]
    UnknownChannel(String),
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            Error::InvalidHex("#12".to_string()).to_string(),
            "invalid hex color `#12`, expected #RGB or #RRGGBB"
        );
        assert_eq!(
            Error::UnknownFormat("not-a-color".to_string()).to_string(),
            "unrecognized color format `not-a-color`"
        );
        assert_eq!(
            Error::UnknownChannel("cyan".to_string()).to_string(),
            "unknown color channel `cyan`"
        );
    }
}
