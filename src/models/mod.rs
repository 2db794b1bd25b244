//! The canonical records every parser converges to.

use crate::color::Color;

pub mod hsl;
pub mod rgb;

pub use hsl::Hsla;
pub use rgb::Rgba;

/// A trait implemented for canonical records that can be turned into a full
/// [`Color`].
pub trait Model {
    /// Convert the record to a [`Color`], deriving the other color space.
    fn to_color(&self) -> Color;
}
