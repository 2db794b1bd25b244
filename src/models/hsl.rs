//! The canonical record for a color with the HSL notation in the sRGB color
//! space.

use crate::color::{Color, Component};

use super::Model;

tincture_macros::gen_model! {
    /// A color specified with a hue in degrees and saturation and lightness in
    /// the range `[0, 1]`.
    pub struct Hsla {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Model for Hsla {
    fn to_color(&self) -> Color {
        Color::from_hsl(*self)
    }
}
