//! The canonical record for a color in the sRGB color space.

use crate::color::{Color, Component};

use super::Model;

tincture_macros::gen_model! {
    /// A color specified with red, green and blue channels in the range
    /// `[0, 255]`.
    pub struct Rgba {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Model for Rgba {
    fn to_color(&self) -> Color {
        Color::from_rgb(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn new_records_have_no_alpha() {
        let rgb = Rgba::new(255.0, 153.0, 102.0);
        assert_eq!(rgb.alpha, None);
        assert_eq!(rgb.alpha_or_opaque(), 1.0);
        assert_eq!(rgb.to_components(), Components(255.0, 153.0, 102.0));
    }

    #[test]
    fn explicit_alpha_is_kept() {
        let rgb = Rgba::new(255.0, 153.0, 102.0).with_alpha(0.0);
        assert_eq!(rgb.alpha, Some(0.0));
        assert_eq!(rgb.alpha_or_opaque(), 0.0);

        let rgb = Rgba::from_components(Components(1.0, 2.0, 3.0), Some(0.5));
        assert_eq!(rgb.red, 1.0);
        assert_eq!(rgb.blue, 3.0);
        assert_eq!(rgb.alpha, Some(0.5));
    }

    #[test]
    fn to_color_derives_hsl() {
        let color = Rgba::new(255.0, 0.0, 0.0).to_color();
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.lightness(), 0.5);
    }
}
