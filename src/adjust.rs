//! Operations that derive a new color from an existing one: lighten, darken,
//! mix, invert and complement, plus the brightness checks built on top of
//! them.

use crate::{
    color::{Color, Component, Components},
    convert::util,
    error::Result,
    math::weighted_blend,
    parse::ColorInput,
};

/// The perceived brightness above which a color counts as light.
pub const DEFAULT_BRIGHTNESS_THRESHOLD: Component = 130.0;

/// The default number of percentage points a gradient lightens or darkens by.
pub const DEFAULT_ADJUST: Component = 10.0;

/// A pair of colors to build a gradient from, the lighter one first.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    /// The lighter end of the gradient.
    pub light: Color,
    /// The darker end of the gradient.
    pub dark: Color,
}

/// Shift a lightness in `[0, 1]` by a number of percentage points and clamp
/// the result.
fn shift_lightness(lightness: Component, points: Component) -> Component {
    let shifted = lightness * 100.0 + points;
    let clamped = shifted.clamp(0.0, 100.0);
    if clamped != shifted {
        tracing::trace!(shifted, clamped, "lightness clamped");
    }
    clamped / 100.0
}

impl Color {
    /// Increase the lightness by `amount` percentage points. With an amount of
    /// `0` the lightness moves halfway towards white instead.
    pub fn lighten(&mut self, amount: Component) -> &mut Self {
        let Components(hue, saturation, lightness) = self.hsl_components();

        let lightness = if amount != 0.0 {
            shift_lightness(lightness, amount)
        } else {
            lightness + (1.0 - lightness) / 2.0
        };

        self.set_hsl_components(Components(hue, saturation, lightness));
        self
    }

    /// Decrease the lightness by `amount` percentage points. With an amount of
    /// `0` the lightness moves halfway towards black instead.
    pub fn darken(&mut self, amount: Component) -> &mut Self {
        let Components(hue, saturation, lightness) = self.hsl_components();

        let lightness = if amount != 0.0 {
            shift_lightness(lightness, -amount)
        } else {
            lightness / 2.0
        };

        self.set_hsl_components(Components(hue, saturation, lightness));
        self
    }

    /// Rotate the hue by half a turn. Hues above 180 degrees turn back, all
    /// others turn forward, so a hue is never wrapped past 360.
    pub fn complementary(&mut self) -> &mut Self {
        let Components(hue, saturation, lightness) = self.hsl_components();
        let hue = if hue > 180.0 { hue - 180.0 } else { hue + 180.0 };
        self.set_hsl_components(Components(hue, saturation, lightness));
        self
    }

    /// Replace each of red, green and blue with its distance to 255.
    pub fn invert(&mut self) -> &mut Self {
        let rgb = self.rgb_components().map(|c| 255.0 - c);
        self.set_rgb_components(rgb);
        self
    }

    /// Mix another color into this one. `amount` in `[-100, 100]` weighs this
    /// color: each channel becomes `(c1 * w1 + c2 * w2) / 2` with
    /// `w1 = (amount + 100) / 100` and `w2 = 2 - w1`. At `0` both colors are
    /// averaged. The alpha of this color is kept.
    pub fn mix(&mut self, other: impl Into<ColorInput>, amount: Component) -> Result<&mut Self> {
        let other = Color::new(other)?;

        let Components(r1, g1, b1) = self.rgb_components();
        let Components(r2, g2, b2) = other.rgb_components();

        self.set_rgb_components(Components(
            weighted_blend(r1, r2, amount),
            weighted_blend(g1, g2, amount),
            weighted_blend(b1, b2, amount),
        ));
        Ok(self)
    }

    /// Return an inverted copy of this color.
    pub fn make_inverted(&self) -> Color {
        let mut color = self.clone();
        color.invert();
        color
    }

    /// Return a copy of this color with the hue rotated by half a turn.
    pub fn make_complementary(&self) -> Color {
        let mut color = self.clone();
        color.complementary();
        color
    }

    /// Return a darker copy of this color, see [`Color::darken`].
    pub fn make_darker(&self, amount: Component) -> Color {
        let mut color = self.clone();
        color.darken(amount);
        color
    }

    /// Return a lighter copy of this color, see [`Color::lighten`].
    pub fn make_lighter(&self, amount: Component) -> Color {
        let mut color = self.clone();
        color.lighten(amount);
        color
    }

    /// The relative luminance of the color, between 0 for black and 1 for
    /// white.
    pub fn luma(&self) -> Component {
        util::luminance(&self.rgb_components())
    }

    /// The perceived brightness of the color as written in hex, between 0 and
    /// 255.
    pub fn brightness(&self) -> Component {
        util::brightness(&self.rgb_components())
    }

    /// Return true if the brightness is above the threshold, usually
    /// [`DEFAULT_BRIGHTNESS_THRESHOLD`].
    pub fn is_light(&self, threshold: Component) -> bool {
        self.brightness() > threshold
    }

    /// Return true if the brightness is at or below the threshold. Exactly one
    /// of [`Color::is_light`] and [`Color::is_dark`] holds for a threshold.
    pub fn is_dark(&self, threshold: Component) -> bool {
        self.brightness() <= threshold
    }

    /// Pair this color with a lighter or darker variant of itself. A light
    /// color gets a darker partner, a dark color a lighter one.
    pub fn gradient(&self, amount: Component) -> Gradient {
        if self.is_light(DEFAULT_BRIGHTNESS_THRESHOLD) {
            Gradient {
                light: self.clone(),
                dark: self.make_darker(amount),
            }
        } else {
            Gradient {
                light: self.make_lighter(amount),
                dark: self.clone(),
            }
        }
    }
}
