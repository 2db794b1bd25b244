//! A [`Color`] holds a single color in the sRGB color space and keeps its RGB
//! and HSL representations in sync.

use std::fmt;
use std::str::FromStr;

use crate::convert;
use crate::error::{Error, Result};
use crate::format;
use crate::math::wrap_degrees;
use crate::models::{Hsla, Rgba};
use crate::parse::{self, ChannelMap, ChannelValue, ColorInput, Formats};

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The individual channels of a [`Color`] that can be read or written by
/// name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, in the range `[0, 255]`.
    Red,
    /// Green, in the range `[0, 255]`.
    Green,
    /// Blue, in the range `[0, 255]`.
    Blue,
    /// Alpha, in the range `[0, 1]`.
    Alpha,
    /// Hue, in degrees.
    Hue,
    /// Saturation, in the range `[0, 1]`.
    Saturation,
    /// Lightness, in the range `[0, 1]`.
    Lightness,
}

impl Channel {
    /// The value a percentage of this channel is relative to.
    pub fn percent_scale(&self) -> Component {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => 255.0,
            Channel::Hue => 360.0,
            Channel::Alpha | Channel::Saturation | Channel::Lightness => 1.0,
        }
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Channel::Red,
            "g" | "green" => Channel::Green,
            "b" | "blue" => Channel::Blue,
            "a" | "alpha" => Channel::Alpha,
            "h" | "hue" => Channel::Hue,
            "s" | "saturation" => Channel::Saturation,
            "l" | "lightness" => Channel::Lightness,
            _ => return Err(Error::UnknownChannel(s.to_string())),
        })
    }
}

/// A single color, stored as RGB components with a derived set of HSL
/// components and an optional alpha.
///
/// Both sets of components always describe the same color: setting an RGB
/// channel recomputes the HSL components and the other way around.
///
/// A `Color` is plain data. Mutating methods take `&mut self`, so sharing one
/// between threads needs the caller's own synchronization.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    rgb: Components,
    hsl: Components,
    alpha: Option<Component>,
}

impl Default for Color {
    /// Opaque white.
    fn default() -> Self {
        Self::from_rgb(Rgba::new(255.0, 255.0, 255.0).with_alpha(1.0))
    }
}

impl Color {
    /// Create a new [`Color`] from any of the supported inputs: a hex string,
    /// an `rgb()`/`rgba()`/`hsl()`/`hsla()` string or a [`ChannelMap`] with
    /// RGB or HSL channels.
    /// ```rust
    /// use tincture::Color;
    /// let c = Color::new("#ff9966").unwrap();
    /// assert_eq!(c.hex(), "ff9966");
    /// ```
    pub fn new(input: impl Into<ColorInput>) -> Result<Self> {
        Self::parse_with(input, Formats::all())
    }

    /// Create a new [`Color`], only accepting the given input formats.
    pub fn parse_with(input: impl Into<ColorInput>, formats: Formats) -> Result<Self> {
        Ok(match parse::parse_color(&input.into(), formats)? {
            parse::Parsed::Rgb(rgb) => Self::from_rgb(rgb),
            parse::Parsed::Hsl(hsl) => Self::from_hsl(hsl),
        })
    }

    /// Create a color from an RGB record, deriving the HSL components.
    pub fn from_rgb(rgb: Rgba) -> Self {
        let mut color = Self {
            rgb: rgb.to_components(),
            hsl: Components(0.0, 0.0, 0.0),
            alpha: rgb.alpha,
        };
        color.sync_hsl();
        color
    }

    /// Create a color from an HSL record, deriving the RGB components.
    pub fn from_hsl(hsl: Hsla) -> Self {
        let mut color = Self {
            rgb: Components(0.0, 0.0, 0.0),
            hsl: hsl.to_components(),
            alpha: hsl.alpha,
        };
        color.sync_rgb();
        color
    }

    fn sync_hsl(&mut self) {
        self.hsl = convert::rgb_to_hsl(&Rgba::from_components(self.rgb, None)).to_components();
    }

    fn sync_rgb(&mut self) {
        self.rgb = convert::hsl_to_rgb(&Hsla::from_components(self.hsl, None)).to_components();
    }

    fn replace_rgb(&mut self, rgb: Rgba) {
        self.rgb = rgb.to_components();
        self.alpha = rgb.alpha;
        self.sync_hsl();
    }

    fn replace_hsl(&mut self, hsl: Hsla) {
        self.hsl = hsl.to_components();
        self.alpha = hsl.alpha;
        self.sync_rgb();
    }

    pub(crate) fn set_rgb_components(&mut self, rgb: Components) {
        self.rgb = rgb;
        self.sync_hsl();
    }

    pub(crate) fn set_hsl_components(&mut self, hsl: Components) {
        self.hsl = hsl;
        self.sync_rgb();
    }

    pub(crate) fn rgb_components(&self) -> Components {
        self.rgb
    }

    pub(crate) fn hsl_components(&self) -> Components {
        self.hsl
    }
}

// Setters.
impl Color {
    /// Replace the color with one parsed from a hex string.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        let rgb = parse::parse_hex(hex)?;
        self.replace_rgb(rgb);
        Ok(())
    }

    /// Replace the color with one parsed from RGB channels.
    pub fn set_rgb(&mut self, channels: &ChannelMap) -> Result<()> {
        let rgb = parse::parse_rgb(channels)?;
        self.replace_rgb(rgb);
        Ok(())
    }

    /// Replace the color with one parsed from an `rgb()` or `rgba()` string.
    pub fn set_rgb_str(&mut self, s: &str) -> Result<()> {
        let rgb = parse::parse_rgb_str(s)?;
        self.replace_rgb(rgb);
        Ok(())
    }

    /// Replace the color with one parsed from HSL channels.
    pub fn set_hsl(&mut self, channels: &ChannelMap) -> Result<()> {
        let hsl = parse::parse_hsl(channels)?;
        self.replace_hsl(hsl);
        Ok(())
    }

    /// Replace the color with one parsed from an `hsl()` or `hsla()` string.
    pub fn set_hsl_str(&mut self, s: &str) -> Result<()> {
        let hsl = parse::parse_hsl_str(s)?;
        self.replace_hsl(hsl);
        Ok(())
    }

    /// Set a single channel. The value can be a number, a percentage string
    /// relative to the channel's range, or a `#`-prefixed hexadecimal number.
    pub fn set(&mut self, channel: Channel, value: impl Into<ChannelValue>) -> Result<()> {
        let value = parse::parse_channel(channel, &value.into())?;

        match channel {
            Channel::Red => self.set_rgb_components(Components(value, self.rgb.1, self.rgb.2)),
            Channel::Green => self.set_rgb_components(Components(self.rgb.0, value, self.rgb.2)),
            Channel::Blue => self.set_rgb_components(Components(self.rgb.0, self.rgb.1, value)),
            Channel::Alpha => self.alpha = Some(value),
            Channel::Hue => {
                self.set_hsl_components(Components(wrap_degrees(value), self.hsl.1, self.hsl.2))
            }
            Channel::Saturation => {
                self.set_hsl_components(Components(self.hsl.0, value, self.hsl.2))
            }
            Channel::Lightness => {
                self.set_hsl_components(Components(self.hsl.0, self.hsl.1, value))
            }
        }

        Ok(())
    }

    /// Set the red channel.
    pub fn set_red(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set(Channel::Red, value)
    }

    /// Set the green channel.
    pub fn set_green(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set(Channel::Green, value)
    }

    /// Set the blue channel.
    pub fn set_blue(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set(Channel::Blue, value)
    }

    /// Set the alpha channel.
    pub fn set_alpha(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set(Channel::Alpha, value)
    }

    /// Set the hue. A hue outside of `[0, 360)` is corrected by a single turn.
    pub fn set_hue(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set(Channel::Hue, value)
    }

    /// Set the saturation.
    pub fn set_saturation(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set(Channel::Saturation, value)
    }

    /// Set the lightness.
    pub fn set_lightness(&mut self, value: impl Into<ChannelValue>) -> Result<()> {
        self.set(Channel::Lightness, value)
    }

    /// Set a channel by its name, e.g. `"red"` or `"l"`.
    pub fn set_channel(&mut self, name: &str, value: impl Into<ChannelValue>) -> Result<()> {
        self.set(name.parse()?, value)
    }
}

// Getters.
impl Color {
    /// Return the value of a single channel. An unset alpha reads as `1.0`.
    pub fn get(&self, channel: Channel) -> Component {
        match channel {
            Channel::Red => self.rgb.0,
            Channel::Green => self.rgb.1,
            Channel::Blue => self.rgb.2,
            Channel::Alpha => self.alpha.unwrap_or(1.0),
            Channel::Hue => self.hsl.0,
            Channel::Saturation => self.hsl.1,
            Channel::Lightness => self.hsl.2,
        }
    }

    /// Return the value of a channel by its name, e.g. `"green"` or `"h"`.
    pub fn channel(&self, name: &str) -> Result<Component> {
        Ok(self.get(name.parse()?))
    }

    /// The red component of the color.
    pub fn red(&self) -> Component {
        self.rgb.0
    }

    /// The green component of the color.
    pub fn green(&self) -> Component {
        self.rgb.1
    }

    /// The blue component of the color.
    pub fn blue(&self) -> Component {
        self.rgb.2
    }

    /// The alpha component of the color, `None` if it was never specified.
    pub fn alpha(&self) -> Option<Component> {
        self.alpha
    }

    /// The hue of the color in degrees.
    pub fn hue(&self) -> Component {
        self.hsl.0
    }

    /// The saturation of the color.
    pub fn saturation(&self) -> Component {
        self.hsl.1
    }

    /// The lightness of the color.
    pub fn lightness(&self) -> Component {
        self.hsl.2
    }

    /// The color as 6 hex digits, without a leading `#`.
    pub fn hex(&self) -> String {
        format::hex(&self.rgb())
    }

    /// The color as 8 hex digits including alpha, without a leading `#`. An
    /// unset alpha is written as `ff`.
    pub fn hexa(&self) -> String {
        format::hexa(&self.rgba())
    }

    /// The RGB components, without alpha.
    pub fn rgb(&self) -> Rgba {
        Rgba::from_components(self.rgb, None)
    }

    /// The RGB components with alpha, an unset alpha reads as `1.0`.
    pub fn rgba(&self) -> Rgba {
        Rgba::from_components(self.rgb, Some(self.alpha.unwrap_or(1.0)))
    }

    /// The HSL components, without alpha.
    pub fn hsl(&self) -> Hsla {
        Hsla::from_components(self.hsl, None)
    }

    /// The HSL components with alpha, an unset alpha reads as `1.0`.
    pub fn hsla(&self) -> Hsla {
        Hsla::from_components(self.hsl, Some(self.alpha.unwrap_or(1.0)))
    }

    /// The color as an `rgb(r,g,b)` string.
    pub fn rgb_string(&self) -> String {
        format::rgb(&self.rgb())
    }

    /// The color as an `rgba(r,g,b,a)` string.
    pub fn rgba_string(&self) -> String {
        format::rgba(&self.rgba())
    }

    /// The color as an `hsl(h,s%,l%)` string.
    pub fn hsl_string(&self) -> String {
        format::hsl(&self.hsl())
    }

    /// The color as an `hsla(h,s%,l%,a)` string.
    pub fn hsla_string(&self) -> String {
        format::hsla(&self.hsla())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha.is_some() {
            write!(f, "#{}", self.hexa())
        } else {
            write!(f, "#{}", self.hex())
        }
    }
}
