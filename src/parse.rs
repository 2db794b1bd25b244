//! Parsers that validate the supported input shapes and normalize them into
//! canonical [`Rgba`] or [`Hsla`] records.
//!
//! Supported inputs:
//! * Hex strings: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, the `#` is optional.
//! * CSS functions: `rgb(r,g,b)`, `rgba(r,g,b,a)`, `hsl(h,s,l)`,
//!   `hsla(h,s,l,a)`. Any component except the hue may be a percentage.
//! * A [`ChannelMap`] holding channels by position (`0, 1, 2, [3]`) or by key
//!   (`r, g, b, [a]`, `h, s, l, [a]` or their upper-case variants).

use std::fmt;

use bitflags::bitflags;

use crate::{
    color::{Channel, Color, Component},
    error::{Error, Result},
    models::{Hsla, Rgba},
};

bitflags! {
    /// The input formats a [`Color`] accepts when it is constructed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Formats : u8 {
        /// Hex strings.
        const HEX = 1 << 0;
        /// `rgb()`/`rgba()` strings and RGB channel maps.
        const RGB = 1 << 1;
        /// `hsl()`/`hsla()` strings and HSL channel maps.
        const HSL = 1 << 2;
    }
}

impl Default for Formats {
    fn default() -> Self {
        Self::all()
    }
}

/// The value of a single channel, either a number or text that still has to
/// be interpreted, like `"42%"`.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelValue {
    /// A bare number.
    Number(Component),
    /// Text, usually a number or percentage.
    Text(String),
}

impl From<Component> for ChannelValue {
    fn from(value: Component) -> Self {
        Self::Number(value)
    }
}

#[cfg(feature = "f32")]
impl From<f64> for ChannelValue {
    fn from(value: f64) -> Self {
        Self::Number(value as Component)
    }
}

impl From<i32> for ChannelValue {
    fn from(value: i32) -> Self {
        Self::Number(value as Component)
    }
}

impl From<u8> for ChannelValue {
    fn from(value: u8) -> Self {
        Self::Number(value as Component)
    }
}

impl From<&str> for ChannelValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ChannelValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelValue::Number(n) => write!(f, "{n}"),
            ChannelValue::Text(t) => write!(f, "{t:?}"),
        }
    }
}

/// How a channel is addressed inside a [`ChannelMap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelKey {
    /// By position.
    Index(usize),
    /// By name, like `"r"` or `"H"`.
    Name(String),
}

/// An ordered collection of channel values, addressed by position and/or by
/// key.
///
/// When a channel is present both by position and by key, the key wins. An
/// upper-case key wins over a lower-case one.
/// ```rust
/// use tincture::{ChannelMap, Color};
/// let c = Color::new(ChannelMap::from([0, 0, 0]).with("g", "100%")).unwrap();
/// assert_eq!(c.hex(), "00ff00");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelMap {
    entries: Vec<(ChannelKey, ChannelValue)>,
}

impl ChannelMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with the given values at consecutive positions.
    pub fn positional<T: Into<ChannelValue>>(values: impl IntoIterator<Item = T>) -> Self {
        let mut map = Self::new();
        values.into_iter().for_each(|v| map.push(v));
        map
    }

    /// Add a value at the next free position.
    pub fn push(&mut self, value: impl Into<ChannelValue>) {
        let index = self
            .entries
            .iter()
            .filter(|(key, _)| matches!(key, ChannelKey::Index(_)))
            .count();
        self.entries.push((ChannelKey::Index(index), value.into()));
    }

    /// Add a value by key.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ChannelValue>) {
        self.entries.push((ChannelKey::Name(name.into()), value.into()));
    }

    /// Return the map with a value added by key.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ChannelValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// The number of values in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if the map holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, wanted: &ChannelKey) -> Option<&ChannelValue> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == wanted)
            .map(|(_, value)| value)
    }

    /// Look up a channel by its upper-case key, lower-case key or position,
    /// in that order.
    fn lookup(&self, index: usize, key: &str) -> Option<&ChannelValue> {
        self.find(&ChannelKey::Name(key.to_ascii_uppercase()))
            .or_else(|| self.find(&ChannelKey::Name(key.to_ascii_lowercase())))
            .or_else(|| self.find(&ChannelKey::Index(index)))
    }
}

impl<T: Into<ChannelValue>, const N: usize> From<[T; N]> for ChannelMap {
    fn from(values: [T; N]) -> Self {
        Self::positional(values)
    }
}

impl From<Rgba> for ChannelMap {
    fn from(rgb: Rgba) -> Self {
        let map = Self::new()
            .with("r", rgb.red)
            .with("g", rgb.green)
            .with("b", rgb.blue);
        match rgb.alpha {
            Some(alpha) => map.with("a", alpha),
            None => map,
        }
    }
}

impl From<Hsla> for ChannelMap {
    fn from(hsl: Hsla) -> Self {
        let map = Self::new()
            .with("h", hsl.hue)
            .with("s", hsl.saturation)
            .with("l", hsl.lightness);
        match hsl.alpha {
            Some(alpha) => map.with("a", alpha),
            None => map,
        }
    }
}

impl fmt::Display for ChannelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match key {
                ChannelKey::Index(index) => write!(f, "{index}: {value}")?,
                ChannelKey::Name(name) => write!(f, "{name}: {value}")?,
            }
        }
        f.write_str("}")
    }
}

/// Anything a [`Color`] can be constructed from.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput {
    /// A hex or CSS function string.
    Text(String),
    /// RGB or HSL channels.
    Channels(ChannelMap),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ChannelMap> for ColorInput {
    fn from(value: ChannelMap) -> Self {
        Self::Channels(value)
    }
}

impl<T: Into<ChannelValue>, const N: usize> From<[T; N]> for ColorInput {
    fn from(values: [T; N]) -> Self {
        Self::Channels(values.into())
    }
}

impl From<Rgba> for ColorInput {
    fn from(value: Rgba) -> Self {
        Self::Channels(value.into())
    }
}

impl From<Hsla> for ColorInput {
    fn from(value: Hsla) -> Self {
        Self::Channels(value.into())
    }
}

impl From<&Color> for ColorInput {
    fn from(value: &Color) -> Self {
        let rgb = value.rgb().with_alpha(value.alpha());
        Self::Channels(rgb.into())
    }
}

impl fmt::Display for ColorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorInput::Text(text) => f.write_str(text),
            ColorInput::Channels(map) => map.fmt(f),
        }
    }
}

/// The canonical record an input was parsed into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Parsed {
    Rgb(Rgba),
    Hsl(Hsla),
}

/// Parse any supported input, trying hex, then RGB, then HSL. Text that
/// starts like one of the formats is committed to it, so its specific error is
/// reported.
pub(crate) fn parse_color(input: &ColorInput, formats: Formats) -> Result<Parsed> {
    let parsed = match input {
        ColorInput::Text(text) => parse_text(text, formats),
        ColorInput::Channels(map) => parse_channels(map, formats),
    };

    match parsed {
        Ok(parsed) => {
            tracing::debug!(%input, ?parsed, "parsed color");
            Ok(parsed)
        }
        Err(err) => {
            tracing::debug!(%input, %err, "rejected color input");
            Err(err)
        }
    }
}

fn parse_text(text: &str, formats: Formats) -> Result<Parsed> {
    let trimmed = text.trim();
    let lowered = trimmed.to_ascii_lowercase();

    if formats.contains(Formats::HEX) && trimmed.starts_with('#') {
        return parse_hex(text).map(Parsed::Rgb);
    }
    if formats.contains(Formats::RGB) && lowered.starts_with("rgb") {
        return parse_rgb_str(text).map(Parsed::Rgb);
    }
    if formats.contains(Formats::HSL) && lowered.starts_with("hsl") {
        return parse_hsl_str(text).map(Parsed::Hsl);
    }

    // Bare hex digits without the leading `#`.
    if formats.contains(Formats::HEX) {
        if let Ok(rgb) = parse_hex(text) {
            return Ok(Parsed::Rgb(rgb));
        }
    }

    Err(Error::UnknownFormat(text.to_string()))
}

fn parse_channels(map: &ChannelMap, formats: Formats) -> Result<Parsed> {
    if formats.contains(Formats::RGB) {
        if let Ok(rgb) = parse_rgb(map) {
            return Ok(Parsed::Rgb(rgb));
        }
    }
    if formats.contains(Formats::HSL) {
        if let Ok(hsl) = parse_hsl(map) {
            return Ok(Parsed::Hsl(hsl));
        }
    }

    Err(Error::UnknownFormat(map.to_string()))
}

/// Parse a hex color.
///
/// The allowed formats are:
/// * #RGB
/// * #RGBA
/// * #RRGGBB
/// * #RRGGBBAA
///
/// The `#` is optional. Alpha is only set for the forms that include it.
pub fn parse_hex(hex: &str) -> Result<Rgba> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let (short, has_alpha) = match digits.len() {
        3 => (true, false),
        4 => (true, true),
        6 => (false, false),
        8 => (false, true),
        _ => return Err(Error::InvalidHex(hex.to_string())),
    };

    let invalid = || {
        if has_alpha {
            Error::InvalidHexa(hex.to_string())
        } else {
            Error::InvalidHex(hex.to_string())
        }
    };

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let nibbles = digits
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    let bytes: Vec<u8> = if short {
        // #RGB(A): every nibble is doubled, `f` becomes `ff`.
        nibbles.iter().map(|n| n * 17).collect()
    } else {
        nibbles.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect()
    };

    let rgb = Rgba::new(
        bytes[0] as Component,
        bytes[1] as Component,
        bytes[2] as Component,
    );

    Ok(match bytes.get(3) {
        Some(&alpha) => rgb.with_alpha(alpha as Component / 255.0),
        None => rgb,
    })
}

/// Parse a hex color that must include alpha, `#RGBA` or `#RRGGBBAA`.
pub fn parse_hexa(hex: &str) -> Result<Rgba> {
    match parse_hex(hex) {
        Ok(rgb) if rgb.alpha.is_some() => Ok(rgb),
        Ok(_) | Err(Error::InvalidHex(_)) => Err(Error::InvalidHexa(hex.to_string())),
        Err(err) => Err(err),
    }
}

/// Parse RGB channels. Red, green and blue are either numbers in the range
/// `[0, 255]` or percentages of 255. Alpha is either a number in the range
/// `[0, 1]` or a percentage.
pub fn parse_rgb(map: &ChannelMap) -> Result<Rgba> {
    let channel = |index: usize, key: &str| {
        map.lookup(index, key)
            .and_then(|value| interpret(value, 255.0, true))
            .ok_or(Error::InvalidRgb)
    };

    let rgb = Rgba::new(channel(0, "r")?, channel(1, "g")?, channel(2, "b")?);

    let alpha = match map.lookup(3, "a") {
        Some(value) => Some(interpret(value, 1.0, true).ok_or(Error::InvalidRgba)?),
        None => None,
    };

    Ok(rgb.with_alpha(alpha))
}

/// Parse an `rgb(r,g,b)` or `rgba(r,g,b,a)` string.
pub fn parse_rgb_str(s: &str) -> Result<Rgba> {
    let invalid = || Error::InvalidRgbString(s.to_string());

    let args = function_args(s, "rgb").ok_or_else(invalid)?;
    parse_rgb(&ChannelMap::positional(args)).map_err(|_| invalid())
}

/// Parse HSL channels. The hue is a number of degrees, percentages are not
/// allowed for it. Saturation, lightness and alpha are either numbers in the
/// range `[0, 1]` or percentages.
pub fn parse_hsl(map: &ChannelMap) -> Result<Hsla> {
    let channel = |index: usize, key: &str, allow_percent: bool| {
        map.lookup(index, key)
            .and_then(|value| interpret(value, 1.0, allow_percent))
            .ok_or(Error::InvalidHsl)
    };

    let hsl = Hsla::new(
        channel(0, "h", false)?,
        channel(1, "s", true)?,
        channel(2, "l", true)?,
    );

    let alpha = match map.lookup(3, "a") {
        Some(value) => Some(interpret(value, 1.0, true).ok_or(Error::InvalidHsla)?),
        None => None,
    };

    Ok(hsl.with_alpha(alpha))
}

/// Parse an `hsl(h,s,l)` or `hsla(h,s,l,a)` string.
pub fn parse_hsl_str(s: &str) -> Result<Hsla> {
    let invalid = || Error::InvalidHslString(s.to_string());

    let args = function_args(s, "hsl").ok_or_else(invalid)?;
    parse_hsl(&ChannelMap::positional(args)).map_err(|_| invalid())
}

/// Interpret a value for a single channel: a number, a percentage relative to
/// the channel's range, or a `#`-prefixed hexadecimal number.
pub fn parse_channel(channel: Channel, value: &ChannelValue) -> Result<Component> {
    let parsed = match value {
        ChannelValue::Text(text) => match text.trim().strip_prefix('#') {
            Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16).ok().map(|v| v as Component)
            }
            Some(_) => None,
            None => interpret(value, channel.percent_scale(), true),
        },
        ChannelValue::Number(_) => interpret(value, channel.percent_scale(), true),
    };

    parsed.ok_or(match channel {
        Channel::Red | Channel::Green | Channel::Blue => Error::InvalidRgb,
        Channel::Alpha => Error::InvalidRgba,
        Channel::Hue | Channel::Saturation | Channel::Lightness => Error::InvalidHsl,
    })
}

/// Turn a value into a number. Percentages are taken relative to `scale`.
fn interpret(value: &ChannelValue, scale: Component, allow_percent: bool) -> Option<Component> {
    let number = |text: &str| {
        text.trim()
            .parse::<Component>()
            .ok()
            .filter(|v| v.is_finite())
    };

    match value {
        ChannelValue::Number(n) => Some(*n).filter(|v| v.is_finite()),
        ChannelValue::Text(text) => match text.trim().strip_suffix('%') {
            Some(percent) if allow_percent => number(percent).map(|v| v * scale / 100.0),
            Some(_) => None,
            None => number(text),
        },
    }
}

/// Split `name(a,b,c)` or `namea(a,b,c,d)` into its arguments.
fn function_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let s = s.trim();
    let open = s.find('(')?;
    let function = s[..open].trim().to_ascii_lowercase();
    let body = s[open + 1..].strip_suffix(')')?;

    let expected = if function == name {
        3
    } else if function.strip_suffix('a') == Some(name) {
        4
    } else {
        return None;
    };

    let args = body.split(',').map(str::trim).collect::<Vec<_>>();
    (args.len() == expected).then_some(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hex_forms() {
        assert_eq!(parse_hex("#f96").unwrap(), Rgba::new(255.0, 153.0, 102.0));
        assert_eq!(parse_hex("ff9966").unwrap(), Rgba::new(255.0, 153.0, 102.0));
        assert_eq!(parse_hex("#FF9966").unwrap(), Rgba::new(255.0, 153.0, 102.0));

        let rgba = parse_hex("#f96c").unwrap();
        assert_eq!(rgba.to_components(), Rgba::new(255.0, 153.0, 102.0).to_components());
        assert_eq!(rgba.alpha, Some(204.0 / 255.0));

        let rgba = parse_hex("#ff996600").unwrap();
        assert_eq!(rgba.alpha, Some(0.0));
    }

    #[test]
    fn hex_errors() {
        assert_eq!(parse_hex("#12"), Err(Error::InvalidHex("#12".to_string())));
        assert_eq!(parse_hex(""), Err(Error::InvalidHex(String::new())));
        assert_eq!(
            parse_hex("#1234567"),
            Err(Error::InvalidHex("#1234567".to_string()))
        );
        assert_eq!(
            parse_hex("#ff99gg"),
            Err(Error::InvalidHex("#ff99gg".to_string()))
        );
        assert_eq!(
            parse_hex("#ff9966zz"),
            Err(Error::InvalidHexa("#ff9966zz".to_string()))
        );
        // Multi-byte characters count as bytes and never pass as digits.
        assert!(parse_hex("#ffé").is_err());
    }

    #[test]
    fn hexa_requires_alpha() {
        assert_eq!(parse_hexa("#ff996680").unwrap().alpha, Some(128.0 / 255.0));
        assert_eq!(parse_hexa("#f968").unwrap().alpha, Some(136.0 / 255.0));
        assert_eq!(parse_hexa("#f96"), Err(Error::InvalidHexa("#f96".to_string())));
        assert_eq!(parse_hexa("#1"), Err(Error::InvalidHexa("#1".to_string())));
    }

    #[test]
    fn rgb_positional_and_keyed() {
        assert_eq!(
            parse_rgb(&ChannelMap::from([255, 153, 102])).unwrap(),
            Rgba::new(255.0, 153.0, 102.0)
        );
        assert_eq!(
            parse_rgb(&ChannelMap::new().with("R", 1).with("G", 2).with("B", 3)).unwrap(),
            Rgba::new(1.0, 2.0, 3.0)
        );
        assert_eq!(
            parse_rgb(&ChannelMap::from([1, 2, 3]).with("g", 20)).unwrap(),
            Rgba::new(1.0, 20.0, 3.0)
        );
        assert_eq!(
            parse_rgb(&ChannelMap::new().with("g", 20).with("G", 40).with("r", 0).with("b", 0))
                .unwrap()
                .green,
            40.0
        );
    }

    #[test]
    fn rgb_percentages() {
        let rgb = parse_rgb(
            &ChannelMap::new()
                .with("r", "100%")
                .with("g", "0%")
                .with("b", "20%"),
        )
        .unwrap();
        assert_eq!(rgb, Rgba::new(255.0, 0.0, 51.0));

        let rgb = parse_rgb(&ChannelMap::from(["10", "20", "30", "50%"])).unwrap();
        assert_eq!(rgb, Rgba::new(10.0, 20.0, 30.0).with_alpha(0.5));
    }

    #[test]
    fn rgb_values_are_not_clamped() {
        let rgb = parse_rgb(&ChannelMap::from([300, -5, 0])).unwrap();
        assert_eq!(rgb, Rgba::new(300.0, -5.0, 0.0));
    }

    #[test]
    fn rgb_errors() {
        assert_eq!(parse_rgb(&ChannelMap::from([1, 2])), Err(Error::InvalidRgb));
        assert_eq!(parse_rgb(&ChannelMap::new()), Err(Error::InvalidRgb));
        assert_eq!(
            parse_rgb(&ChannelMap::from(["1", "two", "3"])),
            Err(Error::InvalidRgb)
        );
        assert_eq!(
            parse_rgb(&ChannelMap::from([1, 2, 3]).with("a", "opaque")),
            Err(Error::InvalidRgba)
        );
        assert_eq!(
            parse_rgb(&ChannelMap::from([Component::NAN, 0.0, 0.0])),
            Err(Error::InvalidRgb)
        );
    }

    #[test]
    fn rgb_strings() {
        assert_eq!(
            parse_rgb_str("rgb(255,153,102)").unwrap(),
            Rgba::new(255.0, 153.0, 102.0)
        );
        assert_eq!(
            parse_rgb_str(" RGBA( 255 , 153 , 102 , 0.5 ) ").unwrap(),
            Rgba::new(255.0, 153.0, 102.0).with_alpha(0.5)
        );
        assert_eq!(
            parse_rgb_str("rgb(100%,60%,40%)").unwrap(),
            Rgba::new(255.0, 153.0, 102.0)
        );

        for bad in ["rgb(1,2)", "rgb(1,2,3,4)", "rgba(1,2,3)", "rgb 1,2,3", "rgb(1,2,x)", "rgbx(1,2,3)"] {
            assert_eq!(
                parse_rgb_str(bad),
                Err(Error::InvalidRgbString(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn hsl_channels() {
        assert_eq!(
            parse_hsl(&ChannelMap::from([120.0, 0.5, 0.25])).unwrap(),
            Hsla::new(120.0, 0.5, 0.25)
        );
        assert_eq!(
            parse_hsl(
                &ChannelMap::new()
                    .with("H", 120)
                    .with("S", "50%")
                    .with("L", "25%")
                    .with("A", "10%")
            )
            .unwrap(),
            Hsla::new(120.0, 0.5, 0.25).with_alpha(0.1)
        );
        assert_eq!(
            parse_hsl(&ChannelMap::from(["50%", "50%", "50%"])),
            Err(Error::InvalidHsl)
        );
        assert_eq!(
            parse_hsl(&ChannelMap::new().with("h", 0).with("s", 0)),
            Err(Error::InvalidHsl)
        );
        assert_eq!(
            parse_hsl(&ChannelMap::from([0.0, 0.0, 0.0]).with("a", "")),
            Err(Error::InvalidHsla)
        );
    }

    #[test]
    fn hsl_strings() {
        assert_eq!(
            parse_hsl_str("hsl(20,100%,70%)").unwrap(),
            Hsla::new(20.0, 1.0, 0.7)
        );
        assert_eq!(
            parse_hsl_str("hsla(20, 1, 0.7, 0.25)").unwrap(),
            Hsla::new(20.0, 1.0, 0.7).with_alpha(0.25)
        );
        for bad in ["hsl(20%,100%,70%)", "hsl(20,100%)", "hsla(1,2,3)", "hsv(1,2,3)"] {
            assert_eq!(
                parse_hsl_str(bad),
                Err(Error::InvalidHslString(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn single_channels() {
        assert_eq!(parse_channel(Channel::Red, &"50%".into()).unwrap(), 127.5);
        assert_eq!(parse_channel(Channel::Hue, &"25%".into()).unwrap(), 90.0);
        assert_eq!(parse_channel(Channel::Lightness, &"40%".into()).unwrap(), 0.4);
        assert_eq!(parse_channel(Channel::Blue, &"#ff".into()).unwrap(), 255.0);
        assert_eq!(parse_channel(Channel::Green, &"#ff9966".into()).unwrap(), 16750950.0);
        assert_component_eq!(parse_channel(Channel::Alpha, &0.3.into()).unwrap(), 0.3);

        assert_eq!(parse_channel(Channel::Red, &"x".into()), Err(Error::InvalidRgb));
        assert_eq!(parse_channel(Channel::Alpha, &"#".into()), Err(Error::InvalidRgba));
        assert_eq!(parse_channel(Channel::Saturation, &"%".into()), Err(Error::InvalidHsl));
        for bad in ["#+ff", "#-1", "# ff", "#0x1f"] {
            assert_eq!(
                parse_channel(Channel::Blue, &bad.into()),
                Err(Error::InvalidRgb),
                "{bad}"
            );
        }
    }

    #[test]
    fn float_literals_are_numbers() {
        assert_eq!(ChannelValue::from(0.5_f64), ChannelValue::Number(0.5));
        assert_eq!(
            ChannelMap::from([120.0, 0.5, 0.25]),
            ChannelMap::positional([120 as Component, 0.5, 0.25])
        );
    }

    #[test]
    fn dispatch_tries_every_format() {
        let formats = Formats::default();

        assert!(matches!(
            parse_color(&"#fff".into(), formats),
            Ok(Parsed::Rgb(_))
        ));
        assert!(matches!(
            parse_color(&"fff".into(), formats),
            Ok(Parsed::Rgb(_))
        ));
        assert!(matches!(
            parse_color(&"hsla(0,0%,0%,1)".into(), formats),
            Ok(Parsed::Hsl(_))
        ));
        assert!(matches!(
            parse_color(&ChannelMap::new().with("h", 0).with("s", 0).with("l", 0).into(), formats),
            Ok(Parsed::Hsl(_))
        ));
        assert_eq!(
            parse_color(&ChannelMap::new().with("x", 1).into(), formats),
            Err(Error::UnknownFormat("{x: 1}".to_string()))
        );
        assert_eq!(
            parse_color(&"rgb(1,2,3)".into(), Formats::HEX),
            Err(Error::UnknownFormat("rgb(1,2,3)".to_string()))
        );
    }

    #[test]
    fn channel_map_display() {
        let map = ChannelMap::from([1]).with("r", "50%");
        assert_eq!(map.to_string(), r#"{0: 1, r: "50%"}"#);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }
}
