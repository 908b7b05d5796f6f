//! Opaque RGB colors with `#rrggbb` and packed `u32` encodings.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A cell color.
///
/// Colors are stored as three channels with an implicit, fully opaque
/// alpha. The canonical string encoding is `#rrggbb` (lowercase when
/// formatted, case-insensitive when parsed) and the canonical numeric
/// encoding is [`to_rgba`](Color::to_rgba): `0xRRGGBBFF`.
///
/// Two colors are equal iff their numeric encodings are equal. Alpha is
/// dropped on construction via [`from_rgba`](Color::from_rgba), so a
/// presentation surface that hands back a translucent pixel still
/// compares equal to the palette entry it was painted from.
///
/// # Examples
///
/// ```
/// use turmite_core::Color;
///
/// let c: Color = "#8DA1B9".parse().unwrap();
/// assert_eq!(c.to_hex(), "#8da1b9");
/// assert_eq!(c.to_rgba(), 0x8da1b9ff);
/// assert_eq!(Color::from_rgba(0x8d, 0xa1, 0xb9, 0x10), c);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Pure white, `#ffffff`.
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Pure black, `#000000`.
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Build a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from four channels. Alpha is normalized away.
    pub const fn from_rgba(r: u8, g: u8, b: u8, _a: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string (hex digits in either case).
    ///
    /// The leading `#` is mandatory and exactly six hex digits must follow.
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError {
            input: input.to_string(),
        };
        let digits = input.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        self.r
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.b
    }

    /// Packed `0xRRGGBBAA` encoding with alpha fixed at `0xff`.
    pub fn to_rgba(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, 0xff])
    }

    /// Inverse of [`to_rgba`](Color::to_rgba). The alpha byte is ignored.
    pub fn from_packed(rgba: u32) -> Self {
        let [r, g, b, _] = rgba.to_be_bytes();
        Self::rgb(r, g, b)
    }

    /// Lowercase `#rrggbb` encoding.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// A string that is not a well-formed `#rrggbb` color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a #rrggbb color", self.input)
    }
}

impl Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        let lower = Color::from_hex("#ffa07a").unwrap();
        let upper = Color::from_hex("#FFA07A").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, Color::rgb(0xff, 0xa0, 0x7a));
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x0C, 0xEF).to_string(), "#ab0cef");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "#", "ffffff", "#fff", "#fffffff", "#gggggg", "# ffffff", "#ff ff ff"] {
            assert!(Color::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_multibyte_input_without_panicking() {
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn error_keeps_input() {
        let err = Color::from_hex("#12345").unwrap_err();
        assert_eq!(err.input, "#12345");
        assert!(err.to_string().contains("#12345"));
    }

    #[test]
    fn alpha_is_normalized() {
        let opaque = Color::from_rgba(1, 2, 3, 0xff);
        let clear = Color::from_rgba(1, 2, 3, 0);
        assert_eq!(opaque, clear);
        assert_eq!(clear.to_rgba() & 0xff, 0xff);
    }

    #[test]
    fn packed_encoding_matches_channels() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_rgba(), 0x123456ff);
        assert_eq!(Color::from_packed(0x12345600), c);
    }
}
