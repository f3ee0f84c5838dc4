//! Packed 0xAARRGGBB color

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

const OPAQUE: u32 = 0xFF00_0000;

/// An 8-bit sRGB color packed as `0xAARRGGBB`.
///
/// The alpha byte is forced to `0xFF` by every constructor, so two colors
/// with the same red, green and blue channels always compare equal.
///
/// # Example
///
/// ```
/// use pencel_core::Argb32;
///
/// let red = Argb32::from_packed(0xFF0000);
/// assert_eq!(red, Argb32::from_rgb(255, 0, 0));
/// assert_eq!(red.packed(), 0xFFFF_0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb32(u32);

impl Argb32 {
    /// Opaque black.
    pub const BLACK: Argb32 = Argb32(OPAQUE);

    /// Opaque white.
    pub const WHITE: Argb32 = Argb32(0xFFFF_FFFF);

    /// Build from separate channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(OPAQUE | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Build from a packed value. Any alpha in the top byte is replaced.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self(OPAQUE | (value & 0x00FF_FFFF))
    }

    /// Build from an `[R, G, B]` byte triple.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_rgb(bytes[0], bytes[1], bytes[2])
    }

    /// The packed `0xAARRGGBB` value (alpha is always `0xFF`).
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channels as `[R, G, B]`.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

impl From<[u8; 3]> for Argb32 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Argb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
    }
}

impl FromStr for Argb32 {
    type Err = ParseColorError;

    /// Parse a hex color.
    ///
    /// Accepted forms, each optionally prefixed by `#` or `0x`:
    /// - `RRGGBB`
    /// - `AARRGGBB` (alpha is discarded)
    /// - `RGB` shorthand (each digit doubled)
    ///
    /// Parsing is case-insensitive. Surrounding whitespace is trimmed.
    ///
    /// ```
    /// use pencel_core::Argb32;
    ///
    /// let a: Argb32 = "0xff3366".parse().unwrap();
    /// let b: Argb32 = "#80FF3366".parse().unwrap();
    /// let c: Argb32 = "F36".parse().unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, c);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        let value = s
            .bytes()
            .fold(0u64, |acc, digit| (acc << 4) | hex_value(digit) as u64);

        match s.len() {
            3 => {
                let r = ((value >> 8) & 0xF) as u8 * 17;
                let g = ((value >> 4) & 0xF) as u8 * 17;
                let b = (value & 0xF) as u8 * 17;
                Ok(Self::from_rgb(r, g, b))
            }
            6 | 8 => Ok(Self::from_packed(value as u32)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[inline]
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_accessors() {
        let c = Argb32::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0x34);
        assert_eq!(c.b(), 0x56);
        assert_eq!(c.packed(), 0xFF12_3456);
        assert_eq!(c.rgb(), [0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_alpha_is_forced_opaque() {
        assert_eq!(Argb32::from_packed(0x0012_3456).packed(), 0xFF12_3456);
        assert_eq!(Argb32::from_packed(0x7F12_3456), Argb32::from_rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_parse_forms() {
        let expected = Argb32::from_rgb(0xAB, 0xCD, 0xEF);
        for input in ["ABCDEF", "abcdef", "#abcdef", "0xABCDEF", "0XabcDEF", "00ABCDEF", "  #ABCDEF  "] {
            let parsed: Argb32 = input.parse().unwrap();
            assert_eq!(parsed, expected, "input {input:?}");
        }

        let short: Argb32 = "#F0A".parse().unwrap();
        assert_eq!(short, Argb32::from_rgb(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#12345".parse::<Argb32>(),
            Err(ParseColorError::InvalidLength)
        );
        assert_eq!("".parse::<Argb32>(), Err(ParseColorError::InvalidLength));
        assert_eq!(
            "GGHHII".parse::<Argb32>(),
            Err(ParseColorError::InvalidDigit('G'))
        );
        assert_eq!(
            "+12345".parse::<Argb32>(),
            Err(ParseColorError::InvalidDigit('+'))
        );
        assert_eq!(
            "ééé".parse::<Argb32>(),
            Err(ParseColorError::InvalidDigit('é'))
        );
    }

    #[test]
    fn test_display_is_hex_rgb() {
        assert_eq!(Argb32::from_rgb(255, 8, 0).to_string(), "#FF0800");
        assert_eq!(Argb32::BLACK.to_string(), "#000000");
    }
}
