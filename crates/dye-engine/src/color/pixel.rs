//! Pixel color types
//!
//! Palette anchors are plain 8-bit RGB triples; image pixels carry an
//! additional alpha byte and convert losslessly to and from the packed
//! `0xAARRGGBB` layout used by [`ArgbImage`](crate::ArgbImage).

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An opaque 8-bit RGB color.
///
/// Used for palette anchors. Ordering compares the packed `0xRRGGBB`
/// value, which is the same as comparing red, then green, then blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, the implicit first stop of every palette gradient.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from 8-bit components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Attach an alpha value, producing an image pixel.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Argb {
        Argb::new(a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a hex color token.
    ///
    /// A leading `#` is optional. The digits are read as one hexadecimal
    /// number that must fit a signed 32-bit integer; the low 24 bits give
    /// the color. `#ff0000` and `FF0000` are red, while a short token such
    /// as `#ff` is the number `0xff` and therefore pure blue.
    ///
    /// No whitespace trimming is done: descriptor tokens are matched
    /// byte for byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use dye_engine::Rgb;
    ///
    /// let red: Rgb = "#ff0000".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// let blue: Rgb = "ff".parse().unwrap();
    /// assert_eq!(blue, Rgb::new(0, 0, 255));
    ///
    /// assert!("#ff 000".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }
        // from_str_radix would accept a leading '+', the descriptor format does not
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        let significant = digits.trim_start_matches('0');
        let out_of_range = || ParseColorError::OutOfRange(digits.to_string());
        if significant.len() > 8 {
            return Err(out_of_range());
        }
        let value = if significant.is_empty() {
            0
        } else {
            u64::from_str_radix(significant, 16).map_err(|_| out_of_range())?
        };
        if value > i32::MAX as u64 {
            return Err(out_of_range());
        }

        Ok(Rgb::from_packed(value as u32))
    }
}

/// A single 32-bit image pixel with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb {
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Argb {
    /// Create a pixel from its alpha, red, green and blue components.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpack a `0xAARRGGBB` value.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Create a pixel from `[R, G, B, A]` bytes, the order PNG uses.
    #[inline]
    pub const fn from_rgba(bytes: [u8; 4]) -> Self {
        Self::new(bytes[3], bytes[0], bytes[1], bytes[2])
    }

    /// Convert to `[R, G, B, A]` bytes.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color part of this pixel, alpha dropped.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Argb::from_u32(value)
    }
}

impl From<Argb> for u32 {
    fn from(pixel: Argb) -> Self {
        pixel.to_u32()
    }
}
