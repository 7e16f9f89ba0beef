//! Palette struct with gradient resolution.
//!
//! A palette is an ordered list of anchor colors. Intensity 0 is always
//! black; the anchors are spread evenly over intensities 1..=255 and the
//! values in between are linearly interpolated in integer RGB.

use std::cmp::Ordering;
use std::fmt;

use crate::color::{Argb, Rgb};

/// An ordered, immutable list of gradient anchors.
///
/// An empty palette is a legal value meaning "no mapping": resolving any
/// non-zero intensity against it yields `None` and the caller keeps the
/// original pixel.
///
/// # Example
///
/// ```
/// use dye_engine::{Argb, Palette, Rgb};
///
/// let palette = Palette::parse("#ff0000,#ffff00");
/// assert_eq!(palette.len(), 2);
///
/// // Intensity 0 is opaque black, 255 is the last anchor
/// assert_eq!(palette.resolve(0, 255), Some(Argb::new(255, 0, 0, 0)));
/// assert_eq!(palette.resolve(255, 128), Some(Argb::new(128, 255, 255, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from its anchor colors.
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Parse the color-list grammar: `COLOR(,COLOR)*`.
    ///
    /// Each token may start with `#`; one is implied when missing. Tokens
    /// that fail to decode are dropped without affecting the rest, and an
    /// empty string gives an empty palette. The `FromStr` impl of [`Rgb`]
    /// documents the accepted hex forms.
    ///
    /// ```
    /// use dye_engine::{Palette, Rgb};
    ///
    /// let palette = Palette::parse("#ff0000,nothex,00ff00");
    /// assert_eq!(palette.colors(), &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]);
    /// ```
    pub fn parse(data: &str) -> Self {
        if data.is_empty() {
            return Self::default();
        }

        let colors = split_fields(data, ',')
            .into_iter()
            .filter(|token| !token.is_empty())
            .filter_map(|token| match token.parse::<Rgb>() {
                Ok(color) => Some(color),
                Err(e) => {
                    tracing::trace!(token, %e, "Dropping malformed color token");
                    None
                }
            })
            .collect();

        Self { colors }
    }

    /// Returns the number of anchors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no anchors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The anchor colors in gradient order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Resolve an intensity to a color with the given alpha.
    ///
    /// With `N` anchors, intensity `i` lands at `j = i * N` on a scale where
    /// every 255 steps is one anchor. An exact multiple returns that anchor
    /// verbatim; anything else blends the previous anchor (black before the
    /// first) toward the next one with weight `(j % 255) / 255`, rounding
    /// toward zero.
    ///
    /// Returns `None` for a non-zero intensity on an empty palette.
    pub fn resolve(&self, intensity: u8, alpha: u8) -> Option<Argb> {
        if intensity == 0 {
            return Some(Rgb::BLACK.with_alpha(alpha));
        }
        if self.colors.is_empty() {
            return None;
        }

        let j = intensity as u32 * self.colors.len() as u32;
        let i = (j / 255) as usize;
        let t = j % 255;

        if t == 0 {
            // intensity > 0 implies i >= 1
            return Some(self.colors[i - 1].with_alpha(alpha));
        }

        let from = if i > 0 { self.colors[i - 1] } else { Rgb::BLACK };
        let to = self.colors[i];
        let lerp = |c1: u8, c2: u8| (((255 - t) * c1 as u32 + t * c2 as u32) / 255) as u8;

        Some(Argb::new(
            alpha,
            lerp(from.r, to.r),
            lerp(from.g, to.g),
            lerp(from.b, to.b),
        ))
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(colors: Vec<Rgb>) -> Self {
        Palette::new(colors)
    }
}

impl fmt::Display for Palette {
    /// Formats back into the color-list grammar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl PartialOrd for Palette {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Palette {
    /// Compare anchor by anchor on the packed RGB value. When one side runs
    /// out first, the side with anchors left over is the greater one.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.colors.iter().zip(&other.colors) {
            match a.packed().cmp(&b.packed()) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.colors.len().cmp(&other.colors.len())
    }
}

/// Split a descriptor on `sep`, dropping trailing empty fields.
///
/// Empty fields in the middle are kept so callers can decide what they
/// mean. An empty input is a single empty field.
pub(crate) fn split_fields(data: &str, sep: char) -> Vec<&str> {
    let mut fields: Vec<&str> = data.split(sep).collect();
    if data.is_empty() {
        return fields;
    }
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}
