//! Dye struct: per-pixel and whole-image recoloring.

use std::str::FromStr;

use super::descriptor::{parse_palettes, PaletteMap};
use super::error::DescriptorError;
use crate::color::{Argb, Channel};
use crate::image::ArgbImage;
use crate::palette::Palette;

/// An immutable mapping from [`Channel`] to [`Palette`].
///
/// A dye is built once, from a descriptor or a ready map, and never changes
/// afterwards. Equality is structural: two dyes are equal when every
/// channel is either absent from both or mapped to equal palettes.
///
/// # Example
///
/// ```
/// use dye_engine::{Argb, Dye};
///
/// let dye: Dye = "R:#ff0000,#880000;G:#00ff00".parse().unwrap();
///
/// // Pure red at intensity 200 blends the two red anchors
/// assert_eq!(dye.update(Argb::new(255, 200, 0, 0)), Argb::new(255, 187, 0, 0));
///
/// // Blue has no palette and passes through
/// let blue = Argb::new(255, 0, 0, 200);
/// assert_eq!(dye.update(blue), blue);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dye {
    palettes: PaletteMap,
}

impl Dye {
    /// Build a dye from a ready channel map.
    pub fn new(palettes: PaletteMap) -> Self {
        Self { palettes }
    }

    /// Parse a channel-map descriptor such as `"R:#ff0000;W:#ffffff"`.
    ///
    /// # Errors
    ///
    /// [`DescriptorError::QueueUnderflow`] if a segment has no channel
    /// letter.
    pub fn parse(desc: &str) -> Result<Self, DescriptorError> {
        parse_palettes(desc).map(Self::new)
    }

    /// The palette assigned to `channel`, if any.
    #[inline]
    pub fn palette(&self, channel: Channel) -> Option<&Palette> {
        self.palettes.get(&channel)
    }

    /// All assigned palettes in channel order.
    #[inline]
    pub fn palettes(&self) -> &PaletteMap {
        &self.palettes
    }

    /// Returns true if no channel has a palette. Such a dye leaves every
    /// pixel unchanged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Dye a single pixel.
    ///
    /// The pixel is classified; if its channel has a palette the intensity
    /// is resolved against it, keeping the original alpha. Pixels whose
    /// channel is unmapped, or mapped to an empty palette, come back
    /// unchanged.
    #[inline]
    pub fn update(&self, pixel: Argb) -> Argb {
        let (channel, intensity) = Channel::classify(pixel.rgb());
        self.palettes
            .get(&channel)
            .and_then(|palette| palette.resolve(intensity, pixel.a))
            .unwrap_or(pixel)
    }

    /// Dye every pixel of `image` into a new image of the same size.
    ///
    /// The source is never modified and the result never shares its buffer.
    pub fn recolor(&self, image: &ArgbImage) -> ArgbImage {
        image.map_pixels(|px| self.update(px))
    }
}

impl FromStr for Dye {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dye::parse(s)
    }
}

impl From<PaletteMap> for Dye {
    fn from(palettes: PaletteMap) -> Self {
        Dye::new(palettes)
    }
}
