//! dye-engine: recolor sprite templates from compact dye descriptors
//!
//! A template sprite is drawn in "dyeable" colors: pure primaries,
//! secondaries and greys. A dye maps each of those channels to a gradient
//! palette, so one sprite can be rendered in any number of color variants.
//!
//! # Quick Start
//!
//! ```
//! use dye_engine::{Argb, ArgbImage, Dye};
//!
//! let dye: Dye = "R:#ff0000,#880000;W:#202040,#e0e0ff".parse().unwrap();
//!
//! let sprite = ArgbImage::filled(2, 2, Argb::new(255, 255, 0, 0));
//! let dyed = dye.recolor(&sprite);
//!
//! assert_eq!(dyed.pixel(0, 0), Argb::new(255, 136, 0, 0));
//! ```
//!
//! # Channels
//!
//! [`Channel::classify`] sorts every color into one of eight tags. A color
//! whose non-zero components are all equal is *pure*: it belongs to the
//! channel named by which components are non-zero (R, G, B, Y = R+G,
//! M = R+B, C = G+B, W = R+G+B) and its intensity is that shared value.
//! Black and every other mix classify as [`Channel::None`].
//!
//! | Input          | Channel | Intensity |
//! |----------------|---------|-----------|
//! | `(200, 0, 0)`  | R       | 200       |
//! | `(150,150, 0)` | Y       | 150       |
//! | `(90, 90, 90)` | W       | 90        |
//! | `(10, 20, 0)`  | None    | 20        |
//! | `(0, 0, 0)`    | None    | 0         |
//!
//! # Palettes
//!
//! A [`Palette`] of `N` anchors maps intensity 0 to black and places the
//! anchors at intensities `255/N, 2*255/N, ..., 255`. Intensities between
//! two stops are blended linearly in integer RGB, so each anchor is hit
//! exactly and the gradient never overshoots.
//!
//! # Descriptors
//!
//! ```text
//! color list    #RRGGBB(,#RRGGBB)*            the '#' is optional
//! channel map   [X:]COLORLIST(;[X:]COLORLIST)*   X in R G Y B M C W
//! combined      NAME[|CHANNELSPEC]               see resolve_dyes
//! ```
//!
//! Malformed colors are skipped silently. A channel-map segment without a
//! letter takes its channel from an implicit queue, and fails the whole
//! parse when the queue is empty.
//!
//! # Caching
//!
//! [`RecolorCache`] holds a source image and the installed dye, and only
//! recomputes the dyed copy when a structurally different dye is set.

pub mod api;
pub mod cache;
pub mod color;
pub mod dye;
pub mod image;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use api::DyeError;
pub use cache::RecolorCache;
pub use color::{Argb, Channel, Rgb};
pub use dye::{
    parse_palettes, parse_palettes_into, resolve_dyes, DescriptorError, Dye, PaletteMap,
    ResolvedDye,
};
pub use image::{ArgbImage, ImageError};
pub use palette::{Palette, ParseColorError};
