//! Dyes and the descriptor grammars that build them.
//!
//! - [`Dye`]: an immutable channel-to-palette map applied to pixels.
//! - [`parse_palettes`] / [`parse_palettes_into`]: the `;`-separated
//!   channel-map grammar.
//! - [`resolve_dyes`]: the combined `name|channels` form, where the image
//!   name declares which channels it needs and the palettes arrive in a
//!   separate string.

mod descriptor;
mod dye;
mod error;
mod resolve;

pub use descriptor::{parse_palettes, parse_palettes_into, PaletteMap};
pub use dye::Dye;
pub use error::DescriptorError;
pub use resolve::{resolve_dyes, ResolvedDye};
