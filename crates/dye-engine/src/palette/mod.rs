//! Gradient palettes
//!
//! This module provides the [`Palette`] type and the color-list grammar
//! it is parsed from, plus the error type for individual color tokens.

mod error;
mod palette;

pub use error::ParseColorError;
pub use palette::Palette;

pub(crate) use palette::split_fields;
