//! Unified error type for the dye-engine public API.
//!
//! [`DyeError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::dye::DescriptorError;
use crate::image::ImageError;
use crate::palette::ParseColorError;

/// Unified error type for the dye-engine public API.
///
/// # Example
///
/// ```
/// use dye_engine::{Dye, DyeError, Rgb};
///
/// fn tint(desc: &str, color: &str) -> Result<(Dye, Rgb), DyeError> {
///     Ok((desc.parse()?, color.parse()?))
/// }
///
/// assert!(tint("R:#ff0000", "#00ff00").is_ok());
/// assert!(matches!(tint("#ff0000", "#00ff00"), Err(DyeError::Descriptor(_))));
/// assert!(matches!(tint("", "#xyz"), Err(DyeError::ParseColor(_))));
/// ```
#[derive(Debug, Error)]
pub enum DyeError {
    /// Structural error in a dye descriptor
    #[error("descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    /// A single color that could not be decoded
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    /// Pixel buffer construction or transform error
    #[error("image error: {0}")]
    Image(#[from] ImageError),
}
