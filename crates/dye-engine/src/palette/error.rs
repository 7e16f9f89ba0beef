//! Error types for color tokens.

use thiserror::Error;

/// Error type for parsing a single hex color token.
///
/// Inside a color list these errors never reach the caller: the offending
/// token is dropped and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing after the optional `#`
    #[error("empty color token")]
    Empty,

    /// A character that is not a hexadecimal digit
    #[error("invalid hex character {0:?}")]
    InvalidDigit(char),

    /// The digits do not fit a signed 32-bit value
    #[error("hex value out of range: {0}")]
    OutOfRange(String),
}
