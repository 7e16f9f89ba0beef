//! Error type for dye descriptors.

use thiserror::Error;

/// Error type for the channel-map grammar.
///
/// Malformed color tokens are not errors (they are dropped); only
/// structural problems abort a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// A segment without a channel letter, but no implicit channel left
    /// to assign it to
    #[error("bad palette data: {data}")]
    QueueUnderflow {
        /// The full descriptor being parsed
        data: String,
    },
}
