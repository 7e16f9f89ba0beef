//! Lazy recoloring for displayed images.
//!
//! [`RecolorCache`] pairs a source image with the dye currently applied to
//! it and only recomputes the dyed output when the dye actually changes.

mod recolor_cache;

pub use recolor_cache::RecolorCache;
