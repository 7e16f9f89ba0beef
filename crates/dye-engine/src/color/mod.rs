//! Color types and channel classification
//!
//! This module provides the two pixel representations used by the engine
//! and the classifier that decides whether a color can be dyed.
//!
//! - [`Rgb`]: an opaque palette anchor, parsed from hex descriptors.
//! - [`Argb`]: a single image pixel, stored packed as `0xAARRGGBB`.
//! - [`Channel`]: which dyeable channel a color belongs to.
//!
//! # Example
//!
//! ```
//! use dye_engine::{Argb, Channel};
//!
//! let pixel = Argb::new(255, 150, 150, 0);
//! assert_eq!(Channel::classify(pixel.rgb()), (Channel::Y, 150));
//! ```

mod channel;
mod pixel;

pub use channel::Channel;
pub use pixel::{Argb, Rgb};
