//! Pixel buffers.
//!
//! [`ArgbImage`] is the fully materialized image every engine operation
//! reads and writes: one packed `0xAARRGGBB` value per pixel in row-major
//! order. Decoding and encoding to file formats happens outside the engine.

mod argb_image;

pub use argb_image::{ArgbImage, ImageError};
