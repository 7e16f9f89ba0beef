//! ArgbImage struct and pixel-level transforms.

use thiserror::Error;

use crate::color::Argb;

/// Errors from constructing or transforming an [`ArgbImage`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Pixel count does not match `width * height`
    #[error("pixel buffer has {actual} pixels, expected {width}x{height}")]
    DimensionMismatch {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Number of pixels supplied
        actual: usize,
    },

    /// Scale factor of zero
    #[error("scale factor must be at least 1")]
    InvalidScale,

    /// Scaled dimensions do not fit in memory
    #[error("{width}x{height} scaled by {factor} is too large")]
    TooLarge {
        /// Source width
        width: usize,
        /// Source height
        height: usize,
        /// Requested scale factor
        factor: usize,
    },
}

/// A 32-bit ARGB image held entirely in memory.
///
/// Cloning produces an independent buffer, never a shared view.
///
/// # Example
///
/// ```
/// use dye_engine::{Argb, ArgbImage};
///
/// let image = ArgbImage::filled(2, 2, Argb::new(255, 200, 0, 0));
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.pixel(1, 1), Argb::new(255, 200, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgbImage {
    /// Packed pixels, row-major.
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl ArgbImage {
    /// Wrap packed `0xAARRGGBB` pixels.
    ///
    /// # Errors
    ///
    /// [`ImageError::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self, ImageError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(ImageError::DimensionMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// An image where every pixel has the same value.
    pub fn filled(width: usize, height: usize, pixel: Argb) -> Self {
        Self {
            pixels: vec![pixel.to_u32(); width * height],
            width,
            height,
        }
    }

    /// Build an image from `[R, G, B, A]` byte quadruples.
    ///
    /// # Errors
    ///
    /// [`ImageError::DimensionMismatch`] if the byte count is not
    /// `width * height * 4`.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ImageError> {
        let expected = width.checked_mul(height).and_then(|n| n.checked_mul(4));
        if expected != Some(bytes.len()) {
            return Err(ImageError::DimensionMismatch {
                width,
                height,
                actual: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Argb::from_rgba([px[0], px[1], px[2], px[3]]).to_u32())
            .collect();
        Self::new(width, height, pixels)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The packed pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Argb {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        Argb::from_u32(self.pixels[y * self.width + x])
    }

    /// Convert to `[R, G, B, A, ...]` bytes, the layout PNG expects.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for &px in &self.pixels {
            rgba.extend_from_slice(&Argb::from_u32(px).to_rgba());
        }
        rgba
    }

    /// Apply `f` to every pixel independently, producing a new image of the
    /// same size.
    ///
    /// With the `parallel` feature the pixels are processed on the rayon
    /// pool; the result is identical either way.
    pub fn map_pixels<F>(&self, f: F) -> ArgbImage
    where
        F: Fn(Argb) -> Argb + Sync,
    {
        #[cfg(feature = "parallel")]
        let pixels = {
            use rayon::prelude::*;
            self.pixels
                .par_iter()
                .map(|&px| f(Argb::from_u32(px)).to_u32())
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let pixels = self
            .pixels
            .iter()
            .map(|&px| f(Argb::from_u32(px)).to_u32())
            .collect();

        ArgbImage {
            pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Enlarge by an integer factor, repeating each pixel in a
    /// `factor x factor` block. Useful for previewing small sprites.
    ///
    /// # Errors
    ///
    /// [`ImageError::InvalidScale`] if `factor` is zero,
    /// [`ImageError::TooLarge`] if the scaled buffer could not be allocated.
    pub fn scale_nearest(&self, factor: usize) -> Result<ArgbImage, ImageError> {
        if factor == 0 {
            return Err(ImageError::InvalidScale);
        }
        if factor == 1 {
            return Ok(self.clone());
        }

        let too_large = || ImageError::TooLarge {
            width: self.width,
            height: self.height,
            factor,
        };
        let width = self.width.checked_mul(factor).ok_or_else(too_large)?;
        let height = self.height.checked_mul(factor).ok_or_else(too_large)?;
        // A Vec may not exceed isize::MAX bytes
        let len = width
            .checked_mul(height)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<u32>())
            .ok_or_else(too_large)?;
        let mut pixels = Vec::with_capacity(len);
        for row in self.pixels.chunks(self.width.max(1)).take(self.height) {
            let scaled_row: Vec<u32> = row
                .iter()
                .flat_map(|&px| std::iter::repeat(px).take(factor))
                .collect();
            for _ in 0..factor {
                pixels.extend_from_slice(&scaled_row);
            }
        }

        Ok(ArgbImage {
            pixels,
            width,
            height,
        })
    }
}
