//! Custom assertions for integration tests.

use std::path::Path;

use dye_engine::{Argb, ArgbImage};
use manadye::rendering::read_png;

/// Assert that a file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "{} is not a PNG",
        path.display()
    );
}

/// Compare one pixel with a readable failure message
pub fn assert_pixel(image: &ArgbImage, x: usize, y: usize, expected: Argb) {
    let actual = image.pixel(x, y);
    assert_eq!(
        actual, expected,
        "pixel ({x}, {y}): expected {expected:?}, got {actual:?}"
    );
}

/// Decode a PNG file written by a test
pub fn load(path: &Path) -> ArgbImage {
    read_png(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
