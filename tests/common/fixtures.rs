//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use dye_engine::ArgbImage;
use manadye::models::Compression;
use manadye::rendering::write_png;

/// Pixels of a sprite drawn in channel colors
pub mod pixels {
    use dye_engine::Argb;

    pub const RED_200: Argb = Argb::new(255, 200, 0, 0);
    pub const GREEN_FULL: Argb = Argb::new(255, 0, 255, 0);
    pub const BLUE_200: Argb = Argb::new(255, 0, 0, 200);
    pub const GREY_128: Argb = Argb::new(255, 128, 128, 128);
    pub const SKIN: Argb = Argb::new(255, 220, 180, 150);
    pub const CLEAR: Argb = Argb::new(0, 0, 0, 0);
}

/// Descriptors used across tests
pub mod descriptors {
    pub const RED_GREEN: &str = "R:#ff0000,#880000;G:#00ff00";
    pub const RUBY: &str = "R:#ff0000,#880000";
    pub const NIGHT: &str = "W:#000020,#202060";
}

/// A 3x2 sprite with one pixel of each interesting kind
pub fn sprite() -> ArgbImage {
    let px = [
        pixels::RED_200,
        pixels::GREEN_FULL,
        pixels::BLUE_200,
        pixels::GREY_128,
        pixels::SKIN,
        pixels::CLEAR,
    ];
    ArgbImage::new(3, 2, px.iter().map(|p| p.to_u32()).collect()).unwrap()
}

/// A scratch directory holding PNG inputs and a config file
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_sprite(&self, name: &str, image: &ArgbImage) -> PathBuf {
        let path = self.path(name);
        write_png(&path, image, Compression::Fast).unwrap();
        path
    }

    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path("config.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
