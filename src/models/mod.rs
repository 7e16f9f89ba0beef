pub mod config;
pub mod dye_view;

pub use config::{AppConfig, Compression};
pub use dye_view::PaletteMapView;
