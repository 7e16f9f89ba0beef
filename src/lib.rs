//! ManaDye - palette recoloring for channel-coded sprites
//!
//! File-level tooling around the `dye_engine` crate: PNG decoding and
//! encoding, YAML presets, and the apply pipeline used by the `manadye`
//! binary. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
