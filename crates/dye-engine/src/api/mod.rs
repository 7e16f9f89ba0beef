//! Public API glue for the dye-engine crate.
//!
//! This module provides [`DyeError`], the unified error type.

mod error;

pub use error::DyeError;
