//! despeckle-core - Image container and border handling
//!
//! This crate provides the data structures shared by the despeckle
//! workspace:
//!
//! - [`GrayImage`] - Owned 8-bit grayscale raster
//! - [`BorderPolicy`] - Edge handling for windowed operations
//! - [`Error`] / [`Result`] - Unified error type
//!
//! Pixels are `u8`, so the [0, 255] intensity domain is a property of the
//! types rather than a runtime check.

pub mod border;
pub mod error;
pub mod gray;

pub use border::BorderPolicy;
pub use error::{Error, Result};
pub use gray::{GrayImage, MAX_PIXELS};
