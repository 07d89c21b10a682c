//! Error types for despeckle-core
//!
//! Provides a unified error type for image construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// despeckle-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Image exceeds the configured pixel budget
    #[error("image too large: {pixels} pixels exceeds limit {limit}")]
    TooLarge { pixels: u64, limit: u64 },

    /// Raw buffer length does not match width * height
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image dimension mismatch between two operands
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for despeckle-core operations
pub type Result<T> = std::result::Result<T, Error>;
