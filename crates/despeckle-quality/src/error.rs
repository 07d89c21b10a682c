//! Error types for despeckle-quality

use thiserror::Error;

/// Errors that can occur in noise injection or metric computation
#[derive(Debug, Error)]
pub enum QualityError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),

    /// A fraction parameter fell outside [0, 1]
    #[error("{name} must lie in [0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },
}

/// Result type for quality operations
pub type QualityResult<T> = Result<T, QualityError>;
