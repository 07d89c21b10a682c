//! Error types for despeckle-filter
//!
//! Configuration problems (bad kernel sizes) are reported before any pixel
//! is processed. Internal-consistency faults (window bookkeeping drift,
//! heap imbalance, median disagreement) indicate a logic defect and are
//! surfaced as hard errors rather than recovered silently.

use thiserror::Error;

/// Errors that can occur during median filtering
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),

    /// Invalid kernel configuration
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Median requested from an empty window
    #[error("median requested from an empty window")]
    EmptyWindow,

    /// A value was removed that is not present in the current window
    #[error("window bookkeeping drift: value {value} removed but not present")]
    WindowDrift { value: u8 },

    /// Heap halves diverged beyond the allowed size difference
    #[error("heap balance violated: lower={lower}, upper={upper}")]
    HeapImbalance { lower: usize, upper: usize },

    /// The heap median and the rank-query median disagree
    #[error("median disagreement: heap reported {heap}, rank query reported {rank}")]
    MedianMismatch { heap: u8, rank: u8 },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
