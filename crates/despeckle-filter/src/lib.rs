//! despeckle-filter - Sliding-window median filtering
//!
//! This crate removes impulse ("salt-and-pepper") noise from 8-bit
//! grayscale images by replacing each pixel with the median of its square
//! neighborhood. Two backends share one pure contract:
//!
//! - [`sliding_median`] - the optimized engine: a dual-heap median tracker
//!   ([`DualHeap`]) and a Fenwick frequency tree ([`FrequencyTree`]) updated
//!   incrementally as the window slides, with per-column reuse through
//!   [`ColumnCache`]
//! - [`brute_force_median`] - the full-sort-per-window baseline
//!
//! [`median_filter`] / [`median_filter_with`] are the boundary entry points
//! that apply the even-to-odd kernel promotion rule and the automatic
//! backend choice ([`Backend`]).
//!
//! A filter call owns all of its traversal state; nothing is shared across
//! calls, so concurrent filtering of independent images needs no locking.

pub mod brute;
pub mod column_cache;
pub mod dual_heap;
mod error;
pub mod rank_tree;
pub mod sliding;
pub mod strategy;

pub use error::{FilterError, FilterResult};

// Re-export commonly used items
pub use brute::brute_force_median;
pub use column_cache::ColumnCache;
pub use dual_heap::DualHeap;
pub use rank_tree::{FrequencyTree, INTENSITY_BINS};
pub use sliding::{MAX_KERNEL, sliding_median};
pub use strategy::{
    AUTO_BACKEND_THRESHOLD, Backend, median_filter, median_filter_with, normalize_kernel,
    select_backend,
};
