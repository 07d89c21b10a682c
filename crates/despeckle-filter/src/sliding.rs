//! Optimized sliding-window median engine
//!
//! Traverses the image in raster order keeping the current window's values
//! in a [`DualHeap`] and a [`FrequencyTree`] simultaneously. Each horizontal
//! slide removes the leaving column and inserts the entering one through the
//! [`ColumnCache`]; each new row reseeds the window from scratch (full
//! row-band recomputation). Per-pixel cost is O(k log k) for the column
//! updates instead of the O(k^2 log k^2) full sort of the baseline.
//!
//! The heap and the tree are updated in lockstep and the emitted median is
//! cross-checked against the tree's rank query on every window, so drift
//! between the two structures surfaces as a hard error at the first
//! affected pixel.

use crate::column_cache::ColumnCache;
use crate::dual_heap::DualHeap;
use crate::error::{FilterError, FilterResult};
use crate::rank_tree::FrequencyTree;
use despeckle_core::{BorderPolicy, GrayImage};

/// Largest accepted kernel size.
///
/// A 255x255 window already covers the full intensity histogram many times
/// over; anything bigger is a configuration mistake.
pub const MAX_KERNEL: u32 = 255;

/// Validate a kernel size for the engines: odd, non-zero, bounded.
pub(crate) fn check_kernel(kernel: u32) -> FilterResult<()> {
    if kernel == 0 {
        return Err(FilterError::InvalidKernel(
            "kernel size must be positive".into(),
        ));
    }
    if kernel % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel size must be odd, got {kernel}"
        )));
    }
    if kernel > MAX_KERNEL {
        return Err(FilterError::InvalidKernel(format!(
            "kernel size {kernel} exceeds maximum {MAX_KERNEL}"
        )));
    }
    Ok(())
}

/// Median tracker and frequency tree kept in lockstep over one window.
#[derive(Debug, Default)]
struct WindowState {
    heap: DualHeap,
    tree: FrequencyTree,
}

impl WindowState {
    fn new() -> Self {
        Self {
            heap: DualHeap::new(),
            tree: FrequencyTree::new(),
        }
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.tree.clear();
    }

    fn insert(&mut self, value: u8) -> FilterResult<()> {
        self.heap.insert(value);
        self.tree.add(value as usize, 1)
    }

    fn remove(&mut self, value: u8) -> FilterResult<()> {
        self.heap.remove(value)?;
        self.tree.add(value as usize, -1)
    }

    /// Median of the current window, verified against the rank query.
    ///
    /// # Errors
    ///
    /// [`FilterError::HeapImbalance`] or [`FilterError::MedianMismatch`] if
    /// the tracker and tree disagree; both indicate a logic defect, not a
    /// recoverable condition.
    fn median(&mut self) -> FilterResult<u8> {
        self.heap.verify_balance()?;
        let heap_median = self.heap.median()?;
        let k = (self.heap.len() as i64 + 1) / 2;
        let rank_median = self.tree.rank(k).ok_or(FilterError::EmptyWindow)?;
        if heap_median != rank_median {
            return Err(FilterError::MedianMismatch {
                heap: heap_median,
                rank: rank_median,
            });
        }
        Ok(heap_median)
    }
}

/// Apply the optimized sliding-window median filter.
///
/// `kernel` must be odd (use [`crate::median_filter`] for the boundary entry
/// point that promotes even sizes). Border samples are produced according to
/// `policy`. The output has the same extent as the input and the call is a
/// pure function: all traversal state is constructed inside and discarded on
/// return.
///
/// # Errors
///
/// - [`FilterError::InvalidKernel`] for zero, even, or oversized kernels;
/// - internal-consistency errors if the tracker and tree ever disagree.
pub fn sliding_median(
    image: &GrayImage,
    kernel: u32,
    policy: BorderPolicy,
) -> FilterResult<GrayImage> {
    check_kernel(kernel)?;
    if kernel == 1 {
        // 1x1 window: the median of a single pixel is the pixel.
        return Ok(image.clone());
    }

    let radius = kernel / 2;
    let padded = image.extend_border(radius, policy)?;
    let width = image.width();
    let height = image.height();
    let mut output = GrayImage::new(width, height)?;

    let mut state = WindowState::new();
    let mut cache = ColumnCache::new(&padded, kernel, 0);

    for row in 0..height {
        state.clear();
        cache.advance(row);

        // Seed the leftmost window of this row band.
        for col in 0..kernel {
            for idx in 0..kernel {
                let value = cache.column(col)[idx as usize];
                state.insert(value)?;
            }
        }

        for col in 0..width {
            output.set_pixel_unchecked(col, row, state.median()?);
            if col + 1 == width {
                continue;
            }
            // Slide right: drop the leaving column, take in the entering one.
            for idx in 0..kernel {
                let value = cache.column(col)[idx as usize];
                state.remove(value)?;
            }
            for idx in 0..kernel {
                let value = cache.column(col + kernel)[idx as usize];
                state.insert(value)?;
            }
        }
    }

    Ok(output)
}
