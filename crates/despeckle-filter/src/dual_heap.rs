//! Dual-heap median tracker
//!
//! Maintains the values of the current window split into two halves: a
//! max-heap over the smaller half and a min-heap over the larger half.
//! Removal is lazy: a per-value pending-deletion counter marks the value
//! stale and physical copies are only popped once they surface at a heap
//! head. This keeps insert and remove at O(log k) amortized and the median
//! read at O(1) amortized.
//!
//! Values are interchangeable by intensity only, so the counters are plain
//! 256-entry arrays and no secondary ordering key is needed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{FilterError, FilterResult};
use crate::rank_tree::INTENSITY_BINS;

/// Streaming median over a bounded multiset of 8-bit values.
///
/// Invariants after every public operation:
///
/// - `lower.len() - upper.len()` (live counts) is 0 or 1;
/// - every physical element of `lower` is <= every physical element of
///   `upper`, stale copies included;
/// - both heap heads are live (stale heads pruned).
#[derive(Debug, Clone)]
pub struct DualHeap {
    /// Max-heap over the smaller half.
    lower: BinaryHeap<u8>,
    /// Min-heap over the larger half.
    upper: BinaryHeap<Reverse<u8>>,
    /// Pending lazy deletions per value.
    stale: [u32; INTENSITY_BINS],
    /// Live occurrences per value, used to reject removal of absent values.
    live: [u32; INTENSITY_BINS],
    /// Live elements accounted to `lower`.
    lower_len: usize,
    /// Live elements accounted to `upper`.
    upper_len: usize,
}

impl Default for DualHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl DualHeap {
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
            stale: [0; INTENSITY_BINS],
            live: [0; INTENSITY_BINS],
            lower_len: 0,
            upper_len: 0,
        }
    }

    /// Number of live values in the window.
    pub fn len(&self) -> usize {
        self.lower_len + self.upper_len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live sizes of the (lower, upper) halves.
    pub fn halves(&self) -> (usize, usize) {
        (self.lower_len, self.upper_len)
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
        self.stale.fill(0);
        self.live.fill(0);
        self.lower_len = 0;
        self.upper_len = 0;
    }

    /// Add a value to the window.
    pub fn insert(&mut self, value: u8) {
        self.live[value as usize] += 1;
        match self.lower.peek() {
            Some(&head) if value > head => {
                self.upper.push(Reverse(value));
                self.upper_len += 1;
            }
            _ => {
                self.lower.push(value);
                self.lower_len += 1;
            }
        }
        self.rebalance();
    }

    /// Lazily remove one occurrence of a value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::WindowDrift`] if the value is not live in the
    /// window; this indicates a bookkeeping defect in the caller and is
    /// never recovered silently.
    pub fn remove(&mut self, value: u8) -> FilterResult<()> {
        if self.live[value as usize] == 0 {
            return Err(FilterError::WindowDrift { value });
        }
        self.live[value as usize] -= 1;
        self.stale[value as usize] += 1;
        match self.lower.peek() {
            Some(&head) if value <= head => {
                self.lower_len -= 1;
                if value == head {
                    self.prune_lower();
                }
            }
            _ => {
                self.upper_len -= 1;
                if let Some(&Reverse(head)) = self.upper.peek() {
                    if value == head {
                        self.prune_upper();
                    }
                }
            }
        }
        self.rebalance();
        Ok(())
    }

    /// Current median.
    ///
    /// For an odd number of values this is the exact median; for an even
    /// number it is the lower of the two middle values, so the result stays
    /// an 8-bit integer. (The filters only ever hold odd-sized full windows,
    /// so the even case matters only to direct users of this type.)
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyWindow`] if no values are present.
    pub fn median(&mut self) -> FilterResult<u8> {
        if self.is_empty() {
            return Err(FilterError::EmptyWindow);
        }
        self.prune_lower();
        self.prune_upper();
        self.lower.peek().copied().ok_or(FilterError::EmptyWindow)
    }

    /// Check the half-size balance invariant.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::HeapImbalance`] if the live half sizes differ
    /// by more than one or the upper half outgrew the lower.
    pub fn verify_balance(&self) -> FilterResult<()> {
        if self.lower_len < self.upper_len || self.lower_len > self.upper_len + 1 {
            return Err(FilterError::HeapImbalance {
                lower: self.lower_len,
                upper: self.upper_len,
            });
        }
        Ok(())
    }

    /// Restore `lower_len - upper_len` in {0, 1} by moving at most one
    /// physical head between heaps. Stale copies may migrate; the counters
    /// are per-value, not per-heap, so this is harmless.
    fn rebalance(&mut self) {
        if self.lower_len > self.upper_len + 1 {
            if let Some(value) = self.lower.pop() {
                self.upper.push(Reverse(value));
                self.lower_len -= 1;
                self.upper_len += 1;
                self.prune_lower();
            }
        } else if self.upper_len > self.lower_len {
            if let Some(Reverse(value)) = self.upper.pop() {
                self.lower.push(value);
                self.upper_len -= 1;
                self.lower_len += 1;
                self.prune_upper();
            }
        }
    }

    fn prune_lower(&mut self) {
        while let Some(&head) = self.lower.peek() {
            if self.stale[head as usize] == 0 {
                break;
            }
            self.stale[head as usize] -= 1;
            self.lower.pop();
        }
    }

    fn prune_upper(&mut self) {
        while let Some(&Reverse(head)) = self.upper.peek() {
            if self.stale[head as usize] == 0 {
                break;
            }
            self.stale[head as usize] -= 1;
            self.upper.pop();
        }
    }
}
