//! Frequency range tree over the intensity histogram
//!
//! A Fenwick (binary indexed) tree over a fixed bin domain, default 256 for
//! 8-bit grayscale. Point updates and prefix/range counts are O(log V);
//! the k-th order statistic is answered in O(log V) by descending the
//! implicit tree with power-of-two jumps.
//!
//! The tree serves two roles: it answers histogram range queries over the
//! current window, and its rank query is the independent median source the
//! sliding engine cross-checks the dual heap against.

use crate::error::{FilterError, FilterResult};
use despeckle_core::Error as CoreError;

/// Number of intensity bins for 8-bit samples.
pub const INTENSITY_BINS: usize = 256;

/// Fenwick tree of per-value occurrence counts.
#[derive(Debug, Clone)]
pub struct FrequencyTree {
    /// 1-based Fenwick array; `tree[i]` aggregates a power-of-two span.
    tree: Vec<i64>,
    bins: usize,
    /// Largest power of two <= `bins`, the starting jump of rank descent.
    top_bit: usize,
    total: i64,
}

impl Default for FrequencyTree {
    fn default() -> Self {
        Self::with_bins(INTENSITY_BINS)
    }
}

impl FrequencyTree {
    /// Tree over the full 8-bit domain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree over a custom bin count (values are bin indices `0..bins`).
    ///
    /// # Panics
    ///
    /// Panics if `bins` is zero or exceeds [`INTENSITY_BINS`].
    pub fn with_bins(bins: usize) -> Self {
        assert!(bins > 0, "bin domain must be non-empty");
        assert!(bins <= INTENSITY_BINS, "bin domain exceeds the 8-bit range");
        let mut top_bit = 1;
        while top_bit * 2 <= bins {
            top_bit *= 2;
        }
        Self {
            tree: vec![0; bins + 1],
            bins,
            top_bit,
            total: 0,
        }
    }

    /// Number of bins in the domain.
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Total count across all bins.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Reset all counters.
    pub fn clear(&mut self) {
        self.tree.fill(0);
        self.total = 0;
    }

    /// Add `delta` (+1/-1 in normal use) to the counter for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::WindowDrift`] if a decrement would take the
    /// bin count negative (the value was not present), and an error if
    /// `value` is outside the bin domain.
    pub fn add(&mut self, value: usize, delta: i64) -> FilterResult<()> {
        if value >= self.bins {
            return Err(FilterError::Core(CoreError::IndexOutOfBounds {
                index: value,
                len: self.bins,
            }));
        }
        if delta < 0 && self.count(value) + delta < 0 {
            return Err(FilterError::WindowDrift { value: value as u8 });
        }
        let mut idx = value + 1;
        while idx <= self.bins {
            self.tree[idx] += delta;
            idx += idx & idx.wrapping_neg();
        }
        self.total += delta;
        Ok(())
    }

    /// Count of samples with value <= `value`.
    pub fn prefix(&self, value: usize) -> i64 {
        let mut idx = value.min(self.bins - 1) + 1;
        let mut sum = 0;
        while idx > 0 {
            sum += self.tree[idx];
            idx -= idx & idx.wrapping_neg();
        }
        sum
    }

    /// Count of one bin.
    pub fn count(&self, value: usize) -> i64 {
        let low = self.prefix(value);
        if value == 0 {
            low
        } else {
            low - self.prefix(value - 1)
        }
    }

    /// Count of samples with value in `[lo, hi]` (inclusive, clamped to the
    /// domain). Empty if `hi < lo`.
    pub fn range_count(&self, lo: usize, hi: usize) -> i64 {
        if hi < lo || lo >= self.bins {
            return 0;
        }
        let high = self.prefix(hi);
        if lo == 0 {
            high
        } else {
            high - self.prefix(lo - 1)
        }
    }

    /// Smallest value whose cumulative count reaches `k` (the k-th order
    /// statistic, 1-based), or `None` if `k` is outside `1..=total`.
    pub fn rank(&self, k: i64) -> Option<u8> {
        if k < 1 || k > self.total {
            return None;
        }
        let mut pos = 0usize;
        let mut remaining = k;
        let mut bit = self.top_bit;
        while bit > 0 {
            let next = pos + bit;
            if next <= self.bins && self.tree[next] < remaining {
                remaining -= self.tree[next];
                pos = next;
            }
            bit >>= 1;
        }
        // `pos` is the count of bins whose cumulative sum stays below k,
        // which is exactly the 0-based value we want.
        Some(pos as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_range_sums() {
        let mut tree = FrequencyTree::with_bins(10);
        for idx in 0..5 {
            tree.add(idx, idx as i64 + 1).unwrap();
        }
        assert_eq!(tree.prefix(4), 15);
        assert_eq!(tree.range_count(2, 4), 12);
        assert_eq!(tree.range_count(4, 2), 0);
        assert_eq!(tree.total(), 15);
    }

    #[test]
    fn test_rank_query() {
        let mut tree = FrequencyTree::new();
        for value in [10usize, 10, 200, 30, 30, 30] {
            tree.add(value, 1).unwrap();
        }
        assert_eq!(tree.rank(1), Some(10));
        assert_eq!(tree.rank(2), Some(10));
        assert_eq!(tree.rank(3), Some(30));
        assert_eq!(tree.rank(5), Some(30));
        assert_eq!(tree.rank(6), Some(200));
        assert_eq!(tree.rank(0), None);
        assert_eq!(tree.rank(7), None);
    }

    #[test]
    fn test_rank_matches_sorted_order() {
        let values = [3usize, 250, 0, 0, 128, 3, 77, 255, 12, 12, 12];
        let mut tree = FrequencyTree::new();
        for &v in &values {
            tree.add(v, 1).unwrap();
        }
        let mut sorted: Vec<usize> = values.to_vec();
        sorted.sort_unstable();
        for (i, &v) in sorted.iter().enumerate() {
            assert_eq!(tree.rank(i as i64 + 1), Some(v as u8));
        }
    }

    #[test]
    fn test_decrement_below_zero_is_drift() {
        let mut tree = FrequencyTree::new();
        tree.add(42, 1).unwrap();
        tree.add(42, -1).unwrap();
        assert!(matches!(
            tree.add(42, -1),
            Err(FilterError::WindowDrift { value: 42 })
        ));
    }

    #[test]
    fn test_out_of_domain_value() {
        let mut tree = FrequencyTree::with_bins(16);
        assert!(tree.add(16, 1).is_err());
        assert!(tree.add(15, 1).is_ok());
    }

    #[test]
    fn test_clear() {
        let mut tree = FrequencyTree::new();
        tree.add(5, 3).unwrap();
        tree.clear();
        assert_eq!(tree.total(), 0);
        assert_eq!(tree.prefix(255), 0);
        assert_eq!(tree.rank(1), None);
    }

    #[test]
    fn test_non_power_of_two_domain() {
        let mut tree = FrequencyTree::with_bins(100);
        for v in [0usize, 50, 99, 99] {
            tree.add(v, 1).unwrap();
        }
        assert_eq!(tree.rank(1), Some(0));
        assert_eq!(tree.rank(2), Some(50));
        assert_eq!(tree.rank(3), Some(99));
        assert_eq!(tree.rank(4), Some(99));
        assert_eq!(tree.prefix(99), 4);
    }
}
