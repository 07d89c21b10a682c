//! Backend selection and the boundary-facing filter entry points
//!
//! The two engines share one pure contract, `(image, kernel, policy) ->
//! image`, and produce identical output; selecting between them is a caller
//! policy, not engine polymorphism. `Auto` picks by pixel count: small
//! images go to the sorting baseline (sorting a few dozen bytes per window
//! is cache-friendly and has no setup cost), larger images go to the
//! sliding engine whose per-pixel cost stays logarithmic in the kernel.
//!
//! The entry points here also apply the external interface's kernel rule:
//! an even size is promoted to the next odd value, a zero size is rejected.

use crate::brute::brute_force_median;
use crate::error::{FilterError, FilterResult};
use crate::sliding::sliding_median;
use despeckle_core::{BorderPolicy, GrayImage};

/// Pixel-count threshold used by [`Backend::Auto`].
///
/// Images with at most this many pixels use the sorting backend, larger
/// ones the sliding engine.
pub const AUTO_BACKEND_THRESHOLD: usize = 320 * 320;

/// Which median implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Choose by image size against [`AUTO_BACKEND_THRESHOLD`].
    #[default]
    Auto,
    /// Force the dual-heap sliding engine.
    Heap,
    /// Force the full-sort-per-window baseline.
    Sort,
}

/// Resolve `Auto` against a pixel count and threshold.
pub fn select_backend(backend: Backend, pixel_count: usize, threshold: usize) -> Backend {
    match backend {
        Backend::Auto => {
            if pixel_count <= threshold {
                Backend::Sort
            } else {
                Backend::Heap
            }
        }
        other => other,
    }
}

/// Promote an even kernel size to the next odd value.
///
/// This is the documented external-interface rule; the engines themselves
/// only accept odd sizes.
pub fn normalize_kernel(kernel: u32) -> FilterResult<u32> {
    if kernel == 0 {
        return Err(FilterError::InvalidKernel(
            "kernel size must be positive".into(),
        ));
    }
    Ok(if kernel % 2 == 0 { kernel + 1 } else { kernel })
}

/// Median-filter an image with automatic backend selection.
///
/// Even kernel sizes are promoted to the next odd value.
pub fn median_filter(
    image: &GrayImage,
    kernel: u32,
    policy: BorderPolicy,
) -> FilterResult<GrayImage> {
    median_filter_with(image, kernel, policy, Backend::Auto)
}

/// Median-filter an image with an explicit backend choice.
pub fn median_filter_with(
    image: &GrayImage,
    kernel: u32,
    policy: BorderPolicy,
    backend: Backend,
) -> FilterResult<GrayImage> {
    let kernel = normalize_kernel(kernel)?;
    match select_backend(backend, image.pixel_count(), AUTO_BACKEND_THRESHOLD) {
        Backend::Heap => sliding_median(image, kernel, policy),
        Backend::Sort => brute_force_median(image, kernel, policy),
        Backend::Auto => unreachable!("select_backend resolves Auto"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_kernel() {
        assert_eq!(normalize_kernel(3).unwrap(), 3);
        assert_eq!(normalize_kernel(4).unwrap(), 5);
        assert_eq!(normalize_kernel(1).unwrap(), 1);
        assert!(normalize_kernel(0).is_err());
    }

    #[test]
    fn test_select_backend() {
        assert_eq!(select_backend(Backend::Auto, 100, 1000), Backend::Sort);
        assert_eq!(select_backend(Backend::Auto, 1001, 1000), Backend::Heap);
        assert_eq!(select_backend(Backend::Auto, 1000, 1000), Backend::Sort);
        assert_eq!(select_backend(Backend::Heap, 100, 1000), Backend::Heap);
        assert_eq!(select_backend(Backend::Sort, 1_000_000, 1000), Backend::Sort);
    }

    #[test]
    fn test_even_kernel_promotion_matches_next_odd() {
        let img = GrayImage::from_raw(4, 4, (0u8..16).map(|v| v * 13).collect()).unwrap();
        let even = median_filter_with(&img, 4, BorderPolicy::Clamp, Backend::Heap).unwrap();
        let odd = median_filter_with(&img, 5, BorderPolicy::Clamp, Backend::Heap).unwrap();
        assert_eq!(even, odd);
    }

    #[test]
    fn test_backends_agree_through_entry_point() {
        let img = GrayImage::from_raw(6, 5, (0u8..30).map(|v| v.wrapping_mul(37)).collect())
            .unwrap();
        let heap = median_filter_with(&img, 3, BorderPolicy::Mirror, Backend::Heap).unwrap();
        let sort = median_filter_with(&img, 3, BorderPolicy::Mirror, Backend::Sort).unwrap();
        assert_eq!(heap, sort);
    }
}
