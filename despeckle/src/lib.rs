//! Despeckle - Salt-and-pepper denoising for grayscale images
//!
//! Removes impulse noise by replacing each pixel with the median of its
//! square neighborhood. The optimized engine tracks the window with a
//! dual-heap median tracker and a Fenwick frequency tree, updating them
//! incrementally as the window slides instead of re-sorting every
//! neighborhood.
//!
//! # Example
//!
//! ```
//! use despeckle::{BorderPolicy, GrayImage, median_filter};
//!
//! let mut image = GrayImage::new(5, 5).unwrap();
//! image.set_pixel(2, 2, 255).unwrap();
//!
//! let denoised = median_filter(&image, 3, BorderPolicy::Clamp).unwrap();
//! assert!(denoised.data().iter().all(|&v| v == 0));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use despeckle_core::*;

// Re-export the filter entry points at the root
pub use despeckle_filter::{
    Backend, FilterError, FilterResult, brute_force_median, median_filter, median_filter_with,
    sliding_median,
};

// Re-export domain crates as modules for everything else
pub use despeckle_filter as filter;
pub use despeckle_quality as quality;
