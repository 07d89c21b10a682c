//! Brute-force median baseline
//!
//! Sorts every kernel-sized window from scratch: O(k^2 log k^2) per pixel.
//! Kept as the reference the optimized engine is verified against and as
//! the backend of choice for small images, where sorting a handful of
//! values beats the heap bookkeeping.

use crate::error::FilterResult;
use crate::sliding::check_kernel;
use despeckle_core::{BorderPolicy, GrayImage};

/// Apply a full-sort-per-window median filter.
///
/// Same contract as [`crate::sliding_median`]: odd kernel, identical output
/// pixel for pixel.
pub fn brute_force_median(
    image: &GrayImage,
    kernel: u32,
    policy: BorderPolicy,
) -> FilterResult<GrayImage> {
    check_kernel(kernel)?;
    if kernel == 1 {
        return Ok(image.clone());
    }

    let radius = kernel / 2;
    let padded = image.extend_border(radius, policy)?;
    let width = image.width();
    let height = image.height();
    let mut output = GrayImage::new(width, height)?;

    let mut window = Vec::with_capacity((kernel * kernel) as usize);
    for y in 0..height {
        for x in 0..width {
            window.clear();
            for wy in 0..kernel {
                for wx in 0..kernel {
                    window.push(padded.get_pixel_unchecked(x + wx, y + wy));
                }
            }
            window.sort_unstable();
            output.set_pixel_unchecked(x, y, window[(window.len() - 1) / 2]);
        }
    }

    Ok(output)
}
