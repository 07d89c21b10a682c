//! Peak signal-to-noise ratio
//!
//! Standard fidelity score for comparing a processed image against a
//! reference, in decibels against the 8-bit peak value 255. Higher is
//! better; identical images score infinity.

use despeckle_core::{Error as CoreError, GrayImage};

use crate::error::QualityResult;

/// Peak value of the 8-bit intensity domain.
const PEAK: f64 = 255.0;

/// Compute PSNR of `test` against `reference`, in dB.
///
/// # Errors
///
/// Returns a dimension-mismatch error if the two images differ in extent.
pub fn psnr(reference: &GrayImage, test: &GrayImage) -> QualityResult<f64> {
    if reference.width() != test.width() || reference.height() != test.height() {
        return Err(CoreError::DimensionMismatch {
            expected: (reference.width(), reference.height()),
            actual: (test.width(), test.height()),
        }
        .into());
    }

    let sum_sq: f64 = reference
        .data()
        .iter()
        .zip(test.data())
        .map(|(&a, &b)| {
            let diff = a as f64 - b as f64;
            diff * diff
        })
        .sum();
    let mse = sum_sq / reference.pixel_count() as f64;
    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (PEAK * PEAK / mse).log10())
}
