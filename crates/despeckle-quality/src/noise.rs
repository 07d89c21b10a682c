//! Salt-and-pepper noise injection
//!
//! Produces corrupted copies of an image for testing and benchmarking the
//! median filters: each pixel is independently forced to 255 (salt) or 0
//! (pepper) with configurable probability. A seed makes the corruption
//! reproducible across runs.

use despeckle_core::GrayImage;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::error::{QualityError, QualityResult};

/// Return a noisy copy of `image`.
///
/// `amount` is the fraction of pixels to corrupt; of those, `salt_ratio`
/// become salt (255) and the rest pepper (0). Pass a `seed` for
/// reproducible output.
///
/// # Errors
///
/// Returns [`QualityError::FractionOutOfRange`] if `amount` or
/// `salt_ratio` is outside [0, 1].
pub fn add_salt_pepper(
    image: &GrayImage,
    amount: f64,
    salt_ratio: f64,
    seed: Option<u64>,
) -> QualityResult<GrayImage> {
    if !(0.0..=1.0).contains(&amount) {
        return Err(QualityError::FractionOutOfRange {
            name: "amount",
            value: amount,
        });
    }
    if !(0.0..=1.0).contains(&salt_ratio) {
        return Err(QualityError::FractionOutOfRange {
            name: "salt_ratio",
            value: salt_ratio,
        });
    }

    let mut noisy = image.clone();
    if amount == 0.0 {
        return Ok(noisy);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let salt_threshold = amount * salt_ratio;

    for y in 0..noisy.height() {
        for x in 0..noisy.width() {
            let draw: f64 = rng.random();
            if draw < salt_threshold {
                noisy.set_pixel_unchecked(x, y, 255);
            } else if draw < amount {
                noisy.set_pixel_unchecked(x, y, 0);
            }
        }
    }
    Ok(noisy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_is_identity() {
        let img = GrayImage::new_with_value(8, 8, 100).unwrap();
        let noisy = add_salt_pepper(&img, 0.0, 0.5, Some(1)).unwrap();
        assert_eq!(noisy, img);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let img = GrayImage::new_with_value(16, 16, 100).unwrap();
        let a = add_salt_pepper(&img, 0.3, 0.5, Some(7)).unwrap();
        let b = add_salt_pepper(&img, 0.3, 0.5, Some(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_corruption_fraction_is_plausible() {
        let img = GrayImage::new_with_value(100, 100, 100).unwrap();
        let noisy = add_salt_pepper(&img, 0.2, 0.5, Some(42)).unwrap();
        let flipped = noisy.data().iter().filter(|&&v| v != 100).count();
        // 2000 expected; allow a generous band for sampling variance.
        assert!((1500..=2500).contains(&flipped), "flipped {flipped} pixels");
        let salt = noisy.data().iter().filter(|&&v| v == 255).count();
        let pepper = noisy.data().iter().filter(|&&v| v == 0).count();
        assert_eq!(salt + pepper, flipped);
        assert!(salt > 0 && pepper > 0);
    }

    #[test]
    fn test_salt_ratio_extremes() {
        let img = GrayImage::new_with_value(32, 32, 100).unwrap();
        let all_salt = add_salt_pepper(&img, 0.5, 1.0, Some(3)).unwrap();
        assert!(all_salt.data().iter().all(|&v| v == 100 || v == 255));
        let all_pepper = add_salt_pepper(&img, 0.5, 0.0, Some(3)).unwrap();
        assert!(all_pepper.data().iter().all(|&v| v == 100 || v == 0));
    }

    #[test]
    fn test_unseeded_rng_corrupts_pixels() {
        let img = GrayImage::new_with_value(64, 64, 100).unwrap();
        let noisy = add_salt_pepper(&img, 0.5, 0.5, None).unwrap();
        // With 4096 pixels at 50% corruption, an untouched output would mean
        // the entropy source never fired.
        assert!(noisy.data().iter().any(|&v| v != 100));
        assert!(noisy.data().iter().all(|&v| v == 0 || v == 100 || v == 255));
    }

    #[test]
    fn test_rejects_out_of_range_parameters() {
        let img = GrayImage::new(4, 4).unwrap();
        assert!(add_salt_pepper(&img, 1.5, 0.5, None).is_err());
        assert!(add_salt_pepper(&img, 0.5, -0.1, None).is_err());
    }
}
