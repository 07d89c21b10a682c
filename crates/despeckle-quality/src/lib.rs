//! despeckle-quality - Noise injection and fidelity metrics
//!
//! Test and benchmark collaborators for the median filters:
//!
//! - [`add_salt_pepper`] - corrupt an image with impulse noise
//! - [`psnr`] - peak signal-to-noise ratio against a reference
//!
//! Neither function is part of the filtering contract itself; they produce
//! inputs for the filters and score their outputs.

mod error;
pub mod noise;
pub mod psnr;

pub use error::{QualityError, QualityResult};
pub use noise::add_salt_pepper;
pub use psnr::psnr;
