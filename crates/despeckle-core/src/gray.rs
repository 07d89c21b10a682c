//! 8-bit grayscale image container
//!
//! `GrayImage` is the only pixel container in this workspace. Pixels are
//! `u8`, so the intensity domain [0, 255] is enforced by the type system:
//! an out-of-range sample cannot be constructed, only dimension and size
//! errors are checked at runtime.
//!
//! # Pixel layout
//!
//! Row-major, one byte per pixel, no row padding. Pixel (x, y) lives at
//! index `y * width + x`.

use crate::error::{Error, Result};

/// Upper bound on `width * height` for a single image.
///
/// Construction fails with [`Error::TooLarge`] beyond this; a retry would
/// not change the outcome, so callers should treat it as terminal.
pub const MAX_PIXELS: u64 = 1 << 28;

/// 8-bit grayscale image
///
/// # Examples
///
/// ```
/// use despeckle_core::GrayImage;
///
/// let img = GrayImage::new(640, 480).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.get_pixel(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a zero-filled image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero and
    /// [`Error::TooLarge`] if the pixel count exceeds [`MAX_PIXELS`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixels = Self::checked_pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; pixels],
        })
    }

    /// Create an image filled with a single value.
    pub fn new_with_value(width: u32, height: u32, value: u8) -> Result<Self> {
        let pixels = Self::checked_pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; pixels],
        })
    }

    /// Wrap a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len() != width * height`,
    /// plus the dimension errors of [`GrayImage::new`].
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let pixels = Self::checked_pixel_count(width, height)?;
        if data.len() != pixels {
            return Err(Error::BufferSizeMismatch {
                expected: pixels,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn checked_pixel_count(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let pixels = width as u64 * height as u64;
        if pixels > MAX_PIXELS {
            return Err(Error::TooLarge {
                pixels,
                limit: MAX_PIXELS,
            });
        }
        Ok(pixels as usize)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as u64 * self.width as u64 + x as u64) as usize,
                len: self.data.len(),
            });
        }
        self.data[(y * self.width + x) as usize] = value;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: u8) {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize] = value;
    }

    /// Fill the whole image with one value.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Borrow one row of pixels.
    ///
    /// Returns `None` if `y` is out of bounds.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y * self.width) as usize;
        Some(&self.data[start..start + self.width as usize])
    }

    /// Borrow the raw row-major pixel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning the raw pixel buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
