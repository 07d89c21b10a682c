//! Border handling for windowed operations
//!
//! Windows centered near the image edge reach outside the valid pixel area.
//! Both filter backends resolve this by extending the image with a border of
//! `radius` pixels on every side before traversal, so the border policy is
//! fixed for the whole pass and the output at the edges is deterministic.

use crate::error::{Error, Result};
use crate::gray::{GrayImage, MAX_PIXELS};

/// How out-of-bounds window samples are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderPolicy {
    /// Repeat the nearest edge pixel.
    Clamp,
    /// Reflect around the edge without repeating the edge sample
    /// (e.g. row `[a, b, c]` extends to `[c, b, a, b, c, b, a]`).
    #[default]
    Mirror,
}

impl BorderPolicy {
    /// Map a possibly out-of-range coordinate into `[0, len)`.
    ///
    /// Works for offsets of any magnitude; a length-1 axis always resolves
    /// to 0.
    pub fn resolve(self, pos: i64, len: u32) -> u32 {
        let len = len as i64;
        if (0..len).contains(&pos) {
            return pos as u32;
        }
        match self {
            BorderPolicy::Clamp => pos.clamp(0, len - 1) as u32,
            BorderPolicy::Mirror => {
                if len == 1 {
                    return 0;
                }
                let period = 2 * (len - 1);
                let m = pos.rem_euclid(period);
                if m < len { m as u32 } else { (period - m) as u32 }
            }
        }
    }
}

impl GrayImage {
    /// Extend the image with a `radius`-pixel border on all sides.
    ///
    /// Border pixels are sourced from the interior according to `policy`.
    /// A radius of 0 returns a plain copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the padded dimensions exceed the limits enforced
    /// by [`GrayImage::new`].
    pub fn extend_border(&self, radius: u32, policy: BorderPolicy) -> Result<GrayImage> {
        if radius == 0 {
            return Ok(self.clone());
        }
        let w = self.width();
        let h = self.height();
        let padded_w = w as u64 + 2 * radius as u64;
        let padded_h = h as u64 + 2 * radius as u64;
        let pixels = padded_w * padded_h;
        if pixels > MAX_PIXELS {
            return Err(Error::TooLarge {
                pixels,
                limit: MAX_PIXELS,
            });
        }
        let mut out = GrayImage::new(padded_w as u32, padded_h as u32)?;
        for y in 0..out.height() {
            let sy = policy.resolve(y as i64 - radius as i64, h);
            for x in 0..out.width() {
                let sx = policy.resolve(x as i64 - radius as i64, w);
                out.set_pixel_unchecked(x, y, self.get_pixel_unchecked(sx, sy));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_resolve() {
        let p = BorderPolicy::Clamp;
        assert_eq!(p.resolve(-3, 5), 0);
        assert_eq!(p.resolve(-1, 5), 0);
        assert_eq!(p.resolve(0, 5), 0);
        assert_eq!(p.resolve(4, 5), 4);
        assert_eq!(p.resolve(7, 5), 4);
    }

    #[test]
    fn test_mirror_resolve() {
        let p = BorderPolicy::Mirror;
        // [0 1 2 3 4] mirrored: -1 -> 1, -2 -> 2, 5 -> 3, 6 -> 2
        assert_eq!(p.resolve(-1, 5), 1);
        assert_eq!(p.resolve(-2, 5), 2);
        assert_eq!(p.resolve(5, 5), 3);
        assert_eq!(p.resolve(6, 5), 2);
        // Period is 2*(len-1) = 8: -8 maps back to 0
        assert_eq!(p.resolve(-8, 5), 0);
    }

    #[test]
    fn test_mirror_single_pixel_axis() {
        let p = BorderPolicy::Mirror;
        assert_eq!(p.resolve(-4, 1), 0);
        assert_eq!(p.resolve(9, 1), 0);
    }

    #[test]
    fn test_extend_border_clamp() {
        let img = GrayImage::from_raw(2, 1, vec![10, 20]).unwrap();
        let padded = img.extend_border(2, BorderPolicy::Clamp).unwrap();
        assert_eq!(padded.width(), 6);
        assert_eq!(padded.height(), 5);
        // Middle row: [10 10 10 20 20 20]
        assert_eq!(padded.row(2).unwrap(), &[10, 10, 10, 20, 20, 20]);
        // Rows above and below clamp vertically to the same row
        assert_eq!(padded.row(0).unwrap(), padded.row(2).unwrap());
    }

    #[test]
    fn test_extend_border_mirror() {
        let img = GrayImage::from_raw(3, 1, vec![1, 2, 3]).unwrap();
        let padded = img.extend_border(2, BorderPolicy::Mirror).unwrap();
        // [1 2 3] with radius 2 -> [3 2 1 2 3 2 1]
        assert_eq!(padded.row(2).unwrap(), &[3, 2, 1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_extend_border_radius_larger_than_image() {
        let img = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        let clamp = img.extend_border(5, BorderPolicy::Clamp).unwrap();
        assert_eq!(clamp.get_pixel(0, 0), Some(1));
        assert_eq!(clamp.get_pixel(11, 11), Some(4));
        let mirror = img.extend_border(5, BorderPolicy::Mirror).unwrap();
        assert_eq!(mirror.width(), 12);
        // Period 2 on both axes: offset -5 resolves to index 1
        assert_eq!(mirror.get_pixel(0, 0), Some(4));
    }

    #[test]
    fn test_extend_border_zero_radius() {
        let img = GrayImage::from_raw(2, 2, vec![5, 6, 7, 8]).unwrap();
        let same = img.extend_border(0, BorderPolicy::Mirror).unwrap();
        assert_eq!(same, img);
    }
}
