//! Per-column window cache
//!
//! Horizontally adjacent windows share all but one column, and every window
//! in a row band draws from the same `kernel`-pixel vertical strips. The
//! cache materializes each strip once per row band so a horizontal slide
//! costs one strip lookup for the leaving column and one for the entering
//! column instead of re-slicing the padded image.
//!
//! A cache is owned by a single filter invocation and never outlives it;
//! `advance` drops everything the next row band cannot reuse.

use despeckle_core::GrayImage;

/// Memoized vertical strips of a padded image for one row band.
#[derive(Debug)]
pub struct ColumnCache<'a> {
    padded: &'a GrayImage,
    kernel: u32,
    base_row: u32,
    /// One entry per padded column; `None` until first requested.
    columns: Vec<Option<Vec<u8>>>,
}

impl<'a> ColumnCache<'a> {
    /// Cache over `padded` for the row band starting at `base_row`.
    ///
    /// # Panics
    ///
    /// Panics if the row band does not fit inside the padded image.
    pub fn new(padded: &'a GrayImage, kernel: u32, base_row: u32) -> Self {
        assert!(kernel >= 1 && base_row + kernel <= padded.height());
        Self {
            padded,
            kernel,
            base_row,
            columns: vec![None; padded.width() as usize],
        }
    }

    /// The `kernel` pixels of column `col` within the current row band,
    /// computing and memoizing the strip on first access.
    pub fn column(&mut self, col: u32) -> &[u8] {
        let Self {
            padded,
            kernel,
            base_row,
            columns,
        } = self;
        columns[col as usize].get_or_insert_with(|| {
            (*base_row..*base_row + *kernel)
                .map(|row| padded.get_pixel_unchecked(col, row))
                .collect()
        })
    }

    /// Invalidate all cached strips and rebind the cache to the row band
    /// starting at `base_row`.
    pub fn advance(&mut self, base_row: u32) {
        assert!(base_row + self.kernel <= self.padded.height());
        if base_row != self.base_row {
            self.base_row = base_row;
            for slot in &mut self.columns {
                *slot = None;
            }
        }
    }

    /// Row band this cache is bound to.
    pub fn base_row(&self) -> u32 {
        self.base_row
    }
}
