//! Fixed-size symbolic pattern grids with wildcard-aware comparison
//!
//! A [`Pattern`] is a rectangular grid of single-character symbols stored
//! row-major. The symbol `-` is reserved as a wildcard: it marks a cell as
//! unconstrained, is excluded from similarity scoring, and never counts
//! toward the containment match threshold. The alphabet is otherwise
//! unbounded and opaque to this module.

use std::fmt;
use std::ops::{Bound, RangeBounds};

use ndarray::Array2;

use crate::io::error::{PatternError, Result};

/// The reserved wildcard symbol marking an unconstrained cell
pub const WILDCARD: char = '-';

/// A fixed-size rectangular grid of single-character symbols
///
/// Dimensions are fixed at construction; contents start as all wildcards and
/// are mutated either wholesale through [`Pattern::set_contents`] or
/// region-by-region through [`Pattern::write`]. The grid wholly owns its
/// storage: [`Pattern::read`] allocates an independent copy of the requested
/// window and [`Pattern::write`] copies cell values out of its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Array2<char>,
}

impl Pattern {
    /// Create a pattern of the given dimensions with every cell set to the
    /// wildcard symbol
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidDimension`] if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 {
            return Err(PatternError::InvalidDimension {
                dimension: "height",
                value: height,
            });
        }
        if width == 0 {
            return Err(PatternError::InvalidDimension {
                dimension: "width",
                value: width,
            });
        }
        Ok(Self::filled(height, width))
    }

    /// Infallible constructor for callers that guarantee positive dimensions
    pub(crate) fn filled(height: usize, width: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), WILDCARD),
        }
    }

    /// Create a pattern and fill it from a flat row-major contents string
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidDimension`] for zero dimensions and
    /// [`PatternError::ContentsLength`] when the string does not hold exactly
    /// `height * width` symbols.
    pub fn from_contents(height: usize, width: usize, contents: &str) -> Result<Self> {
        let mut pattern = Self::new(height, width)?;
        pattern.set_contents(contents)?;
        Ok(pattern)
    }

    /// Number of rows in the grid
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the grid
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Symbol at the given position, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get((row, col)).copied()
    }

    /// Replace the entire grid from a flat row-major string
    ///
    /// Position `p` of the string lands at row `p / width`, column
    /// `p % width`. Round-trips with [`Pattern::get_contents`].
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::ContentsLength`] when the string does not hold
    /// exactly `height * width` symbols.
    pub fn set_contents(&mut self, contents: &str) -> Result<()> {
        let expected = self.height() * self.width();
        let actual = contents.chars().count();
        if actual != expected {
            return Err(PatternError::ContentsLength { expected, actual });
        }
        for (cell, symbol) in self.cells.iter_mut().zip(contents.chars()) {
            *cell = symbol;
        }
        Ok(())
    }

    /// The grid contents as a flat row-major string
    pub fn get_contents(&self) -> String {
        self.cells.iter().collect()
    }

    /// Count of cells holding a non-wildcard symbol
    ///
    /// This is the pattern's meaningful cell count and the exact-match
    /// threshold used by [`Pattern::contains`].
    pub fn sigil_count(&self) -> usize {
        self.cells.iter().filter(|&&symbol| symbol != WILDCARD).count()
    }

    /// Extract a rectangular window into a freshly allocated pattern
    ///
    /// Both arguments take any range form; bounds are inclusive of their
    /// endpoints and unbounded ends extend to the grid edge, so
    /// `read(.., ..)` copies the whole grid and `read(1.., ..=2)` reads from
    /// row 1 down through column 2. The result shares no storage with the
    /// receiver.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyRegion`] when a range's upper bound falls
    /// below its lower bound and [`PatternError::RegionOutOfBounds`] when it
    /// reaches past the grid, checking rows before columns.
    pub fn read(
        &self,
        rows: impl RangeBounds<usize>,
        cols: impl RangeBounds<usize>,
    ) -> Result<Self> {
        let (row_min, row_max) = resolve_span("row", rows, self.height())?;
        let (col_min, col_max) = resolve_span("column", cols, self.width())?;

        let height = row_max - row_min + 1;
        let width = col_max - col_min + 1;
        let mut window = Self::filled(height, width);
        for ((i, j), cell) in window.cells.indexed_iter_mut() {
            if let Some(symbol) = self.get(row_min + i, col_min + j) {
                *cell = symbol;
            }
        }
        Ok(window)
    }

    /// Overlay another pattern onto this one, top-left corner at the offset
    ///
    /// Every cell of `other` is copied, wildcards included — a write is not
    /// masked. No reference to `other`'s storage is retained.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::OverlayOutOfBounds`] when `other` shifted by
    /// the offset reaches past the receiver in either dimension.
    pub fn write(&mut self, other: &Self, offset_row: usize, offset_col: usize) -> Result<()> {
        self.check_overlay(other, offset_row, offset_col)?;
        for ((i, j), &symbol) in other.cells.indexed_iter() {
            if let Some(cell) = self.cells.get_mut((offset_row + i, offset_col + j)) {
                *cell = symbol;
            }
        }
        Ok(())
    }

    /// Masked similarity between this pattern and `other` placed at the offset
    ///
    /// Counts the positions where the receiver's cell equals `other`'s cell
    /// and `other`'s cell is not the wildcard. Wildcard cells in `other`
    /// never score, even when both sides happen to hold the wildcard, so the
    /// result lies in `[0, other.sigil_count()]`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::OverlayOutOfBounds`] under the same bounds
    /// rule as [`Pattern::write`].
    pub fn compare(&self, other: &Self, offset_row: usize, offset_col: usize) -> Result<usize> {
        self.check_overlay(other, offset_row, offset_col)?;
        let mut similarity = 0;
        for ((i, j), &symbol) in other.cells.indexed_iter() {
            if symbol == WILDCARD {
                continue;
            }
            if self.get(offset_row + i, offset_col + j) == Some(symbol) {
                similarity += 1;
            }
        }
        Ok(similarity)
    }

    /// Whether `other` occurs anywhere inside this pattern
    ///
    /// Brute-force sliding-window search: slides `other`'s top-left corner
    /// over every valid offset in row-major order and reports true as soon as
    /// the masked similarity at an offset reaches `other.sigil_count()` —
    /// that is, every non-wildcard cell of `other` matches the window there.
    /// An all-wildcard `other` has a threshold of zero and is therefore
    /// contained in any pattern it fits inside.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::SubPatternTooLarge`] when `other` exceeds the
    /// receiver in either dimension.
    pub fn contains(&self, other: &Self) -> Result<bool> {
        if other.height() > self.height() {
            return Err(PatternError::SubPatternTooLarge {
                axis: "height",
                sub: other.height(),
                base: self.height(),
            });
        }
        if other.width() > self.width() {
            return Err(PatternError::SubPatternTooLarge {
                axis: "width",
                sub: other.width(),
                base: self.width(),
            });
        }

        let threshold = other.sigil_count();
        for i in 0..=(self.height() - other.height()) {
            for j in 0..=(self.width() - other.width()) {
                if self.compare(other, i, j)? == threshold {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn check_overlay(&self, other: &Self, offset_row: usize, offset_col: usize) -> Result<()> {
        if other.height() + offset_row > self.height() {
            return Err(PatternError::OverlayOutOfBounds {
                axis: "height",
                patch: other.height(),
                base: self.height(),
                offset: offset_row,
            });
        }
        if other.width() + offset_col > self.width() {
            return Err(PatternError::OverlayOutOfBounds {
                axis: "width",
                patch: other.width(),
                base: self.width(),
                offset: offset_col,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for &symbol in row {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

/// Resolve a range argument to inclusive `(min, max)` grid coordinates
///
/// Unbounded ends map to the grid edge; an exclusive upper bound of zero
/// denotes an empty span. The axis name is carried into error values.
fn resolve_span(
    axis: &'static str,
    bounds: impl RangeBounds<usize>,
    limit: usize,
) -> Result<(usize, usize)> {
    let min = match bounds.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start + 1,
        Bound::Unbounded => 0,
    };
    let max = match bounds.end_bound() {
        Bound::Included(&end) => Some(end),
        Bound::Excluded(&end) => end.checked_sub(1),
        Bound::Unbounded => limit.checked_sub(1),
    };
    let Some(max) = max else {
        return Err(PatternError::EmptyRegion { axis, min, max: 0 });
    };
    if max < min {
        return Err(PatternError::EmptyRegion { axis, min, max });
    }
    if max >= limit {
        return Err(PatternError::RegionOutOfBounds { axis, max, limit });
    }
    Ok((min, max))
}
