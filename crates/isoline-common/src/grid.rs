//! Scalar grid holding field samples and per-cell classification codes.

use rayon::prelude::*;
use tracing::debug;

use crate::cell::{classify, CellCorners};
use crate::error::{IsolineError, IsolineResult};

/// A regular grid of scalar samples.
///
/// Samples are stored row-major in one buffer of `rows * cols` values; the
/// cell codes live in a second buffer of `(rows - 1) * (cols - 1)` values.
/// Row 0 is the top of the grid.
#[derive(Debug, Clone)]
pub struct ScalarGrid {
    rows: usize,
    cols: usize,
    field: Vec<f32>,
    classification: Vec<u8>,
    threshold: f32,
    max_threshold: f32,
    /// True while `classification` matches the current field and threshold.
    classified: bool,
}

impl ScalarGrid {
    /// Create a zero-filled grid.
    ///
    /// The threshold starts at half of `max_threshold`.
    pub fn new(rows: usize, cols: usize, max_threshold: f32) -> IsolineResult<Self> {
        if rows < 2 || cols < 2 {
            return Err(IsolineError::InvalidDimensions { rows, cols });
        }
        if !max_threshold.is_finite() || max_threshold <= 0.0 {
            return Err(IsolineError::invalid_threshold(
                max_threshold,
                "max threshold must be finite and positive",
            ));
        }

        Ok(Self {
            rows,
            cols,
            field: vec![0.0; rows * cols],
            classification: vec![0; (rows - 1) * (cols - 1)],
            threshold: max_threshold / 2.0,
            max_threshold,
            classified: false,
        })
    }

    /// Create a grid from row-major samples.
    pub fn from_field(
        rows: usize,
        cols: usize,
        max_threshold: f32,
        field: Vec<f32>,
    ) -> IsolineResult<Self> {
        let mut grid = Self::new(rows, cols, max_threshold)?;
        if field.len() != grid.field.len() {
            return Err(IsolineError::FieldSizeMismatch {
                expected: grid.field.len(),
                actual: field.len(),
            });
        }
        grid.field = field;
        Ok(grid)
    }

    /// Number of sample rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of sample columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cell rows (`rows - 1`).
    pub fn cell_rows(&self) -> usize {
        self.rows - 1
    }

    /// Number of cell columns (`cols - 1`).
    pub fn cell_cols(&self) -> usize {
        self.cols - 1
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn max_threshold(&self) -> f32 {
        self.max_threshold
    }

    /// Change the isovalue. Invalidates the classification.
    pub fn set_threshold(&mut self, threshold: f32) -> IsolineResult<()> {
        if !threshold.is_finite() {
            return Err(IsolineError::invalid_threshold(threshold, "threshold must be finite"));
        }
        if threshold != self.threshold {
            self.threshold = threshold;
            self.classified = false;
        }
        Ok(())
    }

    /// Sample at (row, col), or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.field[row * self.cols + col])
        } else {
            None
        }
    }

    /// Sample at (row, col). Panics when out of bounds.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f32 {
        assert!(row < self.rows && col < self.cols, "sample ({}, {}) out of bounds", row, col);
        self.field[row * self.cols + col]
    }

    /// Write one sample. Panics when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < self.rows && col < self.cols, "sample ({}, {}) out of bounds", row, col);
        self.field[row * self.cols + col] = value;
        self.classified = false;
    }

    /// Row-major samples.
    pub fn field(&self) -> &[f32] {
        &self.field
    }

    /// Mutable row-major samples. Invalidates the classification.
    pub fn field_mut(&mut self) -> &mut [f32] {
        self.classified = false;
        &mut self.field
    }

    /// Overwrite all samples from a row-major slice.
    pub fn copy_from_slice(&mut self, samples: &[f32]) -> IsolineResult<()> {
        if samples.len() != self.field.len() {
            return Err(IsolineError::FieldSizeMismatch {
                expected: self.field.len(),
                actual: samples.len(),
            });
        }
        self.field.copy_from_slice(samples);
        self.classified = false;
        Ok(())
    }

    /// Recompute every sample from `f(row, col)`, rows in parallel.
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: Fn(usize, usize) -> f32 + Sync,
    {
        let cols = self.cols;
        self.field
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, samples)| {
                for (col, sample) in samples.iter_mut().enumerate() {
                    *sample = f(row, col);
                }
            });
        self.classified = false;
    }

    /// Corner samples of cell (row, col).
    #[inline]
    pub fn corners(&self, row: usize, col: usize) -> CellCorners {
        assert!(
            row < self.cell_rows() && col < self.cell_cols(),
            "cell ({}, {}) out of bounds",
            row,
            col
        );
        let top = row * self.cols + col;
        let bottom = top + self.cols;
        CellCorners::new(
            self.field[top],
            self.field[top + 1],
            self.field[bottom + 1],
            self.field[bottom],
        )
    }

    /// Classify every cell against the current threshold.
    ///
    /// Rows are processed in parallel; all codes are written before this
    /// returns.
    pub fn classify(&mut self) {
        let cols = self.cols;
        let cell_cols = self.cols - 1;
        let threshold = self.threshold;
        let field = &self.field;

        self.classification
            .par_chunks_mut(cell_cols)
            .enumerate()
            .for_each(|(row, codes)| {
                let top = &field[row * cols..(row + 1) * cols];
                let bottom = &field[(row + 1) * cols..(row + 2) * cols];
                for (col, code) in codes.iter_mut().enumerate() {
                    let corners =
                        CellCorners::new(top[col], top[col + 1], bottom[col + 1], bottom[col]);
                    *code = classify(corners, threshold);
                }
            });

        self.classified = true;
        debug!(
            rows = self.rows,
            cols = self.cols,
            threshold = threshold,
            "classified grid"
        );
    }

    /// Whether the classification matches the current field and threshold.
    pub fn is_classified(&self) -> bool {
        self.classified
    }

    /// Configuration code of cell (row, col).
    ///
    /// Panics when the classification is stale or the cell is out of bounds.
    #[inline]
    pub fn code(&self, row: usize, col: usize) -> u8 {
        assert!(self.classified, "grid must be classified before reading cell codes");
        assert!(
            row < self.cell_rows() && col < self.cell_cols(),
            "cell ({}, {}) out of bounds",
            row,
            col
        );
        self.classification[row * (self.cols - 1) + col]
    }

    /// All cell codes, row-major. Panics when the classification is stale.
    pub fn codes(&self) -> &[u8] {
        assert!(self.classified, "grid must be classified before reading cell codes");
        &self.classification
    }
}
