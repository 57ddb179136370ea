//! Per-cell corner classification.
//!
//! A cell is the square spanned by samples (i, j), (i, j+1), (i+1, j) and
//! (i+1, j+1), with row index `i` growing downward. Its code packs one bit
//! per corner, most significant first:
//!
//! ```text
//! bit 3 -- bit 2        top-left    -- top-right
//!   |        |             |               |
//! bit 0 -- bit 1        bottom-left -- bottom-right
//! ```
//!
//! The contour lookup table in the renderer is indexed by this code, so the
//! packing order must not change.

/// The four corner samples of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCorners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CellCorners {
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Mean of the four corner values.
    pub fn average(&self) -> f32 {
        (self.top_left + self.top_right + self.bottom_right + self.bottom_left) / 4.0
    }
}

/// Returns 1 when `value` lies strictly above `threshold`.
#[inline(always)]
pub fn above(threshold: f32, value: f32) -> u8 {
    if value > threshold {
        1
    } else {
        0
    }
}

/// Pack the corners of a cell into its 4-bit configuration code.
#[inline]
pub fn classify(corners: CellCorners, threshold: f32) -> u8 {
    let mut code = above(threshold, corners.top_left);
    code <<= 1;
    code |= above(threshold, corners.top_right);
    code <<= 1;
    code |= above(threshold, corners.bottom_right);
    code <<= 1;
    code |= above(threshold, corners.bottom_left);
    code
}
