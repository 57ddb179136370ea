//! Contour line (isoline) extraction using the marching squares algorithm.
//!
//! A classified [`ScalarGrid`](isoline_common::ScalarGrid) is walked cell by
//! cell. Each cell code selects edge crossings from [`table::CONTOUR_TABLE`],
//! crossings are placed with [`interpolate::interpolate`], and the resulting
//! segments are handed to a [`RenderSurface`](crate::surface::RenderSurface).

pub mod interpolate;
pub mod march;
pub mod table;

use serde::Deserialize;

pub use interpolate::interpolate;
pub use march::{march_segments, Marcher};
pub use table::{is_saddle, vertex_mask, VertexSlot, CONTOUR_TABLE};

/// A point in 2D space (pixel coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// How edge vertices are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexPlacement {
    /// Linear interpolation against the threshold.
    #[default]
    Interpolated,
    /// Edge midpoint, ignoring sample values.
    Midpoint,
}

/// Screen placement of grid samples.
///
/// Sample (row, col) sits at `(origin_x + col * cell_width,
/// origin_y + row * cell_height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl CellLayout {
    /// Samples at integer grid coordinates, sample (0, 0) at the origin.
    pub fn unit() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_width: 1.0,
            cell_height: 1.0,
        }
    }

    /// Spread `rows` x `cols` samples over a surface.
    ///
    /// Spacing is the whole-pixel quotient of surface size by sample count,
    /// and the first sample sits half a spacing in from the top-left corner.
    pub fn fit(surface_width: u32, surface_height: u32, rows: usize, cols: usize) -> Self {
        let spacing_x = surface_width / cols.max(1) as u32;
        let spacing_y = surface_height / rows.max(1) as u32;

        Self {
            origin_x: (spacing_x / 2) as f32,
            origin_y: (spacing_y / 2) as f32,
            cell_width: spacing_x as f32,
            cell_height: spacing_y as f32,
        }
    }

    /// Screen x of sample column `col`.
    #[inline]
    pub fn x(&self, col: usize) -> f32 {
        self.origin_x + col as f32 * self.cell_width
    }

    /// Screen y of sample row `row`.
    #[inline]
    pub fn y(&self, row: usize) -> f32 {
        self.origin_y + row as f32 * self.cell_height
    }

    /// Screen position of sample (row, col).
    pub fn sample_position(&self, row: usize, col: usize) -> Point {
        Point::new(self.x(col), self.y(row))
    }
}

impl Default for CellLayout {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_layout() {
        // 1200 / 133 = 9, 900 / 100 = 9
        let layout = CellLayout::fit(1200, 900, 100, 133);
        assert_eq!(layout.cell_width, 9.0);
        assert_eq!(layout.cell_height, 9.0);
        assert_eq!(layout.origin_x, 4.0);
        assert_eq!(layout.origin_y, 4.0);
        assert_eq!(layout.sample_position(2, 3), Point::new(31.0, 22.0));
    }

    #[test]
    fn test_fit_layout_small_surface() {
        let layout = CellLayout::fit(3, 3, 10, 10);
        assert_eq!(layout.cell_width, 0.0);
        assert_eq!(layout.origin_x, 0.0);
    }

    #[test]
    fn test_unit_layout() {
        let layout = CellLayout::unit();
        assert_eq!(layout.sample_position(4, 7), Point::new(7.0, 4.0));
    }
}
