//! Cell-by-cell segment generation.

use isoline_common::cell::above;
use isoline_common::{CellCorners, Color, ScalarGrid};
use rayon::prelude::*;
use tracing::debug;

use super::interpolate::{interpolate, midpoint};
use super::table::{vertex_mask, VertexSlot};
use super::{CellLayout, Point, Segment, VertexPlacement};
use crate::surface::RenderSurface;

/// Walks a classified grid and produces contour segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marcher {
    layout: CellLayout,
    placement: VertexPlacement,
}

impl Marcher {
    pub fn new(layout: CellLayout) -> Self {
        Self {
            layout,
            placement: VertexPlacement::Interpolated,
        }
    }

    pub fn with_placement(mut self, placement: VertexPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Contour segments for every cell, in row-major cell order.
    ///
    /// Rows are processed in parallel. Panics if the grid's classification
    /// is stale.
    pub fn segments(&self, grid: &ScalarGrid) -> Vec<Segment> {
        assert!(
            grid.is_classified(),
            "grid must be classified against the current field and threshold before marching"
        );

        (0..grid.cell_rows())
            .into_par_iter()
            .map(|row| {
                let mut out = Vec::new();
                for col in 0..grid.cell_cols() {
                    self.cell_segments(grid, row, col, &mut out);
                }
                out
            })
            .collect::<Vec<_>>()
            .concat()
    }

    /// Draw the contour of `grid` at its current threshold.
    ///
    /// Returns the number of segments drawn.
    pub fn march<S>(&self, grid: &ScalarGrid, surface: &mut S, color: Color, line_width: f32) -> usize
    where
        S: RenderSurface + ?Sized,
    {
        let segments = self.segments(grid);
        for segment in &segments {
            surface.draw_line(segment.start, segment.end, line_width, color);
        }

        debug!(
            threshold = grid.threshold(),
            segments = segments.len(),
            line_width = line_width,
            "marched grid"
        );
        segments.len()
    }

    /// Append the segments of cell (row, col) to `out`.
    ///
    /// Emits nothing for codes 0 and 15, one segment for ordinary codes and
    /// two for the saddle codes 5 and 10.
    pub fn cell_segments(&self, grid: &ScalarGrid, row: usize, col: usize, out: &mut Vec<Segment>) {
        let code = grid.code(row, col);
        if code == 0 || code == 15 {
            return;
        }

        let corners = grid.corners(row, col);
        let threshold = grid.threshold();
        let mask = vertex_mask(code);

        let mut vertices = [Point::default(); 4];
        let mut count = 0;
        for slot in VertexSlot::ALL {
            if mask & slot.bit() != 0 {
                vertices[count] = self.vertex_position(slot, row, col, &corners, threshold);
                count += 1;
            }
        }

        match count {
            2 => out.push(Segment::new(vertices[0], vertices[1])),
            4 => {
                // Saddle: the corner average decides which pairs connect
                if above(threshold, corners.average()) == 1 {
                    out.push(Segment::new(vertices[0], vertices[3]));
                    out.push(Segment::new(vertices[1], vertices[2]));
                } else {
                    out.push(Segment::new(vertices[0], vertices[1]));
                    out.push(Segment::new(vertices[2], vertices[3]));
                }
            }
            n => unreachable!("contour table yields {} vertices for code {}", n, code),
        }
    }

    /// Screen position of one vertex slot of cell (row, col).
    fn vertex_position(
        &self,
        slot: VertexSlot,
        row: usize,
        col: usize,
        corners: &CellCorners,
        threshold: f32,
    ) -> Point {
        let left = self.layout.x(col);
        let right = left + self.layout.cell_width;
        let top = self.layout.y(row);
        let bottom = top + self.layout.cell_height;

        let edge = |pos_a: f32, pos_b: f32, value_a: f32, value_b: f32| match self.placement {
            VertexPlacement::Interpolated => interpolate(threshold, pos_a, pos_b, value_a, value_b),
            VertexPlacement::Midpoint => midpoint(pos_a, pos_b),
        };

        match slot {
            VertexSlot::RightEdge => Point::new(
                right,
                edge(top, bottom, corners.top_right, corners.bottom_right),
            ),
            VertexSlot::TopRight => Point::new(right, top),
            VertexSlot::TopEdge => Point::new(
                edge(left, right, corners.top_left, corners.top_right),
                top,
            ),
            VertexSlot::TopLeft => Point::new(left, top),
            VertexSlot::LeftEdge => Point::new(
                left,
                edge(top, bottom, corners.top_left, corners.bottom_left),
            ),
            VertexSlot::BottomLeft => Point::new(left, bottom),
            VertexSlot::BottomEdge => Point::new(
                edge(left, right, corners.bottom_left, corners.bottom_right),
                bottom,
            ),
            VertexSlot::BottomRight => Point::new(right, bottom),
        }
    }
}

/// Segments of `grid` at unit layout with interpolated vertices.
pub fn march_segments(grid: &ScalarGrid) -> Vec<Segment> {
    Marcher::new(CellLayout::unit()).segments(grid)
}
