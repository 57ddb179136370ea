//! Debug overlay showing the sampling grid.
//!
//! Grid lines are drawn every cell spacing across the whole surface and each
//! sample gets a marker colored by which side of the threshold it falls on.

use isoline_common::cell::above;
use isoline_common::{Color, ScalarGrid};
use serde::Deserialize;

use crate::contour::{CellLayout, Point};
use crate::surface::RenderSurface;

/// Colors and sizes for the grid overlay.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub line_color: Color,
    pub line_width: f32,
    /// Marker color for samples above the threshold.
    pub above_color: Color,
    /// Marker color for samples at or below the threshold.
    pub below_color: Color,
    pub marker_radius: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_color: Color::BLACK,
            line_width: 1.0,
            above_color: Color::RED,
            below_color: Color::GREEN,
            marker_radius: 2.0,
        }
    }
}

/// Draw grid lines and one marker per sample.
///
/// Markers compare raw samples against the grid's threshold, so no
/// classification is needed.
pub fn draw_grid_overlay<S>(grid: &ScalarGrid, layout: &CellLayout, surface: &mut S, style: &OverlayStyle)
where
    S: RenderSurface + ?Sized,
{
    let (width, height) = surface.size();
    let (width, height) = (width as f32, height as f32);

    if layout.cell_width >= 1.0 {
        let mut x = 0.0;
        while x <= width {
            surface.draw_line(Point::new(x, height), Point::new(x, 0.0), style.line_width, style.line_color);
            x += layout.cell_width;
        }
    }

    if layout.cell_height >= 1.0 {
        let mut y = 0.0;
        while y <= height {
            surface.draw_line(Point::new(0.0, y), Point::new(width, y), style.line_width, style.line_color);
            y += layout.cell_height;
        }
    }

    let threshold = grid.threshold();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let color = if above(threshold, grid.value(row, col)) == 1 {
                style.above_color
            } else {
                style.below_color
            };
            surface.draw_circle(layout.sample_position(row, col), style.marker_radius, color);
        }
    }
}
