//! Drawing targets for contour segments and grid overlays.
//!
//! The marcher only talks to [`RenderSurface`]. Two implementations ship with
//! the crate: [`PixmapSurface`] rasterizes with tiny-skia, and
//! [`RecordingSurface`] keeps every call for inspection.

use std::path::Path;

use isoline_common::{Color, IsolineError, IsolineResult};
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::contour::Point;
use crate::png;

/// Something that can draw lines and circles immediately.
pub trait RenderSurface {
    /// Surface size in pixels (width, height).
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface.
    fn clear(&mut self, color: Color);

    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Color);

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// Anti-aliased raster surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> IsolineResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            IsolineError::render(format!("cannot create {}x{} pixmap", width, height))
        })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight (non-premultiplied) RGBA bytes, 4 per pixel.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        rgba
    }

    /// RGBA at pixel (x, y), or None when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some((color.red(), color.green(), color.blue(), color.alpha()))
    }

    /// Encode the surface as PNG.
    pub fn encode_png(&self) -> IsolineResult<Vec<u8>> {
        png::encode_png(&self.rgba_pixels(), self.width() as usize, self.height() as usize)
    }

    /// Encode the surface as PNG and write it to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> IsolineResult<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

impl RenderSurface for PixmapSurface {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Color) {
        // tiny-skia accepts NaN coordinates and strokes a stray diagonal
        if !(start.is_finite() && end.is_finite() && width.is_finite()) {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(start.x, start.y);
        pb.line_to(end.x, end.y);

        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint_for(color), &stroke, Transform::identity(), None);
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        if !(center.is_finite() && radius.is_finite()) {
            return;
        }
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

/// A line recorded by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnLine {
    pub start: Point,
    pub end: Point,
    pub width: f32,
    pub color: Color,
}

/// A circle recorded by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnCircle {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub clears: Vec<Color>,
    pub lines: Vec<DrawnLine>,
    pub circles: Vec<DrawnCircle>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Lines drawn with `color`.
    pub fn lines_with_color(&self, color: Color) -> impl Iterator<Item = &DrawnLine> {
        self.lines.iter().filter(move |line| line.color == color)
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.clears.push(color);
        self.lines.clear();
        self.circles.clear();
    }

    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Color) {
        self.lines.push(DrawnLine {
            start,
            end,
            width,
            color,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.circles.push(DrawnCircle {
            center,
            radius,
            color,
        });
    }
}
