//! Frame composition: background, optional overlay, then each contour layer.

use isoline_common::{IsolineResult, ScalarGrid};
use tracing::debug;

use crate::contour::{CellLayout, Marcher};
use crate::overlay::draw_grid_overlay;
use crate::style::SceneStyle;
use crate::surface::RenderSurface;

/// Per-frame counts reported by [`render_scene`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Segments drawn for each layer, in layer order.
    pub segments_per_layer: Vec<usize>,
}

impl SceneStats {
    pub fn total_segments(&self) -> usize {
        self.segments_per_layer.iter().sum()
    }
}

/// Draw one frame of `grid` onto `surface`.
///
/// Samples are spread over the surface with [`CellLayout::fit`]. The overlay
/// uses the first layer's threshold. For every layer the grid threshold is
/// set, the grid is reclassified and the contour is marched, so the grid is
/// left classified at the last layer's threshold.
pub fn render_scene<S>(grid: &mut ScalarGrid, surface: &mut S, style: &SceneStyle) -> IsolineResult<SceneStats>
where
    S: RenderSurface + ?Sized,
{
    style.validate()?;

    let (width, height) = surface.size();
    let layout = CellLayout::fit(width, height, grid.rows(), grid.cols());
    let marcher = Marcher::new(layout).with_placement(style.placement);

    surface.clear(style.background);

    if style.grid_overlay {
        grid.set_threshold(style.layers[0].threshold)?;
        draw_grid_overlay(grid, &layout, surface, &style.overlay);
    }

    let mut stats = SceneStats::default();
    for layer in &style.layers {
        grid.set_threshold(layer.threshold)?;
        grid.classify();
        let drawn = marcher.march(grid, surface, layer.color, layer.line_width);
        stats.segments_per_layer.push(drawn);
    }

    debug!(
        layers = style.layers.len(),
        segments = stats.total_segments(),
        width = width,
        height = height,
        "rendered scene"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ContourLayer;
    use crate::surface::RecordingSurface;
    use isoline_common::Color;

    #[test]
    fn test_render_scene_layers() {
        let mut grid = ScalarGrid::from_field(
            3,
            3,
            16.0,
            vec![0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 0.0],
        )
        .unwrap();
        let style = SceneStyle {
            layers: vec![
                ContourLayer::new(5.0, Color::WHITE, 1.0),
                ContourLayer::new(20.0, Color::GREEN, 2.0),
            ],
            ..SceneStyle::default()
        };

        let mut surface = RecordingSurface::new(30, 30);
        let stats = render_scene(&mut grid, &mut surface, &style).unwrap();

        assert_eq!(stats.segments_per_layer, vec![4, 0]);
        assert_eq!(surface.clears, vec![Color::BLACK]);
        assert_eq!(surface.lines_with_color(Color::WHITE).count(), 4);
        assert!(surface.circles.is_empty());
        assert_eq!(grid.threshold(), 20.0);
        assert!(grid.is_classified());
    }

    #[test]
    fn test_render_scene_with_overlay() {
        let mut grid = ScalarGrid::new(3, 4, 16.0).unwrap();
        let style = SceneStyle {
            grid_overlay: true,
            ..SceneStyle::default()
        };

        let mut surface = RecordingSurface::new(40, 30);
        let stats = render_scene(&mut grid, &mut surface, &style).unwrap();

        assert_eq!(stats.total_segments(), 0);
        assert_eq!(surface.circles.len(), 12);
        assert!(!surface.lines.is_empty());
    }

    #[test]
    fn test_render_scene_rejects_invalid_style() {
        let mut grid = ScalarGrid::new(3, 3, 16.0).unwrap();
        let style = SceneStyle {
            layers: vec![],
            ..SceneStyle::default()
        };
        let mut surface = RecordingSurface::new(10, 10);
        assert!(render_scene(&mut grid, &mut surface, &style).is_err());
        assert!(surface.clears.is_empty());
    }
}
