//! End-to-end rendering tests: field to pixels to PNG.

use isoline_common::{Color, ScalarGrid};
use renderer::{render_scene, ContourLayer, PixmapSurface, RecordingSurface, SceneStyle};
use test_utils::{create_bump_field, PEAK_3X3};

fn peak_grid() -> ScalarGrid {
    ScalarGrid::from_field(3, 3, 16.0, PEAK_3X3.to_vec()).unwrap()
}

fn single_layer(threshold: f32, color: Color, width: f32) -> SceneStyle {
    SceneStyle {
        layers: vec![ContourLayer::new(threshold, color, width)],
        ..SceneStyle::default()
    }
}

#[test]
fn test_peak_diamond_in_pixels() {
    // 90x90 surface, 3x3 samples: spacing 30, samples at 15, 45, 75
    let mut grid = peak_grid();
    let mut surface = PixmapSurface::new(90, 90).unwrap();
    let stats = render_scene(&mut grid, &mut surface, &single_layer(5.0, Color::WHITE, 3.0)).unwrap();
    assert_eq!(stats.total_segments(), 4);

    // Crossings at (45, 30), (60, 45), (45, 60), (30, 45)
    for (x, y) in [(45, 30), (60, 45), (45, 60), (30, 45)] {
        let (r, g, b, _) = surface.pixel(x, y).unwrap();
        assert!(r > 128 && g > 128 && b > 128, "({}, {}) not on the contour", x, y);
    }

    // Centre and corners stay background
    assert_eq!(surface.pixel(45, 45), Some((0, 0, 0, 255)));
    assert_eq!(surface.pixel(2, 2), Some((0, 0, 0, 255)));
}

#[test]
fn test_frame_saved_as_png() {
    let mut grid = ScalarGrid::from_field(20, 20, 16.0, create_bump_field(20, 20, 10.0, 10.0, 4.0)).unwrap();
    let mut surface = PixmapSurface::new(200, 200).unwrap();
    render_scene(&mut grid, &mut surface, &SceneStyle::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    surface.save_png(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    assert_eq!(&bytes[12..16], b"IHDR");
    assert_eq!(u32::from_be_bytes(bytes[16..20].try_into().unwrap()), 200);
}

#[test]
fn test_layers_drawn_in_order() {
    let mut grid = ScalarGrid::from_field(20, 20, 16.0, create_bump_field(20, 20, 10.0, 10.0, 4.0)).unwrap();
    let mut surface = RecordingSurface::new(200, 200);
    let stats = render_scene(&mut grid, &mut surface, &SceneStyle::default()).unwrap();

    let first_green = surface
        .lines
        .iter()
        .position(|l| l.color == Color::GREEN)
        .unwrap();
    assert!(surface.lines[..first_green].iter().all(|l| l.color == Color::RAY_WHITE));
    assert_eq!(stats.segments_per_layer.len(), 2);
    assert_eq!(stats.total_segments(), surface.lines.len());
    // Higher isovalue encloses a smaller region
    assert!(stats.segments_per_layer[1] <= stats.segments_per_layer[0]);
}

#[test]
fn test_overlay_markers_follow_first_layer() {
    let mut grid = peak_grid();
    let mut style = single_layer(5.0, Color::WHITE, 1.0);
    style.grid_overlay = true;

    let mut surface = RecordingSurface::new(90, 90);
    render_scene(&mut grid, &mut surface, &style).unwrap();

    assert_eq!(surface.circles.len(), 9);
    let red: Vec<_> = surface.circles.iter().filter(|c| c.color == Color::RED).collect();
    assert_eq!(red.len(), 1);
    assert_eq!((red[0].center.x, red[0].center.y), (45.0, 45.0));
}
