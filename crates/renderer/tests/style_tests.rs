//! Tests for scene style loading.

use std::io::Write;

use isoline_common::{Color, IsolineError};
use renderer::style::{ContourLayer, SceneStyle};
use renderer::VertexPlacement;

// ============================================================================
// YAML parsing
// ============================================================================

#[test]
fn test_parse_full_style() {
    let yaml = r##"
background: raywhite
placement: midpoint
grid_overlay: true
overlay:
  line_color: [0, 0, 0]
  above_color: red
  below_color: "#00E430"
  marker_radius: 3.0
layers:
  - threshold: 1.0
    color: white
  - threshold: 1.4
    color: [0, 228, 48, 200]
    line_width: 2.5
"##;

    let style = SceneStyle::from_yaml(yaml).unwrap();
    assert_eq!(style.background, Color::RAY_WHITE);
    assert_eq!(style.placement, VertexPlacement::Midpoint);
    assert!(style.grid_overlay);
    assert_eq!(style.overlay.above_color, Color::RED);
    assert_eq!(style.overlay.below_color, Color::GREEN);
    assert_eq!(style.overlay.marker_radius, 3.0);
    // unspecified overlay fields keep their defaults
    assert_eq!(style.overlay.line_width, 1.0);
    assert_eq!(
        style.layers,
        vec![
            ContourLayer::new(1.0, Color::WHITE, 1.0),
            ContourLayer::new(1.4, Color::rgba(0, 228, 48, 200), 2.5),
        ]
    );
}

#[test]
fn test_empty_document_is_default() {
    let style = SceneStyle::from_yaml("{}").unwrap();
    assert_eq!(style, SceneStyle::default());
}

#[test]
fn test_unknown_placement_rejected() {
    let err = SceneStyle::from_yaml("placement: cubic\n").unwrap_err();
    assert!(matches!(err, IsolineError::InvalidConfig(_)));
}

#[test]
fn test_negative_marker_radius_rejected_with_overlay() {
    let yaml = "grid_overlay: true\noverlay:\n  marker_radius: -1.0\n";
    assert!(SceneStyle::from_yaml(yaml).is_err());

    // Radius is irrelevant while the overlay is off
    let yaml = "grid_overlay: false\noverlay:\n  marker_radius: -1.0\n";
    assert!(SceneStyle::from_yaml(yaml).is_ok());
}

#[test]
fn test_non_finite_threshold_rejected() {
    let yaml = "layers:\n  - threshold: .nan\n    color: white\n";
    let err = SceneStyle::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("threshold"));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "layers:\n  - threshold: 2.0\n    color: green\n    line_width: 3").unwrap();

    let style = SceneStyle::from_file(file.path()).unwrap();
    assert_eq!(style.layers, vec![ContourLayer::new(2.0, Color::GREEN, 3.0)]);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SceneStyle::from_file(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, IsolineError::Io(_)));
}
