//! Scene style configuration: background, contour layers and overlay.
//!
//! Loaded from YAML, e.g.
//!
//! ```yaml
//! background: black
//! placement: interpolated
//! grid_overlay: false
//! layers:
//!   - threshold: 1.0
//!     color: raywhite
//!     line_width: 1.0
//!   - threshold: 1.4
//!     color: "#00e430"
//!     line_width: 2.0
//! ```

use std::path::Path;

use isoline_common::{Color, IsolineError, IsolineResult};
use serde::Deserialize;

use crate::contour::VertexPlacement;
use crate::overlay::OverlayStyle;

/// One isoline drawn per frame.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ContourLayer {
    /// Isovalue extracted for this layer.
    pub threshold: f32,
    pub color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f32,
}

fn default_line_width() -> f32 {
    1.0
}

impl ContourLayer {
    pub fn new(threshold: f32, color: Color, line_width: f32) -> Self {
        Self {
            threshold,
            color,
            line_width,
        }
    }
}

/// Everything needed to draw a frame besides the field itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    pub background: Color,
    pub placement: VertexPlacement,
    pub grid_overlay: bool,
    pub overlay: OverlayStyle,
    /// Drawn in order, later layers on top.
    pub layers: Vec<ContourLayer>,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            placement: VertexPlacement::Interpolated,
            grid_overlay: false,
            overlay: OverlayStyle::default(),
            layers: vec![
                ContourLayer::new(1.0, Color::RAY_WHITE, 1.0),
                ContourLayer::new(1.4, Color::GREEN, 2.0),
            ],
        }
    }
}

impl SceneStyle {
    /// Parse and validate a YAML scene style.
    pub fn from_yaml(yaml: &str) -> IsolineResult<Self> {
        let style: SceneStyle = serde_yaml::from_str(yaml)?;
        style.validate()?;
        Ok(style)
    }

    /// Load and validate a YAML scene style from a file.
    pub fn from_file(path: impl AsRef<Path>) -> IsolineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> IsolineResult<()> {
        if self.layers.is_empty() {
            return Err(IsolineError::invalid_config("at least one contour layer is required"));
        }

        for (i, layer) in self.layers.iter().enumerate() {
            if !layer.threshold.is_finite() {
                return Err(IsolineError::invalid_config(format!(
                    "layer {}: threshold must be finite, got {}",
                    i, layer.threshold
                )));
            }
            if !(layer.line_width.is_finite() && layer.line_width > 0.0) {
                return Err(IsolineError::invalid_config(format!(
                    "layer {}: line width must be positive, got {}",
                    i, layer.line_width
                )));
            }
        }

        let radius = self.overlay.marker_radius;
        if self.grid_overlay && (radius.is_nan() || radius < 0.0) {
            return Err(IsolineError::invalid_config("overlay marker radius must not be negative"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layers() {
        let style = SceneStyle::default();
        assert_eq!(style.layers.len(), 2);
        assert_eq!(style.layers[0].threshold, 1.0);
        assert_eq!(style.layers[1].line_width, 2.0);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let style = SceneStyle::from_yaml(
            "grid_overlay: true\nplacement: midpoint\nlayers:\n  - threshold: 3.5\n    color: [255, 0, 0]\n",
        )
        .unwrap();
        assert!(style.grid_overlay);
        assert_eq!(style.placement, VertexPlacement::Midpoint);
        assert_eq!(style.background, Color::BLACK);
        assert_eq!(style.layers, vec![ContourLayer::new(3.5, Color::rgb(255, 0, 0), 1.0)]);
    }

    #[test]
    fn test_from_yaml_rejects_empty_layers() {
        assert!(SceneStyle::from_yaml("layers: []\n").is_err());
    }

    #[test]
    fn test_from_yaml_rejects_bad_width() {
        let yaml = "layers:\n  - threshold: 1.0\n    color: white\n    line_width: 0\n";
        let err = SceneStyle::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("line width"));
    }

    #[test]
    fn test_from_yaml_rejects_bad_color() {
        let yaml = "layers:\n  - threshold: 1.0\n    color: \"#12\"\n";
        assert!(matches!(
            SceneStyle::from_yaml(yaml),
            Err(IsolineError::InvalidConfig(_))
        ));
    }
}
