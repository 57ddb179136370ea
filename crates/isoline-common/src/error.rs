//! Error types for isoline extraction and rendering.

use thiserror::Error;

/// Result type alias using IsolineError.
pub type IsolineResult<T> = Result<T, IsolineError>;

/// Errors raised while building grids, surfaces and scene configuration.
///
/// Runtime degeneracies inside a frame (flat edges, zero thresholds) are not
/// errors; they are absorbed by the interpolator.
#[derive(Debug, Error)]
pub enum IsolineError {
    /// The grid needs at least one cell.
    #[error("grid must be at least 2x2 samples, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A threshold or threshold bound was rejected.
    #[error("invalid threshold {value}: {message}")]
    InvalidThreshold { value: f32, message: String },

    /// A sample buffer does not match the grid dimensions.
    #[error("field has {actual} samples, expected {expected}")]
    FieldSizeMismatch { expected: usize, actual: usize },

    /// Scene or layer configuration is invalid.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Drawing surface or image encoding failure.
    #[error("rendering failed: {0}")]
    RenderError(String),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(String),
}

impl IsolineError {
    /// Create an InvalidThreshold error.
    pub fn invalid_threshold(value: f32, message: impl Into<String>) -> Self {
        Self::InvalidThreshold {
            value,
            message: message.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a RenderError.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::RenderError(msg.into())
    }
}

impl From<std::io::Error> for IsolineError {
    fn from(err: std::io::Error) -> Self {
        IsolineError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for IsolineError {
    fn from(err: serde_yaml::Error) -> Self {
        IsolineError::InvalidConfig(format!("YAML error: {}", err))
    }
}
