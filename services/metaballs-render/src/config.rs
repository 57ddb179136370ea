//! Command-line and environment configuration.
//!
//! Every flag can also be set through an `ISOLINES_*` environment variable,
//! and a `.env` file is read before parsing. Scene styling (layers, colors,
//! overlay) comes from an optional YAML file; `--grid-overlay` and
//! `--midpoint` switch those features on regardless of the file.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use field_source::MetaballConfig;
use isoline_common::{IsolineError, IsolineResult};
use renderer::{SceneStyle, VertexPlacement};
use tracing::Level;

/// Where each frame's samples come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldMode {
    /// Bouncing metaballs
    Metaballs,
    /// Fresh random integers every frame
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "metaballs-render")]
#[command(about = "Render metaball isolines to PNG frames")]
pub struct Args {
    /// Sample rows in the scalar grid
    #[arg(long, env = "ISOLINES_ROWS", default_value = "100")]
    pub rows: usize,

    /// Sample columns in the scalar grid
    #[arg(long, env = "ISOLINES_COLS", default_value = "133")]
    pub cols: usize,

    /// Frame width in pixels
    #[arg(long, env = "ISOLINES_WIDTH", default_value = "1200")]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, env = "ISOLINES_HEIGHT", default_value = "900")]
    pub height: u32,

    /// Number of frames to render
    #[arg(short, long, env = "ISOLINES_FRAMES", default_value = "120")]
    pub frames: u32,

    /// Simulation frames per second (timestep is 1 / fps)
    #[arg(long, env = "ISOLINES_FPS", default_value = "60")]
    pub fps: f32,

    /// Field source
    #[arg(long, env = "ISOLINES_FIELD", value_enum, default_value = "metaballs")]
    pub field: FieldMode,

    /// Number of metaballs
    #[arg(long, env = "ISOLINES_BALLS", default_value = "5")]
    pub balls: usize,

    /// Upper bound for random fills; the default threshold is half of it
    #[arg(long, env = "ISOLINES_MAX_THRESHOLD", default_value = "16")]
    pub max_threshold: f32,

    /// Seed for reproducible runs (random when omitted)
    #[arg(long, env = "ISOLINES_SEED")]
    pub seed: Option<u64>,

    /// Respawn every ball every N frames
    #[arg(long, env = "ISOLINES_RESPAWN_EVERY")]
    pub respawn_every: Option<u32>,

    /// Directory for frame_NNNNN.png files
    #[arg(short, long, env = "ISOLINES_OUTPUT_DIR", default_value = "frames")]
    pub output_dir: PathBuf,

    /// YAML scene style (background, layers, overlay)
    #[arg(long, env = "ISOLINES_SCENE")]
    pub scene: Option<PathBuf>,

    /// Draw grid lines and sample markers
    #[arg(long, env = "ISOLINES_GRID_OVERLAY")]
    pub grid_overlay: bool,

    /// Place contour vertices at edge midpoints instead of interpolating
    #[arg(long, env = "ISOLINES_MIDPOINT")]
    pub midpoint: bool,

    /// Log level
    #[arg(long, env = "ISOLINES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "ISOLINES_LOG_JSON")]
    pub log_json: bool,
}

/// Map a level name to a tracing level, defaulting to INFO.
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Fully resolved settings for one rendering run.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub rows: usize,
    pub cols: usize,
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub fps: f32,
    pub max_threshold: f32,
    pub field: FieldMode,
    pub metaballs: MetaballConfig,
    pub seed: Option<u64>,
    pub respawn_every: Option<u32>,
    pub output_dir: PathBuf,
    pub style: SceneStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 133,
            width: 1200,
            height: 900,
            frames: 120,
            fps: 60.0,
            max_threshold: 16.0,
            field: FieldMode::Metaballs,
            metaballs: MetaballConfig::default(),
            seed: None,
            respawn_every: None,
            output_dir: PathBuf::from("frames"),
            style: SceneStyle::default(),
        }
    }
}

impl RenderConfig {
    /// Resolve CLI arguments, loading the scene file if one is given.
    pub fn from_args(args: &Args) -> IsolineResult<Self> {
        let mut style = match &args.scene {
            Some(path) => load_scene(path)?,
            None => SceneStyle::default(),
        };
        if args.grid_overlay {
            style.grid_overlay = true;
        }
        if args.midpoint {
            style.placement = VertexPlacement::Midpoint;
        }

        let config = Self {
            rows: args.rows,
            cols: args.cols,
            width: args.width,
            height: args.height,
            frames: args.frames,
            fps: args.fps,
            max_threshold: args.max_threshold,
            field: args.field,
            metaballs: MetaballConfig {
                count: args.balls,
                ..MetaballConfig::default()
            },
            seed: args.seed,
            respawn_every: args.respawn_every,
            output_dir: args.output_dir.clone(),
            style,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> IsolineResult<()> {
        if self.rows < 2 || self.cols < 2 {
            return Err(IsolineError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(IsolineError::invalid_config(format!(
                "frame size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.frames == 0 {
            return Err(IsolineError::invalid_config("at least one frame is required"));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(IsolineError::invalid_config(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        if !(self.max_threshold.is_finite() && self.max_threshold > 0.0) {
            return Err(IsolineError::invalid_threshold(
                self.max_threshold,
                "max threshold must be positive and finite",
            ));
        }
        if self.respawn_every == Some(0) {
            return Err(IsolineError::invalid_config("respawn interval must be at least 1 frame"));
        }
        self.metaballs.validate()?;
        self.style.validate()
    }

    /// Simulation timestep in seconds.
    pub fn dt(&self) -> f32 {
        1.0 / self.fps
    }
}

fn load_scene(path: &Path) -> IsolineResult<SceneStyle> {
    SceneStyle::from_file(path).map_err(|e| match e {
        IsolineError::Io(msg) => IsolineError::Io(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}
