//! Frame loop: advance the field, render the scene, write a PNG.

use std::path::{Path, PathBuf};
use std::time::Instant;

use field_source::{fill_random, Metaballs};
use isoline_common::{IsolineResult, ScalarGrid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::{render_scene, PixmapSurface, SceneStats};
use tracing::{debug, info};

use crate::config::{FieldMode, RenderConfig};

enum FieldState {
    Metaballs(Metaballs),
    Random,
}

/// Totals for a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u32,
    pub segments: usize,
    pub output_dir: PathBuf,
}

pub struct Animation {
    config: RenderConfig,
    grid: ScalarGrid,
    field: FieldState,
    rng: StdRng,
    surface: PixmapSurface,
}

impl Animation {
    pub fn new(config: RenderConfig) -> IsolineResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let grid = ScalarGrid::new(config.rows, config.cols, config.max_threshold)?;
        let field = match config.field {
            FieldMode::Metaballs => FieldState::Metaballs(Metaballs::spawn(
                config.metaballs,
                config.rows,
                config.cols,
                &mut rng,
            )?),
            FieldMode::Random => FieldState::Random,
        };
        let surface = PixmapSurface::new(config.width, config.height)?;

        Ok(Self {
            config,
            grid,
            field,
            rng,
            surface,
        })
    }

    /// Bring the field up to date for `frame`.
    ///
    /// Frame 0 shows the spawned state; later frames step the simulation by
    /// one timestep, or respawn on a respawn frame.
    pub fn advance(&mut self, frame: u32) {
        let respawn = frame > 0
            && self
                .config
                .respawn_every
                .is_some_and(|every| frame % every == 0);

        match &mut self.field {
            FieldState::Metaballs(balls) => {
                if respawn {
                    balls.respawn(&mut self.rng);
                    debug!(frame = frame, "respawned metaballs");
                } else if frame > 0 {
                    balls.step(self.config.dt());
                }
                balls.write_field(&mut self.grid);
            }
            FieldState::Random => fill_random(&mut self.grid, &mut self.rng),
        }
    }

    /// Render the current field onto the surface.
    pub fn render_frame(&mut self) -> IsolineResult<SceneStats> {
        render_scene(&mut self.grid, &mut self.surface, &self.config.style)
    }

    /// Render every frame to `output_dir`.
    pub fn run(&mut self) -> IsolineResult<RunSummary> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let start = Instant::now();
        let mut segments = 0;
        for frame in 0..self.config.frames {
            self.advance(frame);
            let stats = self.render_frame()?;
            segments += stats.total_segments();

            let path = frame_path(&self.config.output_dir, frame);
            self.surface.save_png(&path)?;
            debug!(
                frame = frame,
                segments = stats.total_segments(),
                path = %path.display(),
                "wrote frame"
            );
        }

        info!(
            frames = self.config.frames,
            segments = segments,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "rendered animation"
        );

        Ok(RunSummary {
            frames: self.config.frames,
            segments,
            output_dir: self.config.output_dir.clone(),
        })
    }

    pub fn grid(&self) -> &ScalarGrid {
        &self.grid
    }

    pub fn surface(&self) -> &PixmapSurface {
        &self.surface
    }
}

/// `dir/frame_NNNNN.png`
pub fn frame_path(dir: &Path, frame: u32) -> PathBuf {
    dir.join(format!("frame_{:05}.png", frame))
}
