//! Metaball isoline renderer.
//!
//! Simulates bouncing metaballs (or a random field) on a scalar grid,
//! extracts isolines with marching squares at each configured threshold and
//! writes every frame as a PNG.

mod animation;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use animation::Animation;
use config::{parse_level, Args, RenderConfig};

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json)?;

    info!("Starting metaballs renderer");

    let config = RenderConfig::from_args(&args).context("invalid configuration")?;
    info!(
        rows = config.rows,
        cols = config.cols,
        width = config.width,
        height = config.height,
        frames = config.frames,
        fps = config.fps,
        field = ?config.field,
        layers = config.style.layers.len(),
        seed = ?config.seed,
        "Configuration loaded"
    );

    let mut animation = Animation::new(config).context("failed to set up animation")?;
    let summary = animation.run().context("failed to render frames")?;

    info!(
        frames = summary.frames,
        segments = summary.segments,
        output_dir = %summary.output_dir.display(),
        "Done"
    );
    Ok(())
}

fn init_tracing(level: &str, json: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(parse_level(level))
        .with_target(true);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
