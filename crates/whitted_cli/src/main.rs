use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use whitted_core::load_scene;
use whitted_renderer::{render_with_progress, Camera, Scene};

mod cli;

use cli::Args;

/// Initialize the logger with the specified level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut description = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    args.apply_overrides(&mut description.settings);

    let scene = Scene::from_description(&description).context("Failed to build scene")?;
    let settings = &description.settings;
    let camera = Camera::from_description(&description.camera, settings.aspect_ratio());

    let image = render_with_progress(&camera, &scene, settings, |result, image| {
        let done = result.chunk.y + result.chunk.height;
        log::info!(
            "{:3}% ({}/{} rows)",
            done * 100 / image.height,
            done,
            image.height
        );
    });

    image
        .save_png(&args.output, settings.exposure)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
