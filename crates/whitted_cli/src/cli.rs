use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use whitted_core::RenderSettings;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "whitted")]
#[command(about = "Render a JSON scene with a recursive Whitted ray tracer")]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Image width in pixels (overrides the scene file)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (overrides the scene file)
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum reflection/refraction depth (overrides the scene file)
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Exposure multiplier applied before gamma (overrides the scene file)
    #[arg(long)]
    pub exposure: Option<f32>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command-line overrides on top of the scene file's settings.
    pub fn apply_overrides(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(exposure) = self.exposure {
            settings.exposure = exposure;
        }
    }
}
