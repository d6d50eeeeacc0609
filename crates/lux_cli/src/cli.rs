use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lux_render::{OutputFormat, RenderMode};

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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

/// What to produce from the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print vector-arithmetic traces instead of rendering
    Diagnostic,
    /// One ray per pixel, white spheres
    Simple,
    /// 3x3 supersampling with palette colors
    Colored,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Diagnostic => RenderMode::Diagnostic,
            Mode::Simple => RenderMode::Simple,
            Mode::Colored => RenderMode::Colored,
        }
    }
}

/// Image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Ppm,
    Png,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Ppm => OutputFormat::Ppm,
            Format::Png => OutputFormat::Png,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lux", version)]
#[command(about = "Render spheres lit by a single point light")]
pub struct Args {
    /// Scene description file
    pub input: PathBuf,

    /// Output file (image, or text report in diagnostic mode)
    pub output: PathBuf,

    /// Render mode
    #[arg(short, long, value_enum, default_value = "colored")]
    pub mode: Mode,

    /// Image encoding (defaults to the output file extension, then PPM)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    #[arg(long, value_enum, default_value = "warn", help = "Set the logging level")]
    pub log_level: LogLevel,
}

impl Args {
    /// The output format, explicit or inferred from the output path.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .map(OutputFormat::from)
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }
}
