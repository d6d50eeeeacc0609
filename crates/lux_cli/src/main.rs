mod cli;
mod logger;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lux_core::load_scene;
use lux_render::RenderMode;

use crate::cli::Args;
use crate::logger::init_logger;

fn run(args: &Args) -> Result<()> {
    let strategy = RenderMode::from(args.mode).strategy();

    let scene = load_scene(&args.input, strategy.color_policy())
        .with_context(|| format!("failed to load scene {}", args.input.display()))?;

    let start = Instant::now();
    let frame = strategy
        .render(&scene)
        .with_context(|| format!("{} render failed", strategy.name()))?;
    log::info!("{} pass finished in {:?}", strategy.name(), start.elapsed());

    // Encode fully in memory so a failure never leaves a partial file
    let mut bytes = Vec::new();
    frame
        .write_to(&mut bytes, args.output_format())
        .context("failed to encode output")?;

    write_output(&args.output, &bytes)?;
    log::info!("Saved {} bytes to {}", bytes.len(), args.output.display());

    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;

    if let Err(err) = file.write_all(bytes).and_then(|()| file.flush()) {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            log::warn!("Could not remove partial output {}: {}", path.display(), remove_err);
        }
        return Err(err).with_context(|| format!("failed to write output file {}", path.display()));
    }

    Ok(())
}

/// Whether an argument-parsing outcome should exit nonzero.
///
/// Help and version text count as success only once they were printed.
/// Stderr may be the stream that failed, so the exit code is the only report.
fn parse_failed(use_stderr: bool, printed: std::io::Result<()>) -> bool {
    use_stderr || printed.is_err()
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too
            let printed = err.print();
            return if parse_failed(err.use_stderr(), printed) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logger(args.log_level.into());
    log::info!("Starting Lux");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
