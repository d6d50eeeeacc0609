//! One render strategy per run mode.

use std::io::Write;

use lux_core::{ColorPolicy, Scene};

use crate::diagnostics::trace_report;
use crate::error::RenderResult;
use crate::output::{write_png, write_ppm, OutputFormat};
use crate::renderer::{render, ImageBuffer, RenderSettings};

/// What a strategy produces for a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// A rendered image
    Image(ImageBuffer),
    /// A plain-text report
    Report(String),
}

impl Frame {
    /// Encode the frame. Reports are written as text whatever the format.
    pub fn write_to<W: Write>(&self, writer: &mut W, format: OutputFormat) -> RenderResult<()> {
        match self {
            Frame::Image(image) => match format {
                OutputFormat::Ppm => write_ppm(image, writer)?,
                OutputFormat::Png => write_png(image, writer)?,
            },
            Frame::Report(text) => {
                if format != OutputFormat::Ppm {
                    log::warn!("Ignoring {:?} output format for a text report", format);
                }
                writer.write_all(text.as_bytes())?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

/// A way of turning a scene into a frame.
pub trait RenderStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// How scene-file colors must be resolved for this strategy.
    fn color_policy(&self) -> ColorPolicy;

    /// Produce the frame for `scene`.
    fn render(&self, scene: &Scene) -> RenderResult<Frame>;
}

/// Prints vector-arithmetic traces instead of rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticReport;

impl RenderStrategy for DiagnosticReport {
    fn name(&self) -> &'static str {
        "diagnostic"
    }

    fn color_policy(&self) -> ColorPolicy {
        ColorPolicy::Monochrome
    }

    fn render(&self, scene: &Scene) -> RenderResult<Frame> {
        Ok(Frame::Report(trace_report(scene)))
    }
}

/// One ray per pixel, shaded toward white.
#[derive(Debug, Clone, Copy)]
pub struct SingleSampleRender {
    settings: RenderSettings,
}

impl Default for SingleSampleRender {
    fn default() -> Self {
        Self {
            settings: RenderSettings::single_sample(),
        }
    }
}

impl RenderStrategy for SingleSampleRender {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn color_policy(&self) -> ColorPolicy {
        ColorPolicy::Monochrome
    }

    fn render(&self, scene: &Scene) -> RenderResult<Frame> {
        render(scene, &self.settings).map(Frame::Image)
    }
}

/// A grid of rays per pixel shaded with sphere colors, box-filtered.
#[derive(Debug, Clone, Copy)]
pub struct SupersampledRender {
    settings: RenderSettings,
}

impl SupersampledRender {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }
}

impl Default for SupersampledRender {
    fn default() -> Self {
        Self::new(RenderSettings::supersampled())
    }
}

impl RenderStrategy for SupersampledRender {
    fn name(&self) -> &'static str {
        "colored"
    }

    fn color_policy(&self) -> ColorPolicy {
        ColorPolicy::Palette
    }

    fn render(&self, scene: &Scene) -> RenderResult<Frame> {
        render(scene, &self.settings).map(Frame::Image)
    }
}
