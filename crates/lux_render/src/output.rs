//! Image encoders for rendered frames.
//!
//! - PPM: plain-text `P3` with one `R G B ` triplet per pixel
//! - PNG: 8-bit RGB through the `image` crate

use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use lux_math::{Color, Interval};

use crate::error::RenderResult;
use crate::renderer::ImageBuffer;

/// Encoding used for image frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// ASCII `P3` pixmap
    #[default]
    Ppm,
    /// 8-bit RGB PNG
    Png,
}

impl OutputFormat {
    /// Pick a format from the file extension, defaulting to PPM.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => OutputFormat::Png,
            _ => OutputFormat::Ppm,
        }
    }
}

/// Convert a color to 8-bit RGB.
///
/// Channels are scaled by 255, clamped to [0, 255] and truncated.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let range = Interval::new(0.0, 255.0);
    let channel = |c: f32| range.clamp(c * 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Write `image` as a plain-text PPM.
pub fn write_ppm<W: Write + ?Sized>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "P3\n{} {}\n255\n", image.width, image.height)?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb(*color);
        write!(writer, "{r} {g} {b} ")?;
    }

    writer.flush()
}

/// Write `image` as an 8-bit RGB PNG.
pub fn write_png<W: Write>(image: &ImageBuffer, writer: W) -> RenderResult<()> {
    let bytes = image.to_rgb8();
    PngEncoder::new(writer).write_image(&bytes, image.width, image.height, ColorType::Rgb8)?;
    Ok(())
}
