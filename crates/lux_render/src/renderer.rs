//! Core render loop.
//!
//! Implements direct-lighting ray tracing with:
//! - Nearest-hit resolution by linear scan
//! - Lambertian shading with hard shadows
//! - Anti-aliasing via a regular sub-pixel grid and a box filter

use lux_core::Scene;
use lux_math::{Color, Ray};

use crate::camera::PinholeCamera;
use crate::error::{RenderError, RenderResult};
use crate::hittable::nearest_hit;
use crate::sampler::SampleGrid;
use crate::shading::{shade, Tint};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderSettings {
    /// Sub-pixel sample grid
    pub grid: SampleGrid,
    /// Base color the light intensity scales
    pub tint: Tint,
}

impl RenderSettings {
    /// One white-tinted sample per pixel.
    pub fn single_sample() -> Self {
        Self {
            grid: SampleGrid::CENTER,
            tint: Tint::White,
        }
    }

    /// 3 x 3 samples per pixel using sphere colors.
    pub fn supersampled() -> Self {
        Self {
            grid: SampleGrid::SUPERSAMPLE,
            tint: Tint::Surface,
        }
    }

    /// Set the sample grid.
    pub fn with_grid(mut self, grid: SampleGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Set the tint.
    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }
}

/// Compute the color seen by a primary ray, or `None` if it hits nothing.
pub fn trace(scene: &Scene, ray: &Ray, tint: Tint) -> Option<Color> {
    nearest_hit(scene.spheres(), ray).map(|hit| shade(scene, hit, ray, tint))
}

/// Render a single pixel, averaging every sample of the grid.
///
/// Samples that miss contribute the background. A pixel whose samples all
/// miss is exactly the background color.
pub fn render_pixel(
    scene: &Scene,
    camera: &PinholeCamera,
    x: u32,
    y: u32,
    settings: &RenderSettings,
) -> Color {
    let mut lit = Color::ZERO;
    let mut misses = 0u32;

    for offset in settings.grid.offsets() {
        let ray = camera.get_ray(x, y, offset);
        match trace(scene, &ray, settings.tint) {
            Some(color) => lit += color,
            None => misses += 1,
        }
    }

    let samples = settings.grid.sample_count() as f32;
    lit / samples + scene.background * (misses as f32 / samples)
}

/// Image buffer for storing render output.
///
/// Rows are stored top to bottom, which is also the output emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    ///
    /// Fails instead of aborting when the pixel storage cannot be reserved.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let too_large = || RenderError::Allocation { width, height };
        let count = (width as usize).checked_mul(height as usize).ok_or_else(too_large)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(count).map_err(|_| too_large())?;
        pixels.resize(count, Color::ZERO);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the pixel at column x, row `row` (row 0 is the top).
    pub fn get(&self, x: u32, row: u32) -> Color {
        self.pixels[self.index(x, row)]
    }

    /// Set the pixel at column x, row `row` (row 0 is the top).
    pub fn set(&mut self, x: u32, row: u32, color: Color) {
        let index = self.index(x, row);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes in storage order.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&crate::output::color_to_rgb(*color));
        }
        bytes
    }

    fn index(&self, x: u32, row: u32) -> usize {
        row as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer.
///
/// Camera rows are scanned from y = height - 1 down to 0, left to right.
pub fn render(scene: &Scene, settings: &RenderSettings) -> RenderResult<ImageBuffer> {
    let camera = PinholeCamera::new(&scene.view);
    let (width, height) = (camera.image_width, camera.image_height);
    let mut image = ImageBuffer::new(width, height)?;

    log::debug!(
        "Rendering {}x{} with {} sample(s) per pixel against {} sphere(s)",
        width,
        height,
        settings.grid.sample_count(),
        scene.sphere_count()
    );

    for y in (0..height).rev() {
        let row = height - 1 - y;
        for x in 0..width {
            let color = render_pixel(scene, &camera, x, y, settings);
            image.set(x, row, color);
        }
    }

    Ok(image)
}
