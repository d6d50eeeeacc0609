//! Pinhole camera for primary ray generation.

use lux_core::View;
use lux_math::{Ray, Vec2, Vec3};

/// Pinhole camera at the origin looking down -Z.
///
/// Pixel (0, 0) is the bottom-left corner of the viewport; y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeCamera {
    pub image_width: u32,
    pub image_height: u32,

    center: Vec3,
    viewport_width: f32,
    viewport_height: f32,
    focal_length: f32,
}

impl PinholeCamera {
    /// Build a camera from the scene view settings.
    pub fn new(view: &View) -> Self {
        Self {
            image_width: view.width,
            image_height: view.height,
            center: Vec3::ZERO,
            viewport_width: view.viewport_width(),
            viewport_height: view.viewport_height,
            focal_length: view.focal_length,
        }
    }

    /// Generate a unit-direction ray through pixel (x, y).
    ///
    /// `offset` is the sample position inside the pixel, each axis in (0, 1).
    pub fn get_ray(&self, x: u32, y: u32, offset: Vec2) -> Ray {
        let px = (x as f32 + offset.x) / self.image_width as f32 * self.viewport_width
            - self.viewport_width / 2.0;
        let py = (y as f32 + offset.y) / self.image_height as f32 * self.viewport_height
            - self.viewport_height / 2.0;

        Ray::normalized(self.center, Vec3::new(px, py, -self.focal_length))
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
}
