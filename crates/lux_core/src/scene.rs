//! Scene types for Lux.
//!
//! A scene is a flat list of spheres plus the global parameters the
//! renderer needs: a single point light, a background color, and the
//! view (image size and pinhole camera settings).

use lux_math::{Color, Vec3};

use crate::parser::{SceneError, SceneResult};

/// A sphere primitive with a flat color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// Radius (always > 0 for spheres loaded from a scene file)
    pub radius: f32,

    /// Center in camera space
    pub center: Vec3,

    /// Surface color (RGB, 0-1)
    pub color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            radius,
            center,
            color,
        }
    }

    /// Create a white sphere.
    pub fn white(center: Vec3, radius: f32) -> Self {
        Self::new(center, radius, Color::ONE)
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub brightness: f32,
}

impl Light {
    pub fn new(position: Vec3, brightness: f32) -> Self {
        Self {
            position,
            brightness,
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }
}

/// Output image size and pinhole camera settings.
///
/// The camera sits at the origin looking down -Z. The viewport is a
/// rectangle of height `viewport_height` centered on the -Z axis at
/// distance `focal_length`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub width: u32,
    pub height: u32,
    pub viewport_height: f32,
    pub focal_length: f32,
}

impl View {
    pub fn new(width: u32, height: u32, viewport_height: f32, focal_length: f32) -> Self {
        Self {
            width,
            height,
            viewport_height,
            focal_length,
        }
    }

    /// Image aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Viewport width derived from the image aspect ratio.
    pub fn viewport_width(&self) -> f32 {
        self.viewport_height * self.aspect_ratio()
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(640, 480, 2.0, 1.0)
    }
}

/// A complete scene: spheres, light, background and view.
///
/// Spheres are addressed by index. The renderer reads the scene through
/// a shared reference and never mutates it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Spheres in file order
    spheres: Vec<Sphere>,

    /// Color of rays that hit nothing
    pub background: Color,

    /// The single point light
    pub light: Light,

    /// Image and camera settings
    pub view: View,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(view: View, light: Light, background: Color) -> Self {
        Self {
            spheres: Vec::new(),
            background,
            light,
            view,
        }
    }

    /// Builder-style sphere insertion, handy for tests and demos.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add_sphere(sphere);
        self
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        let index = self.spheres.len();
        self.spheres.push(sphere);
        index
    }

    /// Reserve room for `additional` spheres, reporting allocation failure.
    pub fn try_reserve(&mut self, additional: usize) -> SceneResult<()> {
        self.spheres
            .try_reserve(additional)
            .map_err(|source| SceneError::Allocation {
                what: "spheres",
                source,
            })
    }

    /// Get a sphere by index.
    pub fn sphere(&self, index: usize) -> Option<&Sphere> {
        self.spheres.get(index)
    }

    /// All spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new(View::default(), Light::default(), Color::ZERO);
        assert_eq!(scene.sphere_count(), 0);

        let a = scene.add_sphere(Sphere::white(Vec3::new(0.0, 0.0, -5.0), 1.0));
        let b = scene.add_sphere(Sphere::new(Vec3::X, 0.5, Color::new(1.0, 0.0, 0.0)));

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.sphere(1).map(|s| s.radius), Some(0.5));
        assert!(scene.sphere(2).is_none());
    }

    #[test]
    fn test_growth_preserves_contents() {
        let mut scene = Scene::default();
        for i in 0..100 {
            scene.add_sphere(Sphere::white(Vec3::new(i as f32, 0.0, 0.0), 1.0));
        }

        assert_eq!(scene.sphere_count(), 100);
        for (i, sphere) in scene.spheres().iter().enumerate() {
            assert_eq!(sphere.center.x, i as f32);
        }
    }

    #[test]
    fn test_view_viewport_width() {
        let view = View::new(200, 100, 2.0, 1.0);
        assert_eq!(view.aspect_ratio(), 2.0);
        assert_eq!(view.viewport_width(), 4.0);
    }

    #[test]
    fn test_try_reserve() {
        let mut scene = Scene::default();
        assert!(scene.try_reserve(16).is_ok());
        assert!(scene.try_reserve(usize::MAX).is_err());
    }
}
