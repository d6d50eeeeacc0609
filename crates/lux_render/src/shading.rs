//! Direct lighting: Lambertian term plus a hard shadow test.

use lux_core::{Scene, Sphere};
use lux_math::{Color, Ray};

use crate::hittable::{occluded, Hit};

/// Offset applied along the normal to start shadow rays off the surface.
pub const SHADOW_BIAS: f32 = 0.001;

/// Intensity factor for points that cannot see the light.
pub const SHADOW_ATTENUATION: f32 = 0.1;

/// Base color that the light intensity scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    /// Always shade toward white, ignoring sphere colors
    White,
    /// Use the color of the sphere that was hit
    #[default]
    Surface,
}

impl Tint {
    fn base(self, sphere: &Sphere) -> Color {
        match self {
            Tint::White => Color::ONE,
            Tint::Surface => sphere.color,
        }
    }
}

/// Light intensity in [0, 1] at the point where `ray` meets `hit`.
///
/// # Panics
///
/// Panics if `hit.sphere` is not a valid index into `scene`.
pub fn light_intensity(scene: &Scene, hit: Hit, ray: &Ray) -> f32 {
    let sphere = &scene.spheres()[hit.sphere];
    let light = &scene.light;

    let point = ray.at(hit.t);
    let normal = (point - sphere.center).normalize_or_zero();
    let to_light = light.position - point;

    // Unit direction, so shadow-ray t values are distances
    let shadow_ray = Ray::normalized(point + SHADOW_BIAS * normal, to_light);
    let light_dir = shadow_ray.direction;

    let lambert = normal.dot(light_dir).max(0.0);
    let intensity = (lambert * light.brightness / to_light.length_squared()).min(1.0);

    if occluded(scene.spheres(), hit.sphere, &shadow_ray, to_light.length()) {
        intensity * SHADOW_ATTENUATION
    } else {
        intensity
    }
}

/// Shade a primary-ray hit.
///
/// # Panics
///
/// Panics if `hit.sphere` is not a valid index into `scene`.
pub fn shade(scene: &Scene, hit: Hit, ray: &Ray, tint: Tint) -> Color {
    let base = tint.base(&scene.spheres()[hit.sphere]);
    light_intensity(scene, hit, ray) * base
}
