//! Ray-sphere intersection and scene-level hit queries.

use lux_core::Sphere;
use lux_math::{Interval, Ray};

/// Hits at or beyond this distance are ignored by [`nearest_hit`].
pub const MAX_DISTANCE: f32 = 1e30;

/// The nearest intersection of a ray with a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the sphere in the scene
    pub sphere: usize,
    /// Ray parameter of the intersection
    pub t: f32,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Return the first strictly positive ray parameter where `ray` meets
    /// the object, or `None`.
    fn intersect(&self, ray: &Ray) -> Option<f32>;
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);

        // Near root first; both behind the origin means a miss
        [t1, t2]
            .into_iter()
            .find(|&t| Interval::FORWARD.surrounds(t))
    }
}

/// Find the globally nearest hit along `ray` by linear scan.
///
/// On equal distances the sphere listed first wins.
pub fn nearest_hit(spheres: &[Sphere], ray: &Ray) -> Option<Hit> {
    let mut closest = None;
    let mut closest_so_far = MAX_DISTANCE;

    for (index, sphere) in spheres.iter().enumerate() {
        if let Some(t) = sphere.intersect(ray) {
            if t < closest_so_far {
                closest_so_far = t;
                closest = Some(Hit { sphere: index, t });
            }
        }
    }

    closest
}

/// Test whether any sphere except `skip` blocks `ray` strictly inside (0, max_t).
///
/// `ray.direction` must be unit length so that `t` is a world-space distance.
pub fn occluded(spheres: &[Sphere], skip: usize, ray: &Ray, max_t: f32) -> bool {
    let range = Interval::new(0.0, max_t);

    spheres
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != skip)
        .any(|(_, sphere)| sphere.intersect(ray).is_some_and(|t| range.surrounds(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::Vec3;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::white(center, 1.0)
    }

    #[test]
    fn test_sphere_hit_front() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert_eq!(sphere.intersect(&ray), Some(4.0));
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));

        let away = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(sphere.intersect(&away), None);

        let sideways = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(sphere.intersect(&sideways), None);
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::white(Vec3::ZERO, 2.0);

        // Far boundary along the direction
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(sphere.intersect(&ray), Some(2.0));

        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::NEG_X);
        assert_eq!(sphere.intersect(&ray), Some(2.5));
    }

    #[test]
    fn test_never_reports_non_positive_t() {
        let sphere = unit_sphere_at(Vec3::ZERO);

        // Origin on the surface, heading out: near root negative, far root zero
        let grazing = Ray::new(Vec3::X, Vec3::X);
        assert_eq!(sphere.intersect(&grazing), None);

        // Degenerate direction
        let degenerate = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        assert_eq!(sphere.intersect(&degenerate), None);

        for dir in [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z, Vec3::ONE.normalize()] {
            let origin = Vec3::new(0.3, -0.2, 3.0);
            if let Some(t) = sphere.intersect(&Ray::new(origin, dir)) {
                assert!(t > 0.0, "t = {t} for direction {dir}");
            }
        }
    }

    #[test]
    fn test_nearest_hit_is_global() {
        // Far sphere listed first
        let spheres = [
            unit_sphere_at(Vec3::new(0.0, 0.0, -10.0)),
            unit_sphere_at(Vec3::new(0.0, 0.0, -4.0)),
            unit_sphere_at(Vec3::new(0.0, 0.0, -7.0)),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = nearest_hit(&spheres, &ray).unwrap();
        assert_eq!(hit.sphere, 1);
        assert_eq!(hit.t, 3.0);
    }

    #[test]
    fn test_nearest_hit_empty_scene() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(nearest_hit(&[], &ray), None);
    }

    #[test]
    fn test_occluded_skips_self_and_respects_range() {
        let spheres = [
            unit_sphere_at(Vec3::new(0.0, 0.0, -5.0)),
            Sphere::white(Vec3::new(0.0, 0.0, -2.0), 0.5),
        ];
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.999), Vec3::Z);

        // Blocker sits about 1.5 units along the ray
        assert!(occluded(&spheres, 0, &ray, 3.999));
        assert!(!occluded(&spheres, 0, &ray, 1.0));

        // Skipping the blocker leaves nothing in the way
        assert!(!occluded(&spheres, 1, &ray, 3.999));
    }
}
