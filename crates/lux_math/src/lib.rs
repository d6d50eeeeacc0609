// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod ext;
mod interval;
mod ray;

pub use ext::Vec3Ext;
pub use interval::Interval;
pub use ray::Ray;

/// RGB color with channels conceptually in [0, 1].
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_distance_helpers() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.length(), 5.0);
    }
}
