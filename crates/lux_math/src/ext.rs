//! Small helpers on top of `glam::Vec3`.

use crate::Vec3;

/// Extra vector operations not provided by glam.
pub trait Vec3Ext {
    /// Divide every component by `d`, or return zero when `d` is zero.
    fn div_or_zero(self, d: f32) -> Vec3;

    /// Format as `(x, y, z)` with one decimal place per component.
    fn fmt_tuple(self) -> String;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn div_or_zero(self, d: f32) -> Vec3 {
        if d != 0.0 {
            self / d
        } else {
            Vec3::ZERO
        }
    }

    fn fmt_tuple(self) -> String {
        format!("({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_or_zero() {
        let v = Vec3::new(2.0, 4.0, 6.0);
        assert_eq!(v.div_or_zero(2.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.div_or_zero(0.0), Vec3::ZERO);
    }

    #[test]
    fn test_fmt_tuple() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.3).fmt_tuple(), "(1.0, -2.5, 0.3)");
        assert_eq!(Vec3::ZERO.fmt_tuple(), "(0.0, 0.0, 0.0)");
    }
}
