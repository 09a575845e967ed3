//! Reflection and refraction of direction vectors.
//!
//! Normals are expected to be unit length and are not renormalized.

use tracing::trace;

use crate::{Scalar, Vec3, Vector};

/// Mirrors `incident` about the plane with normal `normal`.
#[inline]
pub fn reflect<T: Scalar>(incident: Vec3<T>, normal: Vec3<T>) -> Vec3<T> {
    incident - normal * (T::from_literal(2.0) * incident.dot(normal))
}

/// Bends `incident` through a surface with normal `normal` by Snell's law.
///
/// `eta` is the ratio of refractive indices, incident side over transmitted
/// side. Under total internal reflection there is no transmitted ray and the
/// reflected direction is returned instead.
///
/// ```rust
/// use linalg_math::{refract, Vec3d};
///
/// let i = Vec3d::new(0.0, 0.0, -1.0);
/// let n = Vec3d::new(0.0, 0.0, 1.0);
/// assert_eq!(refract(i, n, 1.0), i);
/// ```
pub fn refract<T: Scalar>(incident: Vec3<T>, normal: Vec3<T>, eta: T) -> Vec3<T> {
    let cos_i = -normal.dot(incident);
    let sin2_t = eta * eta * (T::one() - cos_i * cos_i);
    if sin2_t > T::one() {
        trace!(sin2_t = sin2_t.as_f64(), "total internal reflection, reflecting");
        return reflect(incident, normal);
    }
    let cos_t = (T::one() - sin2_t).sqrt();
    incident * eta + normal * (eta * cos_i - cos_t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3d;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reflect() {
        let n = Vec3d::new(0.0, 1.0, 0.0);
        let r = reflect(Vec3d::new(1.0, -1.0, 0.0), n);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));

        // Grazing rays are unchanged.
        assert_eq!(reflect(Vec3d::new(1.0, 0.0, 0.0), n), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_refract_identity() {
        let i = Vec3d::new(0.0, 0.0, -1.0);
        let n = Vec3d::new(0.0, 0.0, 1.0);
        assert_eq!(refract(i, n, 1.0), i);

        let oblique = Vec3d::new(0.6, 0.0, -0.8);
        assert!(refract(oblique, n, 1.0).is_approx(&oblique, 1e-12));
    }

    #[test]
    fn test_refract_snell() {
        // Air into glass at 45 degrees.
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let i = Vec3d::new(s, 0.0, -s);
        let n = Vec3d::new(0.0, 0.0, 1.0);
        let eta = 1.0 / 1.5;
        let t = refract(i, n, eta);

        assert_abs_diff_eq!(t.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.x, s * eta, epsilon = 1e-12);
        assert!(t.z < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        let angle = 60f64.to_radians();
        let i = Vec3d::new(0.0, angle.sin(), -angle.cos()).normalized();
        let n = Vec3d::new(0.0, 0.0, 1.0);
        let t = refract(i, n, 1.5);
        assert!(t.is_approx(&reflect(i, n), 1e-9));
        assert!(t.x.is_finite() && t.y.is_finite() && t.z.is_finite());
    }

    #[test]
    fn test_refract_f32() {
        let i = Vec3::new(0.0f32, 0.0, -1.0);
        let n = Vec3::new(0.0f32, 0.0, 1.0);
        assert_eq!(refract(i, n, 1.0), i);
    }
}
