//! Free-function algebra over the vector and matrix types.
//!
//! The component-wise helpers are generic over [`Vector`], so the same call
//! works for every arity:
//!
//! ```rust
//! use linalg_math::{cwise_clamp, dot, Vec2, Vec3};
//!
//! assert_eq!(dot(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)), 11.0);
//!
//! let v = cwise_clamp(Vec3::new(-1.0, 0.5, 2.0), Vec3::splat(0.0), Vec3::splat(1.0));
//! assert_eq!(v, Vec3::new(0.0, 0.5, 1.0));
//! ```

use crate::{Mat3, Scalar, Vec3, Vec4, Vector};

/// Drops the `w` component.
#[inline]
pub fn to_vec3<T: Scalar>(v: Vec4<T>) -> Vec3<T> {
    Vec3::new(v.x, v.y, v.z)
}

/// Lifts a point into homogeneous coordinates (`w = 1`).
#[inline]
pub fn to_vec4<T: Scalar>(v: Vec3<T>) -> Vec4<T> {
    Vec4::new(v.x, v.y, v.z, T::one())
}

impl<T: Scalar> From<Vec4<T>> for Vec3<T> {
    #[inline]
    fn from(v: Vec4<T>) -> Self {
        to_vec3(v)
    }
}

impl<T: Scalar> From<Vec3<T>> for Vec4<T> {
    #[inline]
    fn from(v: Vec3<T>) -> Self {
        to_vec4(v)
    }
}

/// Dot product.
#[inline]
pub fn dot<V: Vector>(a: V, b: V) -> V::Scalar {
    a.dot(b)
}

/// Component-wise minimum. A NaN component loses to a number.
#[inline]
pub fn cwise_min<V: Vector>(a: V, b: V) -> V {
    a.cwise_min(b)
}

/// Component-wise maximum. A NaN component loses to a number.
#[inline]
pub fn cwise_max<V: Vector>(a: V, b: V) -> V {
    a.cwise_max(b)
}

/// Component-wise product.
#[inline]
pub fn cwise_product<V: Vector>(a: V, b: V) -> V {
    a.cwise_product(b)
}

/// Clamps each component of `v` into `[lo, hi]`.
///
/// Applies the lower bound first, so where `lo > hi` the result is `hi`.
#[inline]
pub fn cwise_clamp<V: Vector>(v: V, lo: V, hi: V) -> V {
    cwise_min(cwise_max(v, lo), hi)
}

/// Rotation by Euler angles in radians, composed as `Rz * Ry * Rx`.
///
/// Applied to a column vector, the X rotation happens first and Z last.
pub fn rotation_matrix<T: Scalar>(x_angle: T, y_angle: T, z_angle: T) -> Mat3<T> {
    let (sx, cx) = x_angle.sin_cos();
    let (sy, cy) = y_angle.sin_cos();
    let (sz, cz) = z_angle.sin_cos();
    let (o, z) = (T::one(), T::zero());

    let rx = Mat3::from_rows([[o, z, z], [z, cx, -sx], [z, sx, cx]]);
    let ry = Mat3::from_rows([[cy, z, sy], [z, o, z], [-sy, z, cy]]);
    let rz = Mat3::from_rows([[cz, -sz, z], [sz, cz, z], [z, z, o]]);

    rz * ry * rx
}
