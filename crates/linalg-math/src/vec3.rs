//! 3D vector type.
//!
//! [`Vec3`] holds positions, directions and normals. It is generic over the
//! [`Scalar`] kind; [`Vec3f`] and [`Vec3d`] are the usual instantiations.
//!
//! # Usage
//!
//! ```rust
//! use linalg_math::Vec3;
//!
//! let a = Vec3::new(1.0, 0.0, 0.0);
//! let b = Vec3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vec3::new(0.0, 0.0, 1.0));
//! ```

use num_traits::AsPrimitive;

use crate::vector::impl_vector_ops;
use crate::{Error, Result, Scalar};

/// A 3D vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, the checked [`get`](Vec3::get) /
/// [`set`](Vec3::set) pair, or index `[0]`, `[1]`, `[2]` (panics when out of
/// range).
///
/// # Example
///
/// ```rust
/// use linalg_math::Vec3d;
///
/// let v = Vec3d::new(0.5, 1.5, 2.5);
/// assert_eq!(v.y, 1.5);
/// assert_eq!(v[1], 1.5);
/// assert_eq!(v.get(1).unwrap(), 1.5);
/// assert!(v.get(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

/// Single precision [`Vec3`].
pub type Vec3f = Vec3<f32>;
/// Double precision [`Vec3`].
pub type Vec3d = Vec3<f64>;

impl<T: Scalar> Vec3<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// ```rust
    /// use linalg_math::Vec3;
    ///
    /// assert_eq!(Vec3::splat(4.0), Vec3::new(4.0, 4.0, 4.0));
    /// ```
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// The origin (0, 0, 0).
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts every component to another scalar kind.
    ///
    /// ```rust
    /// use linalg_math::{Vec3d, Vec3f};
    ///
    /// let v = Vec3f::new(1.5, 2.5, 3.5).cast::<f64>();
    /// assert_eq!(v, Vec3d::new(1.5, 2.5, 3.5));
    /// ```
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vec3<U>
    where
        T: AsPrimitive<U>,
    {
        Vec3::new(self.x.as_(), self.y.as_(), self.z.as_())
    }

    /// Returns the component at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(Error::index_out_of_range(index, 3, "Vec3")),
        }
    }

    /// Overwrites the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(Error::index_out_of_range(index, 3, "Vec3")),
        }
        Ok(())
    }

    /// Sum of squared components.
    #[inline]
    pub fn squared_length(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> T {
        self.squared_length().sqrt()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A zero-length vector yields the zero vector instead of NaNs.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > T::zero() {
            self / len
        } else {
            Self::zero()
        }
    }

    /// Normalizes in place. Leaves a zero-length vector unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > T::zero() {
            *self /= len;
        }
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Component-wise reciprocal. Zero components become infinite.
    #[inline]
    pub fn cwise_inverse(self) -> Self {
        Self::new(self.x.recip(), self.y.recip(), self.z.recip())
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_value(self) -> T {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_value(self) -> T {
        self.x.max(self.y).max(self.z)
    }

    /// True if every component differs from `other` by strictly less than
    /// `epsilon`.
    #[inline]
    pub fn is_approx(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    /// Every component at the most negative finite value.
    ///
    /// Seed for bounding box accumulation with `cwise_max`.
    #[inline]
    pub fn min_bounds() -> Self {
        Self::splat(T::lowest())
    }

    /// Every component at the most positive finite value.
    ///
    /// Seed for bounding box accumulation with `cwise_min`.
    #[inline]
    pub fn max_bounds() -> Self {
        Self::splat(T::highest())
    }
}

impl_vector_ops!(Vec3, "Vec3", 3, 0 => x, 1 => y, 2 => z);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec3_default() {
        let v = Vec3d::default();
        assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(v, Vec3::zero());
    }

    #[test]
    fn test_vec3_splat() {
        let v = Vec3d::splat(2.5);
        assert_eq!(v, Vec3::new(2.5, 2.5, 2.5));
    }

    #[test]
    fn test_vec3_cast() {
        let d = Vec3d::new(1.0, 2.0, 3.0);
        let f: Vec3f = d.cast();
        assert_eq!(f, Vec3f::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Vec3d::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
        assert_eq!(v[2], v.z);

        v[1] = 8.0;
        assert_eq!(v.y, 8.0);
        v.set(2, 9.0).unwrap();
        assert_eq!(v.z, 9.0);
        assert_eq!(v.get(0).unwrap(), 1.0);
    }

    #[test]
    fn test_vec3_index_out_of_range() {
        let mut v = Vec3d::zero();
        assert!(v.get(3).unwrap_err().is_index_error());
        assert!(v.set(3, 1.0).is_err());
        assert_eq!(v, Vec3d::zero());
    }

    #[test]
    #[should_panic(expected = "out of range for Vec3")]
    fn test_vec3_index_panics() {
        let v = Vec3d::zero();
        std::hint::black_box(v[3]);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3d::new(1.0, 2.0, 3.0);
        let b = Vec3d::new(4.0, 5.0, 6.0);

        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_vec3_assign_ops() {
        let mut v = Vec3d::new(1.0, 2.0, 3.0);
        v += Vec3::splat(1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v *= 3.0;
        assert_eq!(v, Vec3::new(0.0, 3.0, 6.0));
        v /= 3.0;
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_vec3_div_by_zero() {
        let v = Vec3d::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_vec3_length() {
        let v = Vec3d::new(2.0, 3.0, 6.0);
        assert_eq!(v.squared_length(), 49.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3d::new(3.0, 0.0, 4.0);
        let n = v.normalized();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert!(n.is_approx(&Vec3::new(0.6, 0.0, 0.8), 1e-12));

        let mut m = v;
        m.normalize();
        assert_eq!(m, n);
    }

    #[test]
    fn test_vec3_normalize_zero() {
        assert_eq!(Vec3d::zero().normalized(), Vec3d::zero());
        let mut v = Vec3d::zero();
        v.normalize();
        assert_eq!(v, Vec3d::zero());
    }

    #[test]
    fn test_vec3_cross() {
        let x = Vec3d::new(1.0, 0.0, 0.0);
        let y = Vec3d::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_vec3_cwise_inverse() {
        let v = Vec3d::new(2.0, 4.0, -0.5);
        assert_eq!(v.cwise_inverse(), Vec3::new(0.5, 0.25, -2.0));
        assert_eq!(Vec3d::new(0.0, 1.0, 1.0).cwise_inverse().x, f64::INFINITY);
    }

    #[test]
    fn test_vec3_min_max_value() {
        let v = Vec3d::new(3.0, -1.0, 2.0);
        assert_eq!(v.min_value(), -1.0);
        assert_eq!(v.max_value(), 3.0);
    }

    #[test]
    fn test_vec3_is_approx_strict() {
        let a = Vec3d::new(1.0, 2.0, 3.0);
        let b = Vec3d::new(1.0, 2.0, 3.5);
        assert!(a.is_approx(&b, 0.6));
        assert!(!a.is_approx(&b, 0.5));
    }

    #[test]
    fn test_vec3_bounds() {
        let mut lo = Vec3d::max_bounds();
        let mut hi = Vec3d::min_bounds();
        for p in [Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 5.0, 0.0)] {
            lo = lo.cwise_min(p);
            hi = hi.cwise_max(p);
        }
        assert_eq!(lo, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(hi, Vec3::new(1.0, 5.0, 3.0));
        assert_eq!(Vec3f::min_bounds().x, f32::MIN);
    }

    #[test]
    fn test_vec3_display() {
        let v = Vec3d::new(1.0, 2.5, -3.0);
        assert_eq!(v.to_string(), "Vec3(1, 2.5, -3)");
    }

    #[test]
    fn test_vec3_array_conversions() {
        let v: Vec3d = [1.0, 2.0, 3.0].into();
        let a: [f64; 3] = v.into();
        assert_eq!(a, v.to_array());
        assert_eq!(Vec3::from_array(a), v);
    }
}
