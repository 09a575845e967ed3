//! 4D vector type.
//!
//! [`Vec4`] is mostly used for homogeneous coordinates: `w = 1` for points,
//! `w = 0` for directions. See [`to_vec3`](crate::to_vec3) and
//! [`to_vec4`](crate::to_vec4) for lifting and dropping `w`.

use num_traits::AsPrimitive;

use crate::vector::impl_vector_ops;
use crate::{Error, Result, Scalar};

/// A 4D vector.
///
/// ```rust
/// use linalg_math::Vec4d;
///
/// let p = Vec4d::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(p[3], 1.0);
/// assert!(p.get(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
    /// W (homogeneous) component
    pub w: T,
}

/// Single precision [`Vec4`].
pub type Vec4f = Vec4<f32>;
/// Double precision [`Vec4`].
pub type Vec4d = Vec4<f64>;

impl<T: Scalar> Vec4<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v, v)
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Converts every component to another scalar kind.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vec4<U>
    where
        T: AsPrimitive<U>,
    {
        Vec4::new(self.x.as_(), self.y.as_(), self.z.as_(), self.w.as_())
    }

    /// Returns the component at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(Error::index_out_of_range(index, 4, "Vec4")),
        }
    }

    /// Overwrites the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => return Err(Error::index_out_of_range(index, 4, "Vec4")),
        }
        Ok(())
    }

    /// Sum of squared components, `w` included.
    #[inline]
    pub fn squared_length(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Euclidean length over all four components.
    #[inline]
    pub fn length(self) -> T {
        self.squared_length().sqrt()
    }

    /// Unit vector in the same direction, or zero for a zero-length vector.
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

    /// True if every component differs from `other` by strictly less than
    /// `epsilon`.
    #[inline]
    pub fn is_approx(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.w - other.w).abs() < epsilon
    }

    /// Every component at the most negative finite value.
    #[inline]
    pub fn min_bounds() -> Self {
        Self::splat(T::lowest())
    }

    /// Every component at the most positive finite value.
    #[inline]
    pub fn max_bounds() -> Self {
        Self::splat(T::highest())
    }
}

impl_vector_ops!(Vec4, "Vec4", 4, 0 => x, 1 => y, 2 => z, 3 => w);
