//! 2D vector type.

use num_traits::AsPrimitive;

use crate::vector::impl_vector_ops;
use crate::{Error, Result, Scalar};

/// A 2D vector.
///
/// ```rust
/// use linalg_math::Vec2d;
///
/// let v = Vec2d::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec2<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
}

/// Single precision [`Vec2`].
pub type Vec2f = Vec2<f32>;
/// Double precision [`Vec2`].
pub type Vec2d = Vec2<f64>;

impl<T: Scalar> Vec2<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    /// The origin (0, 0).
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Converts every component to another scalar kind.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vec2<U>
    where
        T: AsPrimitive<U>,
    {
        Vec2::new(self.x.as_(), self.y.as_())
    }

    /// Returns the component at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Error::index_out_of_range(index, 2, "Vec2")),
        }
    }

    /// Overwrites the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(Error::index_out_of_range(index, 2, "Vec2")),
        }
        Ok(())
    }

    /// Sum of squared components.
    #[inline]
    pub fn squared_length(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
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

    /// True if both components differ from `other` by strictly less than
    /// `epsilon`.
    #[inline]
    pub fn is_approx(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    /// Both components at the most negative finite value.
    #[inline]
    pub fn min_bounds() -> Self {
        Self::splat(T::lowest())
    }

    /// Both components at the most positive finite value.
    #[inline]
    pub fn max_bounds() -> Self {
        Self::splat(T::highest())
    }
}

impl_vector_ops!(Vec2, "Vec2", 2, 0 => x, 1 => y);
