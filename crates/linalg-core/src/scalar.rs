//! Scalar kinds the vector and matrix types are generic over.
//!
//! [`Scalar`] extends [`num_traits::Float`] with the few extras generic
//! formulas need: literal construction, finite bounds and the singular
//! determinant threshold. It is implemented for `f32` and `f64`.
//!
//! Conversions between scalar kinds go through [`num_traits::AsPrimitive`],
//! which has `as`-cast semantics and never fails.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Floating point element type of vectors and matrices.
///
/// # Example
///
/// ```rust
/// use linalg_core::Scalar;
///
/// fn half<T: Scalar>(v: T) -> T {
///     v * T::from_literal(0.5)
/// }
///
/// assert_eq!(half(3.0f32), 1.5);
/// assert_eq!(f64::lowest(), f64::MIN);
/// ```
pub trait Scalar: Float + Default + Debug + Display + Send + Sync + 'static {
    /// Determinant magnitude below which a 3x3 matrix is treated as singular.
    const SINGULAR_EPSILON: Self;

    /// Converts an `f64` literal into this scalar kind.
    fn from_literal(v: f64) -> Self;

    /// Widens this value to `f64`.
    fn as_f64(self) -> f64;

    /// Most negative finite value.
    fn lowest() -> Self;

    /// Most positive finite value.
    fn highest() -> Self;

    /// Short type name used in diagnostics.
    fn type_name() -> &'static str;
}

impl Scalar for f32 {
    const SINGULAR_EPSILON: Self = 1e-6;

    #[inline]
    fn from_literal(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn lowest() -> Self {
        f32::MIN
    }

    #[inline]
    fn highest() -> Self {
        f32::MAX
    }

    fn type_name() -> &'static str {
        "f32"
    }
}

impl Scalar for f64 {
    const SINGULAR_EPSILON: Self = 1e-6;

    #[inline]
    fn from_literal(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn lowest() -> Self {
        f64::MIN
    }

    #[inline]
    fn highest() -> Self {
        f64::MAX
    }

    fn type_name() -> &'static str {
        "f64"
    }
}
