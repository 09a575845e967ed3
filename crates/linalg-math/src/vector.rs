//! Algebra shared by [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3) and
//! [`Vec4`](crate::Vec4).
//!
//! [`Vector`] is the seam the generic free functions ([`dot`](crate::dot),
//! [`cwise_min`](crate::cwise_min), ...) are written against. The
//! `impl_vector_ops!` macro stamps out the operator boilerplate that is
//! identical across arities.

use linalg_core::Scalar;

/// Fixed-arity vector of a [`Scalar`] kind.
pub trait Vector: Copy + PartialEq {
    /// Component type.
    type Scalar: Scalar;

    /// Number of components.
    const DIM: usize;

    /// Sum of component-wise products.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Component-wise minimum (`fmin` semantics).
    fn cwise_min(self, other: Self) -> Self;

    /// Component-wise maximum (`fmax` semantics).
    fn cwise_max(self, other: Self) -> Self;

    /// Component-wise product.
    fn cwise_product(self, other: Self) -> Self;
}

/// Implements the arithmetic, indexing, conversion and formatting traits
/// for a vector type with named fields.
///
/// `Index`/`IndexMut` panic on a bad index with the same message the checked
/// `get`/`set` accessors return as an error.
macro_rules! impl_vector_ops {
    ($Vec:ident, $name:literal, $dim:literal, $($idx:literal => $field:ident),+) => {
        impl<T: $crate::Scalar> std::ops::Index<usize> for $Vec<T> {
            type Output = T;

            #[inline]
            fn index(&self, i: usize) -> &T {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!("{}", $crate::Error::index_out_of_range(i, $dim, $name)),
                }
            }
        }

        impl<T: $crate::Scalar> std::ops::IndexMut<usize> for $Vec<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!("{}", $crate::Error::index_out_of_range(i, $dim, $name)),
                }
            }
        }

        impl<T: $crate::Scalar> std::ops::Neg for $Vec<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::Add for $Vec<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::AddAssign for $Vec<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field + rhs.$field;)+
            }
        }

        impl<T: $crate::Scalar> std::ops::Sub for $Vec<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::SubAssign for $Vec<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field - rhs.$field;)+
            }
        }

        impl<T: $crate::Scalar> std::ops::Mul<T> for $Vec<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::MulAssign<T> for $Vec<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }

        // Division by zero follows the scalar's IEEE semantics.
        impl<T: $crate::Scalar> std::ops::Div<T> for $Vec<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::DivAssign<T> for $Vec<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                $(self.$field = self.$field / rhs;)+
            }
        }

        // scalar * vector
        impl std::ops::Mul<$Vec<f32>> for f32 {
            type Output = $Vec<f32>;

            #[inline]
            fn mul(self, rhs: $Vec<f32>) -> $Vec<f32> {
                rhs * self
            }
        }

        impl std::ops::Mul<$Vec<f64>> for f64 {
            type Output = $Vec<f64>;

            #[inline]
            fn mul(self, rhs: $Vec<f64>) -> $Vec<f64> {
                rhs * self
            }
        }

        impl<T: $crate::Scalar> $crate::Vector for $Vec<T> {
            type Scalar = T;

            const DIM: usize = $dim;

            #[inline]
            fn dot(self, other: Self) -> T {
                let mut sum = T::zero();
                $(sum = sum + self.$field * other.$field;)+
                sum
            }

            #[inline]
            fn cwise_min(self, other: Self) -> Self {
                Self { $($field: self.$field.min(other.$field)),+ }
            }

            #[inline]
            fn cwise_max(self, other: Self) -> Self {
                Self { $($field: self.$field.max(other.$field)),+ }
            }

            #[inline]
            fn cwise_product(self, other: Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }
        }

        impl<T: $crate::Scalar> From<[T; $dim]> for $Vec<T> {
            #[inline]
            fn from(a: [T; $dim]) -> Self {
                Self { $($field: a[$idx]),+ }
            }
        }

        impl<T: $crate::Scalar> From<$Vec<T>> for [T; $dim] {
            #[inline]
            fn from(v: $Vec<T>) -> [T; $dim] {
                [$(v.$field),+]
            }
        }

        impl<T: $crate::Scalar> std::fmt::Display for $Vec<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts = [$(self.$field.to_string()),+];
                write!(f, "{}({})", $name, parts.join(", "))
            }
        }
    };
}

pub(crate) use impl_vector_ops;
