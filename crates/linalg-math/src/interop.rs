//! Conversions to and from [`glam`] types.
//!
//! glam stores matrices column-major; the conversions here transpose so that
//! cell `(row, col)` means the same thing on both sides. Single precision
//! types map to `glam::{Vec*, Mat*}`, double precision to
//! `glam::{DVec*, DMat*}`.
//!
//! ```rust
//! use linalg_math::Mat4f;
//!
//! let m = Mat4f::perspective(1.0, 1.5, 0.1, 10.0);
//! let g: glam::Mat4 = m.into();
//! assert_eq!(g.col(2).w, -1.0);
//! assert_eq!(Mat4f::from(g), m);
//! ```

use crate::{Mat3, Mat4, Vec2, Vec3, Vec4};

macro_rules! vec_interop {
    ($T:ty, $Ours:ident, $Glam:ty, $($field:ident),+) => {
        impl From<$Ours<$T>> for $Glam {
            #[inline]
            fn from(v: $Ours<$T>) -> Self {
                <$Glam>::new($(v.$field),+)
            }
        }

        impl From<$Glam> for $Ours<$T> {
            #[inline]
            fn from(v: $Glam) -> Self {
                $Ours::new($(v.$field),+)
            }
        }
    };
}

vec_interop!(f32, Vec2, glam::Vec2, x, y);
vec_interop!(f32, Vec3, glam::Vec3, x, y, z);
vec_interop!(f32, Vec4, glam::Vec4, x, y, z, w);
vec_interop!(f64, Vec2, glam::DVec2, x, y);
vec_interop!(f64, Vec3, glam::DVec3, x, y, z);
vec_interop!(f64, Vec4, glam::DVec4, x, y, z, w);

macro_rules! mat_interop {
    ($T:ty, $Ours:ident, $Glam:ty) => {
        impl From<$Ours<$T>> for $Glam {
            #[inline]
            fn from(m: $Ours<$T>) -> Self {
                // Rows of the transpose are our columns.
                <$Glam>::from_cols_array_2d(&m.transposed().m)
            }
        }

        impl From<$Glam> for $Ours<$T> {
            #[inline]
            fn from(m: $Glam) -> Self {
                $Ours::from_rows(m.to_cols_array_2d()).transposed()
            }
        }
    };
}

mat_interop!(f32, Mat3, glam::Mat3);
mat_interop!(f32, Mat4, glam::Mat4);
mat_interop!(f64, Mat3, glam::DMat3);
mat_interop!(f64, Mat4, glam::DMat4);
