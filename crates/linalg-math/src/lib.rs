//! # linalg-math
//!
//! Small fixed-size linear algebra for graphics and geometry code.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - Vectors of 2, 3 and 4 components
//! - [`Mat3`] - 3x3 matrices for rotations and other linear transforms
//! - [`Mat4`] - 4x4 matrices for affine, view and projection transforms
//! - Free functions: [`dot`], [`cwise_clamp`], [`rotation_matrix`],
//!   [`reflect`], [`refract`] and friends
//!
//! Every type is generic over a [`Scalar`] kind (`f32` or `f64`), with
//! `f`/`d` suffixed aliases such as [`Vec3f`] and [`Mat4d`].
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Values are plain `Copy` data with no shared state, so they can be used
//! from any number of threads.
//!
//! # Usage
//!
//! ```rust
//! use linalg_math::{rotation_matrix, Mat4, Vec3};
//!
//! let spin = rotation_matrix(0.0, 0.0, std::f64::consts::FRAC_PI_2);
//! let v = spin * Vec3::new(1.0, 0.0, 0.0);
//! assert!(v.is_approx(&Vec3::new(0.0, 1.0, 0.0), 1e-12));
//!
//! let model = Mat4::from(spin);
//! assert_eq!(model.top_left_3x3(), spin);
//! ```
//!
//! # Dependencies
//!
//! - [`linalg_core`] - Errors, scalar kinds, alignment policy
//! - [`glam`] - Interop with glam's column-major types
//! - `tracing` - Events on degenerate fallbacks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod algebra;
mod interop;
mod mat3;
mod mat4;
mod optics;
mod vec2;
mod vec3;
mod vec4;
mod vector;

pub use algebra::*;
pub use mat3::*;
pub use mat4::*;
pub use optics::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
pub use vector::Vector;

pub use linalg_core::{mat_alignment, vec_alignment, Alignment, Error, Result, Scalar};

/// Prelude module for convenient imports.
///
/// ```
/// use linalg_math::prelude::*;
///
/// let n = Vec3d::new(0.0, 0.0, 2.0).normalized();
/// assert_eq!(dot(n, n), 1.0);
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::optics::{reflect, refract};
    pub use crate::vector::Vector;
    pub use crate::{Mat3, Mat3d, Mat3f, Mat4, Mat4d, Mat4f};
    pub use crate::{Vec2, Vec2d, Vec2f, Vec3, Vec3d, Vec3f, Vec4, Vec4d, Vec4f};
    pub use linalg_core::prelude::*;
}
