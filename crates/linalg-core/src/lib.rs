//! # linalg-core
//!
//! Foundation types shared by the linalg crates.
//!
//! - [`Error`], [`Result`] - Out-of-range access and bad construction shapes
//! - [`Scalar`] - Floating point element kinds (`f32`, `f64`)
//! - [`Alignment`] - Storage alignment policy per kind and dimension
//!
//! ## Crate Structure
//!
//! ```text
//! linalg-core (this crate)
//!    ^
//!    |
//!    +-- linalg-math (vectors, matrices, free functions)
//!    +-- linalg-bench (criterion benchmarks)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod align;
pub mod error;
pub mod scalar;

pub use align::{mat_alignment, vec_alignment, Alignment};
pub use error::{Error, Result};
pub use scalar::Scalar;

/// Prelude module for convenient imports.
///
/// ```
/// use linalg_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::Scalar;
}
