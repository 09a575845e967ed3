//! Alignment policy for vector and matrix storage.
//!
//! Maps a (scalar kind, dimension) pair to the byte alignment a SIMD-friendly
//! layout would request:
//!
//! | kind | vec2 | vec3 | vec4 | mat3 | mat4 |
//! |------|------|------|------|------|------|
//! | f32  | 16   | 16   | 16   | 16   | 16   |
//! | f64  | 16   | 32   | 32   | 32   | 32   |
//!
//! Rust cannot pick `#[repr(align)]` from a generic parameter, so the linalg
//! types stay `#[repr(C)]` at their natural alignment and this table is
//! informational only. No algorithm reads it.
//!
//! ```rust
//! use linalg_core::{mat_alignment, vec_alignment};
//!
//! assert_eq!(vec_alignment::<f64>(3), Some(32));
//! assert_eq!(mat_alignment::<f32>(4), Some(16));
//! assert_eq!(vec_alignment::<f32>(5), None);
//! ```

use crate::Scalar;

/// Per-kind alignment table.
pub trait Alignment: Scalar {
    /// Alignment for vectors of dimension 2, 3, 4.
    const VEC_ALIGN: [usize; 3];
    /// Alignment for square matrices of dimension 3, 4.
    const MAT_ALIGN: [usize; 2];
}

impl Alignment for f32 {
    const VEC_ALIGN: [usize; 3] = [16, 16, 16];
    const MAT_ALIGN: [usize; 2] = [16, 16];
}

impl Alignment for f64 {
    const VEC_ALIGN: [usize; 3] = [16, 32, 32];
    const MAT_ALIGN: [usize; 2] = [32, 32];
}

/// Requested alignment for an `n`-component vector of `T`, if `n` is 2..=4.
#[inline]
pub const fn vec_alignment<T: Alignment>(n: usize) -> Option<usize> {
    match n {
        2..=4 => Some(T::VEC_ALIGN[n - 2]),
        _ => None,
    }
}

/// Requested alignment for an `n`x`n` matrix of `T`, if `n` is 3 or 4.
#[inline]
pub const fn mat_alignment<T: Alignment>(n: usize) -> Option<usize> {
    match n {
        3 | 4 => Some(T::MAT_ALIGN[n - 3]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_table() {
        assert_eq!(vec_alignment::<f32>(2), Some(16));
        assert_eq!(vec_alignment::<f32>(4), Some(16));
        assert_eq!(vec_alignment::<f64>(2), Some(16));
        assert_eq!(vec_alignment::<f64>(4), Some(32));
        assert_eq!(vec_alignment::<f64>(1), None);
    }

    #[test]
    fn test_mat_table() {
        assert_eq!(mat_alignment::<f32>(3), Some(16));
        assert_eq!(mat_alignment::<f64>(3), Some(32));
        assert_eq!(mat_alignment::<f64>(2), None);
        assert_eq!(mat_alignment::<f64>(5), None);
    }

    #[test]
    fn test_policy_is_power_of_two() {
        for n in 2..=4 {
            assert!(vec_alignment::<f32>(n).is_some_and(usize::is_power_of_two));
            assert!(vec_alignment::<f64>(n).is_some_and(usize::is_power_of_two));
        }
    }
}
