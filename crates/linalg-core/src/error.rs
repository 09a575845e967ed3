//! Error types for linalg operations.
//!
//! Only two things in this workspace can fail:
//! - Checked component access on a vector with an index past its arity
//! - Building a `Mat3` from a nested row list that is not exactly 3x3
//!
//! Degenerate numeric input (zero-length vectors, singular matrices) is never
//! reported here. Those cases resolve to documented fallback values instead.
//!
//! # Usage
//!
//! ```rust
//! use linalg_core::{Error, Result};
//!
//! fn component(values: &[f64; 3], index: usize) -> Result<f64> {
//!     values
//!         .get(index)
//!         .copied()
//!         .ok_or_else(|| Error::index_out_of_range(index, 3, "Vec3"))
//! }
//!
//! assert!(component(&[1.0, 2.0, 3.0], 3).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by vector and matrix construction or access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Indexed access outside `[0, len)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linalg_core::Error;
    ///
    /// let err = Error::index_out_of_range(4, 3, "Vec3");
    /// assert!(err.to_string().contains("Vec3"));
    /// ```
    #[error("index {index} out of range for {type_name} (len {len})")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of components of the accessed type
        len: usize,
        /// Name of the accessed type
        type_name: &'static str,
    },

    /// Nested row list does not have the required shape.
    ///
    /// `cols` is the length of the first offending row, or the expected
    /// column count when only the row count is wrong.
    #[error("invalid shape: expected {expected_rows}x{expected_cols}, got {rows} rows with {cols} columns")]
    InvalidShape {
        /// Required number of rows
        expected_rows: usize,
        /// Required number of columns
        expected_cols: usize,
        /// Rows supplied
        rows: usize,
        /// Columns supplied in the offending row
        cols: usize,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize, type_name: &'static str) -> Self {
        Self::IndexOutOfRange {
            index,
            len,
            type_name,
        }
    }

    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::InvalidShape {
            expected_rows: expected.0,
            expected_cols: expected.1,
            rows: got.0,
            cols: got.1,
        }
    }

    /// Returns `true` if this is an out-of-range access.
    #[inline]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is a construction shape error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::InvalidShape { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range() {
        let err = Error::index_out_of_range(5, 4, "Vec4");
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains("Vec4"));
        assert!(msg.contains("len 4"));
        assert!(err.is_index_error());
        assert!(!err.is_shape_error());
    }

    #[test]
    fn test_invalid_shape() {
        let err = Error::invalid_shape((3, 3), (2, 3));
        let msg = err.to_string();
        assert!(msg.contains("3x3"));
        assert!(msg.contains("2 rows"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_error_eq() {
        assert_eq!(
            Error::invalid_shape((3, 3), (3, 2)),
            Error::InvalidShape {
                expected_rows: 3,
                expected_cols: 3,
                rows: 3,
                cols: 2,
            }
        );
    }
}
