//! 3x3 matrix type.
//!
//! [`Mat3`] is used for rotations, normal matrices and other linear 3D
//! transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Flat indices run across a row first: index `i` is cell `(i / 3, i % 3)`.
//!
//! # Usage
//!
//! ```rust
//! use linalg_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [4.0, 7.0, 2.0],
//!     [3.0, 6.0, 1.0],
//!     [2.0, 5.0, 1.0],
//! ]);
//! assert_eq!(m.determinant(), 3.0);
//! assert!((m * m.inverse()).is_approx(&Mat3::identity(), 1e-9));
//! ```

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use num_traits::AsPrimitive;
use tracing::{debug, trace};

use crate::{Error, Result, Scalar, Vec3};

/// A 3x3 matrix.
///
/// The default value is the identity, not the zero matrix.
///
/// # Example
///
/// ```rust
/// use linalg_math::{Mat3d, Vec3};
///
/// let identity = Mat3d::default();
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3<T> {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[T; 3]; 3],
}

/// Single precision [`Mat3`].
pub type Mat3f = Mat3<f32>;
/// Double precision [`Mat3`].
pub type Mat3d = Mat3<f64>;

impl<T: Scalar> Mat3<T> {
    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::from_rows([[o, z, z], [z, o, z], [z, z, o]])
    }

    /// Matrix with every cell set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self { m: [[v; 3]; 3] }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from a nested list of rows.
    ///
    /// The input must be exactly 3 rows of exactly 3 values.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidShape`] when the row count or any row length is not 3.
    ///
    /// ```rust
    /// use linalg_math::Mat3d;
    ///
    /// let m = Mat3d::from_nested(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]])
    ///     .unwrap();
    /// assert_eq!(m.at(2, 0), 7.0);
    ///
    /// assert!(Mat3d::from_nested(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).is_err());
    /// ```
    pub fn from_nested<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != 3 {
            debug!(rows = rows.len(), "rejecting Mat3 row list");
            return Err(Error::invalid_shape((3, 3), (rows.len(), 3)));
        }

        let mut out = Self::identity();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != 3 {
                debug!(row = i, cols = row.len(), "rejecting Mat3 row list");
                return Err(Error::invalid_shape((3, 3), (3, row.len())));
            }
            out.m[i].copy_from_slice(row);
        }
        Ok(out)
    }

    /// Creates a matrix from Vec3 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self::from_rows([
            [c0.x, c1.x, c2.x],
            [c0.y, c1.y, c2.y],
            [c0.z, c1.z, c2.z],
        ])
    }

    /// Converts every cell to another scalar kind.
    pub fn cast<U: Scalar>(&self) -> Mat3<U>
    where
        T: AsPrimitive<U>,
    {
        Mat3 {
            m: self.m.map(|row| row.map(|v| v.as_())),
        }
    }

    /// Cell at (`row`, `col`). Panics if either is out of range.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.m[row][col]
    }

    /// Mutable cell at (`row`, `col`).
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.m[row][col]
    }

    /// Row-major view of all 9 cells.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.m.as_flattened()
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<T> {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3<T> {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Computes the determinant by cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns the identity when `|det| < 1e-6`. That result is a fallback,
    /// not an inverse: `m * m.inverse()` will not be the identity for a
    /// singular `m`.
    ///
    /// ```rust
    /// use linalg_math::Mat3d;
    ///
    /// let singular = Mat3d::splat(1.0);
    /// assert_eq!(singular.inverse(), Mat3d::identity());
    /// ```
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det.abs() < T::SINGULAR_EPSILON {
            trace!(det = det.as_f64(), "Mat3 is singular, returning identity");
            return Self::identity();
        }

        let m = &self.m;
        let inv_det = T::one() / det;

        // Adjugate (transposed cofactors) scaled by 1/det
        Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                -(m[0][1] * m[2][2] - m[0][2] * m[2][1]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                -(m[1][0] * m[2][2] - m[1][2] * m[2][0]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                -(m[0][0] * m[1][2] - m[0][2] * m[1][0]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                -(m[0][0] * m[2][1] - m[0][1] * m[2][0]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ])
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3<T>) -> Vec3<T> {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::identity();
        for i in 0..3 {
            let row = &self.m[i];
            for j in 0..3 {
                result.m[i][j] =
                    row[0] * other.m[0][j] + row[1] * other.m[1][j] + row[2] * other.m[2][j];
            }
        }
        result
    }

    /// True if every cell differs from `other` by at most `epsilon`.
    pub fn is_approx(&self, other: &Self, epsilon: T) -> bool {
        self.data()
            .iter()
            .zip(other.data())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data().iter().all(|x| x.is_finite())
    }
}

impl<T: Scalar> Default for Mat3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Mat3 * Vec3
impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl<T: Scalar> Mul for Mat3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// self = self * rhs
impl<T: Scalar> MulAssign for Mat3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

// Mat3 * scalar
impl<T: Scalar> Mul<T> for Mat3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self {
            m: self.m.map(|row| row.map(|v| v * rhs)),
        }
    }
}

impl<T: Scalar> Index<(usize, usize)> for Mat3<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.m[row][col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Mat3<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.m[row][col]
    }
}

// Flat row-major index 0..9
impl<T: Scalar> Index<usize> for Mat3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.m[i / 3][i % 3]
    }
}

impl<T: Scalar> IndexMut<usize> for Mat3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.m[i / 3][i % 3]
    }
}

impl<T: Scalar> fmt::Display for Mat3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat3(")?;
        for row in &self.m {
            writeln!(f, "  [{}, {}, {}]", row[0], row[1], row[2])?;
        }
        write!(f, ")")
    }
}
