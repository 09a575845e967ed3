//! 4x4 matrix type.
//!
//! [`Mat4`] carries affine and projective transforms in homogeneous
//! coordinates: model, view ([`Mat4::look_at`]) and projection
//! ([`Mat4::perspective`], [`Mat4::orthographic`]) matrices.
//!
//! Same conventions as [`Mat3`]: row-major storage, column vectors, flat
//! index `i` is cell `(i / 4, i % 4)`. Cameras are right-handed and look
//! down `-Z`; projections map depth to OpenGL's `[-1, 1]` clip range.
//!
//! # Usage
//!
//! ```rust
//! use linalg_math::{to_vec4, Mat4, Vec3, Vec4};
//!
//! let view = Mat4::look_at(
//!     Vec3::new(0.0, 0.0, 5.0),
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! );
//! let origin = view * to_vec4(Vec3::new(0.0, 0.0, 0.0));
//! assert_eq!(origin, Vec4::new(0.0, 0.0, -5.0, 1.0));
//! ```

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use num_traits::AsPrimitive;
use tracing::trace;

use crate::{Mat3, Scalar, Vec3, Vec4};

/// A 4x4 matrix.
///
/// The default value is the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4<T> {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[T; 4]; 4],
}

/// Single precision [`Mat4`].
pub type Mat4f = Mat4<f32>;
/// Double precision [`Mat4`].
pub type Mat4d = Mat4<f64>;

impl<T: Scalar> Mat4<T> {
    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::from_rows([[o, z, z, z], [z, o, z, z], [z, z, o, z], [z, z, z, o]])
    }

    /// Matrix with every cell set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self { m: [[v; 4]; 4] }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from a nested list of rows.
    ///
    /// Unlike [`Mat3::from_nested`] this never fails: rows and columns past
    /// the fourth are ignored, and cells the input does not reach keep their
    /// identity values.
    ///
    /// ```rust
    /// use linalg_math::Mat4d;
    ///
    /// let m = Mat4d::from_nested(&[vec![2.0, 3.0], vec![4.0, 5.0, 6.0, 7.0, 99.0]]);
    /// assert_eq!(m.at(0, 1), 3.0);
    /// assert_eq!(m.at(1, 3), 7.0);
    /// assert_eq!(m.at(0, 2), 0.0);
    /// assert_eq!(m.at(3, 3), 1.0);
    /// ```
    pub fn from_nested<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let mut out = Self::identity();
        for (i, row) in rows.iter().take(4).enumerate() {
            for (j, value) in row.as_ref().iter().take(4).enumerate() {
                out.m[i][j] = *value;
            }
        }
        out
    }

    /// Embeds a [`Mat3`] as the upper-left block.
    ///
    /// The last row and column take the homogeneous identity pattern
    /// `(0, 0, 0, 1)`.
    pub fn from_mat3(mat: &Mat3<T>) -> Self {
        let mut out = Self::identity();
        for i in 0..3 {
            out.m[i][..3].copy_from_slice(&mat.m[i]);
        }
        out
    }

    /// Creates a matrix from Vec4 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec4<T>, r1: Vec4<T>, r2: Vec4<T>, r3: Vec4<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Creates a matrix from Vec4 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec4<T>, c1: Vec4<T>, c2: Vec4<T>, c3: Vec4<T>) -> Self {
        Self::from_rows([
            [c0.x, c1.x, c2.x, c3.x],
            [c0.y, c1.y, c2.y, c3.y],
            [c0.z, c1.z, c2.z, c3.z],
            [c0.w, c1.w, c2.w, c3.w],
        ])
    }

    /// Converts every cell to another scalar kind.
    pub fn cast<U: Scalar>(&self) -> Mat4<U>
    where
        T: AsPrimitive<U>,
    {
        Mat4 {
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

    /// Row-major view of all 16 cells, ready to hand to a graphics API.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.m.as_flattened()
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4<T> {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4<T> {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Upper-left 3x3 block (the linear part of an affine transform).
    pub fn top_left_3x3(&self) -> Mat3<T> {
        let m = &self.m;
        Mat3::from_rows([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// Returns the transpose of this matrix.
    pub fn transposed(&self) -> Self {
        let mut out = *self;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[j][i];
            }
        }
        out
    }

    /// Computes the inverse from the 16 closed-form cofactors.
    ///
    /// Returns the identity only when the determinant is exactly zero; a
    /// nearly singular matrix still gets scaled by a huge `1/det`.
    pub fn inverse(&self) -> Self {
        let m = &self.m;
        let mut inv = [T::zero(); 16];

        inv[0] = m[1][1] * m[2][2] * m[3][3] - m[1][1] * m[2][3] * m[3][2] - m[2][1] * m[1][2] * m[3][3]
            + m[2][1] * m[1][3] * m[3][2] + m[3][1] * m[1][2] * m[2][3] - m[3][1] * m[1][3] * m[2][2];

        inv[1] = -m[0][1] * m[2][2] * m[3][3] + m[0][1] * m[2][3] * m[3][2] + m[2][1] * m[0][2] * m[3][3]
            - m[2][1] * m[0][3] * m[3][2] - m[3][1] * m[0][2] * m[2][3] + m[3][1] * m[0][3] * m[2][2];

        inv[2] = m[0][1] * m[1][2] * m[3][3] - m[0][1] * m[1][3] * m[3][2] - m[1][1] * m[0][2] * m[3][3]
            + m[1][1] * m[0][3] * m[3][2] + m[3][1] * m[0][2] * m[1][3] - m[3][1] * m[0][3] * m[1][2];

        inv[3] = -m[0][1] * m[1][2] * m[2][3] + m[0][1] * m[1][3] * m[2][2] + m[1][1] * m[0][2] * m[2][3]
            - m[1][1] * m[0][3] * m[2][2] - m[2][1] * m[0][2] * m[1][3] + m[2][1] * m[0][3] * m[1][2];

        inv[4] = -m[1][0] * m[2][2] * m[3][3] + m[1][0] * m[2][3] * m[3][2] + m[2][0] * m[1][2] * m[3][3]
            - m[2][0] * m[1][3] * m[3][2] - m[3][0] * m[1][2] * m[2][3] + m[3][0] * m[1][3] * m[2][2];

        inv[5] = m[0][0] * m[2][2] * m[3][3] - m[0][0] * m[2][3] * m[3][2] - m[2][0] * m[0][2] * m[3][3]
            + m[2][0] * m[0][3] * m[3][2] + m[3][0] * m[0][2] * m[2][3] - m[3][0] * m[0][3] * m[2][2];

        inv[6] = -m[0][0] * m[1][2] * m[3][3] + m[0][0] * m[1][3] * m[3][2] + m[1][0] * m[0][2] * m[3][3]
            - m[1][0] * m[0][3] * m[3][2] - m[3][0] * m[0][2] * m[1][3] + m[3][0] * m[0][3] * m[1][2];

        inv[7] = m[0][0] * m[1][2] * m[2][3] - m[0][0] * m[1][3] * m[2][2] - m[1][0] * m[0][2] * m[2][3]
            + m[1][0] * m[0][3] * m[2][2] + m[2][0] * m[0][2] * m[1][3] - m[2][0] * m[0][3] * m[1][2];

        inv[8] = m[1][0] * m[2][1] * m[3][3] - m[1][0] * m[2][3] * m[3][1] - m[2][0] * m[1][1] * m[3][3]
            + m[2][0] * m[1][3] * m[3][1] + m[3][0] * m[1][1] * m[2][3] - m[3][0] * m[1][3] * m[2][1];

        inv[9] = -m[0][0] * m[2][1] * m[3][3] + m[0][0] * m[2][3] * m[3][1] + m[2][0] * m[0][1] * m[3][3]
            - m[2][0] * m[0][3] * m[3][1] - m[3][0] * m[0][1] * m[2][3] + m[3][0] * m[0][3] * m[2][1];

        inv[10] = m[0][0] * m[1][1] * m[3][3] - m[0][0] * m[1][3] * m[3][1] - m[1][0] * m[0][1] * m[3][3]
            + m[1][0] * m[0][3] * m[3][1] + m[3][0] * m[0][1] * m[1][3] - m[3][0] * m[0][3] * m[1][1];

        inv[11] = -m[0][0] * m[1][1] * m[2][3] + m[0][0] * m[1][3] * m[2][1] + m[1][0] * m[0][1] * m[2][3]
            - m[1][0] * m[0][3] * m[2][1] - m[2][0] * m[0][1] * m[1][3] + m[2][0] * m[0][3] * m[1][1];

        inv[12] = -m[1][0] * m[2][1] * m[3][2] + m[1][0] * m[2][2] * m[3][1] + m[2][0] * m[1][1] * m[3][2]
            - m[2][0] * m[1][2] * m[3][1] - m[3][0] * m[1][1] * m[2][2] + m[3][0] * m[1][2] * m[2][1];

        inv[13] = m[0][0] * m[2][1] * m[3][2] - m[0][0] * m[2][2] * m[3][1] - m[2][0] * m[0][1] * m[3][2]
            + m[2][0] * m[0][2] * m[3][1] + m[3][0] * m[0][1] * m[2][2] - m[3][0] * m[0][2] * m[2][1];

        inv[14] = -m[0][0] * m[1][1] * m[3][2] + m[0][0] * m[1][2] * m[3][1] + m[1][0] * m[0][1] * m[3][2]
            - m[1][0] * m[0][2] * m[3][1] - m[3][0] * m[0][1] * m[1][2] + m[3][0] * m[0][2] * m[1][1];

        inv[15] = m[0][0] * m[1][1] * m[2][2] - m[0][0] * m[1][2] * m[2][1] - m[1][0] * m[0][1] * m[2][2]
            + m[1][0] * m[0][2] * m[2][1] + m[2][0] * m[0][1] * m[1][2] - m[2][0] * m[0][2] * m[1][1];

        let det = m[0][0] * inv[0] + m[0][1] * inv[4] + m[0][2] * inv[8] + m[0][3] * inv[12];
        if det == T::zero() {
            trace!("Mat4 determinant is zero, returning identity");
            return Self::identity();
        }

        let inv_det = T::one() / det;
        let mut out = Self::identity();
        for (i, cofactor) in inv.iter().enumerate() {
            out.m[i / 4][i % 4] = *cofactor * inv_det;
        }
        out
    }

    /// Transforms a Vec4 by this matrix.
    #[inline]
    pub fn transform(&self, v: Vec4<T>) -> Vec4<T> {
        let m = &self.m;
        Vec4::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3] * v.w,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3] * v.w,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3] * v.w,
            m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3] * v.w,
        )
    }

    /// Multiplies two matrices.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::identity();
        for i in 0..4 {
            let row = &self.m[i];
            for j in 0..4 {
                result.m[i][j] = row[0] * other.m[0][j]
                    + row[1] * other.m[1][j]
                    + row[2] * other.m[2][j]
                    + row[3] * other.m[3][j];
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

    /// Right-handed view matrix looking from `eye` towards `center`.
    ///
    /// Rows 0..3 hold the camera basis (side, up, -forward), each with its
    /// translation term in column 3.
    pub fn look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
        let forward = (center - eye).normalized();
        let side = forward.cross(up).normalized();
        let up = side.cross(forward);

        let (o, z) = (T::one(), T::zero());
        Self::from_rows([
            [side.x, side.y, side.z, -(side.x * eye.x + side.y * eye.y + side.z * eye.z)],
            [up.x, up.y, up.z, -(up.x * eye.x + up.y * eye.y + up.z * eye.z)],
            [
                -forward.x,
                -forward.y,
                -forward.z,
                forward.x * eye.x + forward.y * eye.y + forward.z * eye.z,
            ],
            [z, z, z, o],
        ])
    }

    /// [`look_at`](Self::look_at) with a world up picked automatically.
    ///
    /// Uses `+Y` as up unless the view direction is within `|forward.y| > 0.99`
    /// of it, in which case `+Z` is used instead.
    pub fn look_at_auto(eye: Vec3<T>, center: Vec3<T>) -> Self {
        let forward = (center - eye).normalized();
        let (o, z) = (T::one(), T::zero());
        let up = if forward.y.abs() > T::from_literal(0.99) {
            Vec3::new(z, z, o)
        } else {
            Vec3::new(z, o, z)
        };
        Self::look_at(eye, center, up)
    }

    /// Orthographic projection of the given view box.
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::from_literal(2.0);
        let mut ortho = Self::identity();
        ortho.m[0][0] = two / (right - left);
        ortho.m[1][1] = two / (top - bottom);
        ortho.m[2][2] = -two / (far - near);

        ortho.m[0][3] = -(right + left) / (right - left);
        ortho.m[1][3] = -(top + bottom) / (top - bottom);
        ortho.m[2][3] = -(far + near) / (far - near);
        ortho
    }

    /// Perspective projection. `fov_y` is the vertical field of view in
    /// radians, `aspect` is width / height.
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let two = T::from_literal(2.0);
        let inv_tan_half_fov_y = T::one() / (fov_y / two).tan();

        let mut persp = Self::identity();
        persp.m[0][0] = inv_tan_half_fov_y / aspect;
        persp.m[1][1] = inv_tan_half_fov_y;
        persp.m[2][2] = -(far + near) / (far - near);
        persp.m[2][3] = -(two * far * near) / (far - near);
        persp.m[3][2] = -T::one();
        persp.m[3][3] = T::zero();
        persp
    }
}

impl<T: Scalar> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> From<Mat3<T>> for Mat4<T> {
    #[inline]
    fn from(m: Mat3<T>) -> Self {
        Self::from_mat3(&m)
    }
}

// Mat4 * Vec4
impl<T: Scalar> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn mul(self, rhs: Vec4<T>) -> Vec4<T> {
        self.transform(rhs)
    }
}

// Mat4 * Mat4
impl<T: Scalar> Mul for Mat4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// self = self * rhs
impl<T: Scalar> MulAssign for Mat4<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

// Mat4 * scalar
impl<T: Scalar> Mul<T> for Mat4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self {
            m: self.m.map(|row| row.map(|v| v * rhs)),
        }
    }
}

impl<T: Scalar> Index<(usize, usize)> for Mat4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.m[row][col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.m[row][col]
    }
}

// Flat row-major index 0..16
impl<T: Scalar> Index<usize> for Mat4<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.m[i / 4][i % 4]
    }
}

impl<T: Scalar> IndexMut<usize> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.m[i / 4][i % 4]
    }
}

impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4(")?;
        for row in &self.m {
            writeln!(f, "  [{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        write!(f, ")")
    }
}
