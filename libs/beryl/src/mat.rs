use crate::error::{MathError, Result};
use crate::quat::Quat;
use crate::utils::{fmt_row, ApproxEq};
use crate::vec::{Vec2, Vec3};
use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use core::fmt;
use core::ops::{Mul, MulAssign};

/// A 3x3 matrix, column-major.
///
/// Used for 2D transforms of homogeneous points `(x, y, 1)`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat3 {
    pub cols: [Vec3; 3],
}

impl Default for Mat3 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        cols: [
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
        ],
    };

    pub const ZERO: Self = Self {
        cols: [Vec3::ZERO; 3],
    };

    #[inline]
    pub const fn from_cols(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self { cols: [x, y, z] }
    }

    #[inline]
    pub fn from_cols_array(m: &[f32; 9]) -> Self {
        bytemuck::cast(*m)
    }

    #[inline]
    pub fn to_cols_array(&self) -> [f32; 9] {
        bytemuck::cast(*self)
    }

    /// The nine elements in storage (column-major) order.
    #[inline]
    pub fn as_array(&self) -> &[f32; 9] {
        bytemuck::cast_ref(self)
    }

    /// Row `i` of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.cols[0].as_array()[i], self.cols[1].as_array()[i], self.cols[2].as_array()[i])
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    #[inline]
    pub fn from_translation(v: Vec2) -> Self {
        Self::from_cols(Vec3::X, Vec3::Y, Vec3::new(v.x, v.y, 1.0))
    }

    #[inline]
    pub fn from_scale(v: Vec2) -> Self {
        Self::from_cols(
            Vec3::new(v.x, 0.0, 0.0),
            Vec3::new(0.0, v.y, 0.0),
            Vec3::Z,
        )
    }

    /// Creates a 2D rotation. Positive angles turn counter-clockwise, so
    /// `+X` maps to `+Y` at `PI / 2`.
    ///
    /// Stored as `{c, s, 0, -s, c, 0, 0, 0, 1}`.
    #[inline]
    pub fn from_rotation(radians: f32) -> Self {
        let (s, c) = libm::sincosf(radians);
        Self::from_cols(
            Vec3::new(c, s, 0.0),
            Vec3::new(-s, c, 0.0),
            Vec3::Z,
        )
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let [c0, c1, c2] = self.cols;
        c2.dot(c0.cross(c1))
    }

    // Rows of the adjugate: the cross products of column pairs.
    #[inline]
    fn adjugate_rows(&self) -> ([Vec3; 3], f32) {
        let [c0, c1, c2] = self.cols;
        let r0 = c1.cross(c2);
        let r1 = c2.cross(c0);
        let r2 = c0.cross(c1);
        ([r0, r1, r2], c2.dot(r2))
    }

    /// Closed-form cofactor inverse.
    ///
    /// The matrix must be invertible. A singular matrix yields infinite or
    /// NaN elements; use [`Mat3::try_inverse`] to detect that.
    #[inline]
    pub fn inverse(&self) -> Self {
        let ([r0, r1, r2], det) = self.adjugate_rows();
        let inv_det = 1.0 / det;
        Self::from_cols(r0 * inv_det, r1 * inv_det, r2 * inv_det).transpose()
    }

    /// Like [`Mat3::inverse`], but rejects singular matrices.
    #[inline]
    pub fn try_inverse(&self) -> Result<Self> {
        let ([r0, r1, r2], det) = self.adjugate_rows();
        let inv_det = 1.0 / det;
        if !inv_det.is_finite() {
            log::debug!("Mat3::try_inverse: singular matrix (det = {det})");
            return Err(MathError::Singular { det });
        }
        Ok(Self::from_cols(r0 * inv_det, r1 * inv_det, r2 * inv_det).transpose())
    }

    /// Applies the matrix to the homogeneous point `(v.x, v.y, 1)`.
    ///
    /// Returns the transformed `(x, y)` and the `w` coordinate, undivided.
    #[inline]
    pub fn transform(&self, v: Vec2) -> (Vec2, f32) {
        let p = *self * Vec3::new(v.x, v.y, 1.0);
        (p.xy(), p.z)
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl MulAssign<Mat3> for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z
    }
}

/// A 4x4 matrix, column-major.
///
/// Compatible with WGSL `mat4x4<f32>` and GLSL `mat4` uniforms.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Self = Self {
        cols: [[0.0; 4]; 4],
    };

    #[inline]
    pub const fn from_cols(x: [f32; 4], y: [f32; 4], z: [f32; 4], w: [f32; 4]) -> Self {
        Self { cols: [x, y, z, w] }
    }

    #[inline]
    pub fn from_cols_array(m: &[f32; 16]) -> Self {
        bytemuck::cast(*m)
    }

    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(*self)
    }

    /// The sixteen elements in storage (column-major) order.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Row `i` of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn row(&self, i: usize) -> [f32; 4] {
        [self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i]]
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self::from_cols(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [v.x, v.y, v.z, 1.0],
        )
    }

    #[inline]
    pub fn from_scale(v: Vec3) -> Self {
        Self::from_cols(
            [v.x, 0.0, 0.0, 0.0],
            [0.0, v.y, 0.0, 0.0],
            [0.0, 0.0, v.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Creates a rotation of `radians` about `axis` (counter-clockwise when
    /// looking down the axis towards the origin).
    ///
    /// The axis is normalized here; a zero axis yields NaN elements.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let Vec3 { x, y, z } = axis.normalize();
        let (s, c) = libm::sincosf(radians);
        let t = 1.0 - c;

        Self::from_cols(
            [x * x * t + c, y * x * t + z * s, x * z * t - y * s, 0.0],
            [x * y * t - z * s, y * y * t + c, y * z * t + x * s, 0.0],
            [x * z * t + y * s, y * z * t - x * s, z * z * t + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Creates a rotation matrix from a quaternion.
    #[inline]
    pub fn from_quat(q: Quat) -> Self {
        q.to_mat4()
    }

    /// Creates a right-handed view matrix (Look At).
    /// The camera looks down -Z.
    ///
    /// The side axis is `cross(forward, normalize(up))` without a further
    /// normalization, so the result is rigid only when `up` is perpendicular
    /// to the view direction. See [`Mat4::look_at_rigid`] otherwise.
    #[inline]
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize(); // Forward (into screen, -Z)
        let s = f.cross(up.normalize()); // Right (+X)
        Self::view_from_basis(eye, f, s)
    }

    /// Like [`Mat4::look_at`], but normalizes the side axis so any `up` not
    /// parallel to the view direction yields a rigid transform.
    #[inline]
    pub fn look_at_rigid(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(up).normalize();
        Self::view_from_basis(eye, f, s)
    }

    #[inline]
    fn view_from_basis(eye: Vec3, f: Vec3, s: Vec3) -> Self {
        let u = s.cross(f); // Up (+Y)

        Self::from_cols(
            [s.x, u.x, -f.x, 0.0],
            [s.y, u.y, -f.y, 0.0],
            [s.z, u.z, -f.z, 0.0],
            [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
        )
    }

    /// Creates an off-axis perspective projection (Right-Handed, Z in [-1, 1]).
    #[inline]
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = z_far - z_near;

        Self::from_cols(
            [2.0 * z_near / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 * z_near / height, 0.0, 0.0],
            [(right + left) / width, (top + bottom) / height, -(z_far + z_near) / depth, -1.0],
            [0.0, 0.0, -(2.0 * z_far * z_near) / depth, 0.0],
        )
    }

    /// Creates a perspective projection matrix (Right-Handed, Z in [-1, 1]).
    /// `fov_y` is in radians.
    ///
    /// Equivalent to `frustum(-r, r, -t, t, z_near, z_far)` with
    /// `t = z_near * tan(fov_y / 2)` and `r = t * aspect_ratio`.
    #[inline]
    pub fn perspective(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / libm::tanf(0.5 * fov_y);
        let inv_depth = 1.0 / (z_near - z_far);

        Self::from_cols(
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (z_far + z_near) * inv_depth, -1.0],
            [0.0, 0.0, 2.0 * z_far * z_near * inv_depth, 0.0],
        )
    }

    /// Multiplies this matrix by a column vector.
    #[inline]
    pub fn mul_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let c = &self.cols;
        core::array::from_fn(|r| c[0][r] * v[0] + c[1][r] * v[1] + c[2][r] * v[2] + c[3][r] * v[3])
    }

    /// Transforms a point (assuming w=1). Returns xyz and w without the divide.
    #[inline]
    pub fn transform_point3_w(&self, v: Vec3) -> (Vec3, f32) {
        let [x, y, z, w] = self.mul_vec4([v.x, v.y, v.z, 1.0]);
        (Vec3::new(x, y, z), w)
    }

    /// Transforms a point (assuming w=1). Returns Vec3 (with perspective divide).
    #[inline]
    pub fn transform_point3(&self, v: Vec3) -> Vec3 {
        let (p, w) = self.transform_point3_w(v);
        p / w
    }

    /// Transforms a direction (assuming w=0). Translation is ignored.
    #[inline]
    pub fn transform_vector3(&self, v: Vec3) -> Vec3 {
        let [x, y, z, _] = self.mul_vec4([v.x, v.y, v.z, 0.0]);
        Vec3::new(x, y, z)
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let (s, c) = sub_determinants(self.as_array());
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// General inverse.
    ///
    /// The matrix must be invertible. A singular matrix yields infinite or
    /// NaN elements; use [`Mat4::try_inverse`] to detect that.
    #[inline]
    pub fn inverse(&self) -> Self {
        let m = self.as_array();
        let (s, c) = sub_determinants(m);
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        adjugate(m, &s, &c, 1.0 / det)
    }

    /// Like [`Mat4::inverse`], but rejects singular matrices.
    #[inline]
    pub fn try_inverse(&self) -> Result<Self> {
        let m = self.as_array();
        let (s, c) = sub_determinants(m);
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        let inv_det = 1.0 / det;
        if !inv_det.is_finite() {
            log::debug!("Mat4::try_inverse: singular matrix (det = {det})");
            return Err(MathError::Singular { det });
        }
        Ok(adjugate(m, &s, &c, inv_det))
    }
}

// 2x2 determinants of the top two rows of columns 0-1 (`s`) and the bottom
// two rows of columns 2-3 (`c`), in column-major indexing.
#[inline]
fn sub_determinants(m: &[f32; 16]) -> ([f32; 6], [f32; 6]) {
    let s = [
        m[0] * m[5] - m[4] * m[1],
        m[0] * m[6] - m[4] * m[2],
        m[0] * m[7] - m[4] * m[3],
        m[1] * m[6] - m[5] * m[2],
        m[1] * m[7] - m[5] * m[3],
        m[2] * m[7] - m[6] * m[3],
    ];
    let c = [
        m[8] * m[13] - m[12] * m[9],
        m[8] * m[14] - m[12] * m[10],
        m[8] * m[15] - m[12] * m[11],
        m[9] * m[14] - m[13] * m[10],
        m[9] * m[15] - m[13] * m[11],
        m[10] * m[15] - m[14] * m[11],
    ];
    (s, c)
}

#[inline]
fn adjugate(m: &[f32; 16], s: &[f32; 6], c: &[f32; 6], inv_det: f32) -> Mat4 {
    Mat4::from_cols(
        [
            (m[5] * c[5] - m[6] * c[4] + m[7] * c[3]) * inv_det,
            (-m[1] * c[5] + m[2] * c[4] - m[3] * c[3]) * inv_det,
            (m[13] * s[5] - m[14] * s[4] + m[15] * s[3]) * inv_det,
            (-m[9] * s[5] + m[10] * s[4] - m[11] * s[3]) * inv_det,
        ],
        [
            (-m[4] * c[5] + m[6] * c[2] - m[7] * c[1]) * inv_det,
            (m[0] * c[5] - m[2] * c[2] + m[3] * c[1]) * inv_det,
            (-m[12] * s[5] + m[14] * s[2] - m[15] * s[1]) * inv_det,
            (m[8] * s[5] - m[10] * s[2] + m[11] * s[1]) * inv_det,
        ],
        [
            (m[4] * c[4] - m[5] * c[2] + m[7] * c[0]) * inv_det,
            (-m[0] * c[4] + m[1] * c[2] - m[3] * c[0]) * inv_det,
            (m[12] * s[4] - m[13] * s[2] + m[15] * s[0]) * inv_det,
            (-m[8] * s[4] + m[9] * s[2] - m[11] * s[0]) * inv_det,
        ],
        [
            (-m[4] * c[3] + m[5] * c[1] - m[6] * c[0]) * inv_det,
            (m[0] * c[3] - m[1] * c[1] + m[2] * c[0]) * inv_det,
            (-m[12] * s[3] + m[13] * s[1] - m[14] * s[0]) * inv_det,
            (m[8] * s[3] - m[9] * s[1] + m[10] * s[0]) * inv_det,
        ],
    )
}

impl Mul<Mat4> for Mat4 {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        Self::from_cols(
            self.mul_vec4(rhs.cols[0]),
            self.mul_vec4(rhs.cols[1]),
            self.mul_vec4(rhs.cols[2]),
            self.mul_vec4(rhs.cols[3]),
        )
    }
}

impl MulAssign<Mat4> for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

macro_rules! impl_matrix_traits {
    ($T:ident, $N:literal, $rows:literal) => {
        impl From<[f32; $N]> for $T {
            #[inline]
            fn from(m: [f32; $N]) -> Self {
                Self::from_cols_array(&m)
            }
        }

        impl From<$T> for [f32; $N] {
            #[inline]
            fn from(m: $T) -> Self {
                m.to_cols_array()
            }
        }

        impl ApproxEq for $T {
            #[inline]
            fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
                self.as_array().abs_diff_eq(other.as_array(), eps)
            }
        }

        // Rows in visual order, even though storage is column-major.
        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for i in 0..$rows {
                    if i > 0 {
                        f.write_str(",\n ")?;
                    }
                    let row: [f32; $rows] = self.row(i).into();
                    fmt_row(f, &row)?;
                }
                f.write_str("]")
            }
        }
    };
}

impl_matrix_traits!(Mat3, 9, 3);
impl_matrix_traits!(Mat4, 16, 4);
