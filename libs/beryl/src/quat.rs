use crate::error::{MathError, Result};
use crate::mat::Mat4;
use crate::utils::{fmt_row, ApproxEq};
use crate::vec::Vec3;
use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use core::fmt;
use core::ops::{Mul, MulAssign};

/// A quaternion `(x, y, z, w)` with vector part `(x, y, z)` and scalar part `w`.
///
/// Rotation quaternions must be unit length. Nothing in this module
/// renormalizes on its own; call [`Quat::normalize`] when drift matters.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle_radians` about `axis`. The axis is divided by its
    /// length, so a zero axis yields NaN components.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let (s, c) = libm::sincosf(angle_radians * 0.5);
        let v = axis * (s / axis.length());
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: c,
        }
    }

    /// Like [`Quat::from_axis_angle`], but rejects a zero-length axis.
    #[inline]
    pub fn try_from_axis_angle(axis: Vec3, angle_radians: f32) -> Result<Self> {
        let inv_len = 1.0 / axis.length();
        if !inv_len.is_finite() {
            log::debug!("Quat::try_from_axis_angle: zero-length axis {axis:?}");
            return Err(MathError::ZeroLength);
        }
        let (s, c) = libm::sincosf(angle_radians * 0.5);
        let v = axis * (s * inv_len);
        Ok(Self::new(v.x, v.y, v.z, c))
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.length_squared())
    }

    #[inline]
    pub fn normalize(self) -> Self {
        let inv_len = 1.0 / self.length();
        Self {
            x: self.x * inv_len,
            y: self.y * inv_len,
            z: self.z * inv_len,
            w: self.w * inv_len,
        }
    }

    /// The inverse rotation, provided `self` is unit length.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Rotates `v` by this quaternion (`q * (v, 0) * conj(q)`).
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        v.rotate_by_quat(self)
    }

    /// Equivalent rotation matrix. Orthonormal only for unit quaternions.
    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;

        let xx = self.x * x2;
        let xy = self.x * y2;
        let xz = self.x * z2;

        let yy = self.y * y2;
        let yz = self.y * z2;
        let zz = self.z * z2;

        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Mat4::from_cols(
            [1.0 - (yy + zz), xy + wz, xz - wy, 0.0],
            [xy - wz, 1.0 - (xx + zz), yz + wx, 0.0],
            [xz + wy, yz - wx, 1.0 - (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// Hamilton product. `(a * b)` rotates by `b` first, then `a`.
impl Mul<Quat> for Quat {
    type Output = Quat;
    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quat> for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: Quat) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        self.rotate(v)
    }
}

impl From<[f32; 4]> for Quat {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        bytemuck::cast(a)
    }
}

impl From<Quat> for [f32; 4] {
    #[inline]
    fn from(q: Quat) -> Self {
        bytemuck::cast(q)
    }
}

impl ApproxEq for Quat {
    #[inline]
    fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        self.as_array().abs_diff_eq(other.as_array(), eps)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_row(f, self.as_array())
    }
}
