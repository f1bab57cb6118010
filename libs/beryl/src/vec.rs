use crate::error::{MathError, Result};
use crate::mat::Mat4;
use crate::quat::Quat;
use crate::utils::{fmt_row, ApproxEq};
use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2-component vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A 3-component vector.
///
/// Laid out as three consecutive `f32`s, so a `&[Vec3]` can be cast to
/// `&[f32]` with `bytemuck::cast_slice` for vertex uploads.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.length_squared())
    }

    /// Scales the vector to unit length.
    ///
    /// A zero-length vector yields non-finite components; see
    /// [`Vec2::try_normalize`] for the checked form.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Like [`Vec2::normalize`], but rejects zero-length input.
    #[inline]
    pub fn try_normalize(self) -> Result<Self> {
        let inv_len = 1.0 / self.length();
        if !inv_len.is_finite() {
            log::debug!("Vec2::try_normalize: rejected {self:?} (length {})", self.length());
            return Err(MathError::ZeroLength);
        }
        Ok(self * inv_len)
    }

    /// Polar angle of the vector, `atan2(y, x)`, in radians.
    #[inline]
    pub fn atan2(self) -> f32 {
        libm::atan2f(self.y, self.x)
    }

    /// Unsigned angle between two vectors in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` so (anti)parallel inputs give
    /// exactly `0` or `PI`. Zero-length input still yields NaN.
    #[inline]
    pub fn angle_to(self, other: Self) -> f32 {
        libm::acosf(self.normalize().dot(other.normalize()).clamp(-1.0, 1.0))
    }

    #[inline]
    pub fn yx(self) -> Self {
        Self::new(self.y, self.x)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Emits Vec2/Vec3 swizzle accessors from component names.
macro_rules! swizzles {
    ($($name:ident => $T:ident($($c:ident),+);)+) => {
        $(
            #[inline]
            pub fn $name(self) -> $T {
                $T::new($(self.$c),+)
            }
        )+
    };
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product: `X.cross(Y) == Z`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.length_squared())
    }

    /// Scales the vector to unit length.
    ///
    /// A zero-length vector yields non-finite components; see
    /// [`Vec3::try_normalize`] for the checked form.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Like [`Vec3::normalize`], but rejects zero-length input.
    #[inline]
    pub fn try_normalize(self) -> Result<Self> {
        let inv_len = 1.0 / self.length();
        if !inv_len.is_finite() {
            log::debug!("Vec3::try_normalize: rejected {self:?} (length {})", self.length());
            return Err(MathError::ZeroLength);
        }
        Ok(self * inv_len)
    }

    /// Unsigned angle between two vectors in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` so (anti)parallel inputs give
    /// exactly `0` or `PI`. Zero-length input still yields NaN.
    #[inline]
    pub fn angle_to(self, other: Self) -> f32 {
        libm::acosf(self.normalize().dot(other.normalize()).clamp(-1.0, 1.0))
    }

    /// Rotates the vector by a unit quaternion using the sandwich product
    /// `q * (v, 0) * conj(q)`.
    #[inline]
    pub fn rotate_by_quat(self, q: Quat) -> Self {
        (q * Quat::new(self.x, self.y, self.z, 0.0) * q.conjugate()).xyz()
    }

    /// Transforms the point `(v, 1)` by `m` and applies the perspective divide.
    #[inline]
    pub fn transform_by_mat4(self, m: Mat4) -> Self {
        m.transform_point3(self)
    }

    /// Transforms the point `(v, 1)` by `m`, returning xyz and `w` undivided.
    #[inline]
    pub fn transform_by_mat4_w(self, m: Mat4) -> (Self, f32) {
        m.transform_point3_w(self)
    }

    swizzles! {
        xy => Vec2(x, y);
        xz => Vec2(x, z);
        yx => Vec2(y, x);
        yz => Vec2(y, z);
        zx => Vec2(z, x);
        zy => Vec2(z, y);
        xyz => Vec3(x, y, z);
        xzy => Vec3(x, z, y);
        yxz => Vec3(y, x, z);
        yzx => Vec3(y, z, x);
        zxy => Vec3(z, x, y);
        zyx => Vec3(z, y, x);
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

macro_rules! impl_ops {
    ($T:ident, $N:literal, $($field:ident),+) => {
        impl Add for $T {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self {
                    $($field: self.$field + other.$field),+
                }
            }
        }

        impl AddAssign for $T {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl Sub for $T {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self {
                    $($field: self.$field - other.$field),+
                }
            }
        }

        impl SubAssign for $T {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl Mul<f32> for $T {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: f32) -> Self {
                Self {
                    $($field: self.$field * scalar),+
                }
            }
        }

        impl MulAssign<f32> for $T {
            #[inline]
            fn mul_assign(&mut self, scalar: f32) {
                *self = *self * scalar;
            }
        }

        impl Mul<$T> for f32 {
            type Output = $T;
            #[inline]
            fn mul(self, vec: $T) -> $T {
                vec * self
            }
        }

        impl Mul for $T { // Component-wise multiplication
             type Output = Self;
             #[inline]
             fn mul(self, other: Self) -> Self {
                 Self {
                     $($field: self.$field * other.$field),+
                 }
             }
        }

        impl MulAssign for $T {
             #[inline]
             fn mul_assign(&mut self, other: Self) {
                 *self = *self * other;
             }
        }

        impl Div<f32> for $T {
            type Output = Self;
            #[inline]
            fn div(self, scalar: f32) -> Self {
                Self {
                    $($field: self.$field / scalar),+
                }
            }
        }

        impl DivAssign<f32> for $T {
            #[inline]
            fn div_assign(&mut self, scalar: f32) {
                *self = *self / scalar;
            }
        }

        impl Div for $T { // Component-wise division, no zero check
             type Output = Self;
             #[inline]
             fn div(self, other: Self) -> Self {
                 Self {
                     $($field: self.$field / other.$field),+
                 }
             }
        }

        impl DivAssign for $T {
             #[inline]
             fn div_assign(&mut self, other: Self) {
                 *self = *self / other;
             }
        }

        impl Neg for $T {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self {
                    $($field: -self.$field),+
                }
            }
        }

        impl From<[f32; $N]> for $T {
            #[inline]
            fn from(a: [f32; $N]) -> Self {
                bytemuck::cast(a)
            }
        }

        impl From<$T> for [f32; $N] {
            #[inline]
            fn from(v: $T) -> Self {
                bytemuck::cast(v)
            }
        }

        impl ApproxEq for $T {
            #[inline]
            fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
                self.as_array().abs_diff_eq(other.as_array(), eps)
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_row(f, self.as_array())
            }
        }
    }
}

impl_ops!(Vec2, 2, x, y);
impl_ops!(Vec3, 3, x, y, z);
