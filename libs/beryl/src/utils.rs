use core::f32::consts::PI;

/// Tolerance used by [`ApproxEq::approx_eq`].
pub const DEFAULT_EPSILON: f32 = 1e-5;

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Componentwise absolute-difference comparison.
pub trait ApproxEq {
    /// True when every component differs by at most `eps`.
    fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool;

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, DEFAULT_EPSILON)
    }
}

impl ApproxEq for f32 {
    #[inline]
    fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        libm::fabsf(self - other) <= eps
    }
}

impl<const N: usize> ApproxEq for [f32; N] {
    #[inline]
    fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.abs_diff_eq(b, eps))
    }
}

/// Writes `values` as one bracketed row, honouring the formatter precision.
pub(crate) fn fmt_row(f: &mut core::fmt::Formatter<'_>, values: &[f32]) -> core::fmt::Result {
    let precision = f.precision().unwrap_or(6);
    f.write_str("[")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{:.*}", precision, v)?;
    }
    f.write_str("]")
}
