use thiserror::Error;

/// Rejections reported by the checked (`try_*`) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
    #[error("matrix is singular (determinant {det})")]
    Singular { det: f32 },
}

pub type Result<T> = core::result::Result<T, MathError>;
