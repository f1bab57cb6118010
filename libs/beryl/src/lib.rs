//! Column-major vectors, matrices and quaternions for real-time graphics.
//!
//! Every type is a `#[repr(C)]`, `Pod` value that can be handed straight to a
//! GPU buffer. Composition follows the column-vector convention: `a * b`
//! applies `b` first. Positive angles rotate counter-clockwise in a
//! right-handed frame.
//!
//! The plain operations never fail. Degenerate input (zero-length vectors,
//! singular matrices) produces NaN or infinite components. The `try_*`
//! variants check for that case and return [`MathError`] instead.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod mat;
pub mod quat;
pub mod utils;
pub mod vec;

pub use error::{MathError, Result};
pub use mat::{Mat3, Mat4};
pub use quat::Quat;
pub use vec::{Vec2, Vec3};
