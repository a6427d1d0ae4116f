//! 3D Mathematics Library
//!
//! This crate provides the vector, matrix, and rotation types scene3d uses to
//! place shapes and cameras.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major homogeneous matrix
//! - [`Quat`] - Unit quaternion (camera yaw)

mod vec3;
mod quat;
pub mod mat4;

pub use vec3::Vec3;
pub use quat::Quat;
pub use mat4::{Mat4, degrees_to_radians};
