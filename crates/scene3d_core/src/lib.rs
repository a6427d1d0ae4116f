//! Core types for scene3d
//!
//! This crate provides the scene model and the JSON document it turns into:
//!
//! - [`Color`] / [`MaterialRegistry`] - Diffuse colors deduplicated into materials
//! - [`ShapeTemplate`] - Box, cone, and sphere geometry
//! - [`Placement`] - Translation plus X/Y/Z rotations of a shape
//! - [`Camera`], [`Light`], [`ShapeInstance`] - Scene elements
//! - [`SceneDocument`] - The serializable document written to disk

mod material;
mod shapes;
mod transform;
mod elements;
pub mod document;

pub use material::{Color, ColorKey, MaterialId, MaterialRegistry};
pub use shapes::ShapeTemplate;
pub use transform::Placement;
pub use elements::{Camera, Light, ShapeInstance};
pub use document::{SceneDocument, SceneSaveError, MaterialTable, TransformNode, LeafShape};

// Re-export commonly used types from scene3d_math for convenience
pub use scene3d_math::{Vec3, Quat, Mat4};
