//! scene3d - scene description authoring
//!
//! Describe cameras, lights, and primitive shapes in code and write them out
//! as a JSON scene document for an external renderer.

pub mod config;
pub mod scene;

pub use scene::SceneBuilder;
pub use scene3d_core::{Color, SceneDocument, SceneSaveError, ShapeTemplate, Vec3};
