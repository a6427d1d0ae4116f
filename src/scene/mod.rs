//! Scene construction utilities
//!
//! This module provides the builder API for describing 3D scenes.

mod scene_builder;

pub use scene_builder::SceneBuilder;
