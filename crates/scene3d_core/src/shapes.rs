//! Shape templates
//!
//! Each variant stores the local-space geometry of one primitive. Position,
//! rotation, and material live outside the template and are attached when a
//! shape is added to a scene.

use serde::{Serialize, Deserialize};

/// Geometry of a primitive shape
///
/// Serializes internally tagged, e.g. `{"type":"cone","radius":0.5,"height":6.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeTemplate {
    /// Axis-aligned box centered at the origin
    Box {
        /// Extent along X
        length: f64,
        /// Extent along Y
        width: f64,
        /// Extent along Z
        height: f64,
    },
    /// Cone standing on the Y axis
    Cone {
        radius: f64,
        height: f64,
    },
    /// Sphere centered at the origin
    Sphere {
        radius: f64,
    },
}

impl ShapeTemplate {
    /// Create a box template
    pub fn cuboid(length: f64, width: f64, height: f64) -> Self {
        ShapeTemplate::Box { length, width, height }
    }

    /// Create a cone template
    pub fn cone(radius: f64, height: f64) -> Self {
        ShapeTemplate::Cone { radius, height }
    }

    /// Create a sphere template
    pub fn sphere(radius: f64) -> Self {
        ShapeTemplate::Sphere { radius }
    }

    /// The `type` tag written to the scene document
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeTemplate::Box { .. } => "box",
            ShapeTemplate::Cone { .. } => "cone",
            ShapeTemplate::Sphere { .. } => "sphere",
        }
    }
}
