//! Cameras, lights, and placed shapes

use scene3d_math::{Quat, Vec3};
use crate::{Color, MaterialId, Placement, ShapeTemplate};
use crate::document::{CameraEntry, LeafShape, LightEntry, TransformNode};

/// A camera at a position, turned about the vertical axis
///
/// Only yaw is supported; the consuming renderer has no tilt or roll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Rotation about +Y in degrees
    pub yaw_degrees: f64,
}

impl Camera {
    pub fn new(position: Vec3, yaw_degrees: f64) -> Self {
        Self { position, yaw_degrees }
    }

    /// Orientation as a half-angle quaternion about Y
    pub fn rotation(&self) -> Quat {
        Quat::from_yaw_degrees(self.yaw_degrees)
    }

    pub fn to_entry(&self) -> CameraEntry {
        CameraEntry {
            pos: self.position,
            rot: self.rotation(),
        }
    }
}

/// A point light
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }

    pub fn to_entry(&self) -> LightEntry {
        LightEntry {
            pos: self.position,
            color: self.color,
        }
    }
}

/// A shape placed in the scene with its material already resolved
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeInstance {
    pub template: ShapeTemplate,
    pub placement: Placement,
    pub material: MaterialId,
}

impl ShapeInstance {
    pub fn new(template: ShapeTemplate, placement: Placement, material: MaterialId) -> Self {
        Self { template, placement, material }
    }

    /// Leaf object for the innermost transform node
    pub fn leaf(&self) -> LeafShape {
        LeafShape {
            shape: self.template,
            material: self.material.name(),
        }
    }

    /// Full translation/rotation chain wrapping this shape
    pub fn to_node(&self) -> TransformNode {
        self.placement.to_hierarchy(self.leaf())
    }
}
