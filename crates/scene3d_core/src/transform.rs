//! Shape placement
//!
//! A placement is a translation plus three rotations in degrees. Points are
//! mapped as `T * Rx * Ry * Rz * p`: the Z rotation is applied first, then Y,
//! then X, then the translation. The consuming renderer depends on this
//! order, so the document spells out one node per factor.

use scene3d_math::{mat4, Mat4, Vec3};
use crate::document::{LeafShape, TransformNode};

/// Position and per-axis rotation of a shape
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    /// Center of the shape in world space
    pub position: Vec3,
    /// Rotations about X, Y, Z in degrees
    pub rotation_degrees: Vec3,
}

impl Placement {
    pub fn new(position: Vec3, rotation_degrees: Vec3) -> Self {
        Self { position, rotation_degrees }
    }

    /// Unrotated placement at `position`
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    /// The four factors, outermost first: `[T, Rx, Ry, Rz]`
    pub fn factors(&self) -> [Mat4; 4] {
        [
            mat4::translation(self.position),
            mat4::rotation_x(self.rotation_degrees.x),
            mat4::rotation_y(self.rotation_degrees.y),
            mat4::rotation_z(self.rotation_degrees.z),
        ]
    }

    /// Composed matrix `T * Rx * Ry * Rz`
    pub fn matrix(&self) -> Mat4 {
        let [t, rx, ry, rz] = self.factors();
        mat4::mul(t, mat4::mul(rx, mat4::mul(ry, rz)))
    }

    /// Map a point from shape-local space to world space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        mat4::transform_point(self.matrix(), p)
    }

    /// Nest `leaf` inside one transform node per factor
    pub fn to_hierarchy(&self, leaf: LeafShape) -> TransformNode {
        let [t, rx, ry, rz] = self.factors();
        let node = TransformNode::with_shapes(rz, vec![leaf]);
        let node = TransformNode::with_children(ry, vec![node]);
        let node = TransformNode::with_children(rx, vec![node]);
        TransformNode::with_children(t, vec![node])
    }
}
