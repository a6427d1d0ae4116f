//! Unit quaternions
//!
//! Cameras only ever turn about the vertical axis, so the constructor
//! surface is limited to yaw.

use serde::Serialize;
use crate::Vec3;
use crate::mat4::degrees_to_radians;

/// Quaternion with vector part (x, y, z) and scalar part w
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "[f64; 4]")]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation about +Y by `degrees`: `(0, sin(θ/2), 0, cos(θ/2))`
    pub fn from_yaw_degrees(degrees: f64) -> Self {
        let (sh, ch) = (degrees_to_radians(degrees) / 2.0).sin_cos();
        Self::new(0.0, sh, 0.0, ch)
    }

    /// Components in (x, y, z, w) order
    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Rotate a vector by this quaternion (assumed unit length)
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let q = Vec3::new(self.x, self.y, self.z);
        let t = q.cross(v) * 2.0;
        v + t * self.w + q.cross(t)
    }
}

impl From<Quat> for [f64; 4] {
    fn from(q: Quat) -> Self {
        q.to_array()
    }
}
