//! Scene document serialization
//!
//! The JSON layout consumed by the renderer. Documents are built as typed
//! values and written in a single serde pass; field order in these structs is
//! the key order on the wire.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use scene3d_math::{Quat, Vec3};
use crate::{Color, MaterialId, MaterialRegistry, ShapeTemplate};

/// Top-level scene document
#[derive(Debug, Clone, Serialize)]
pub struct SceneDocument {
    pub name: String,
    pub materials: MaterialTable,
    pub lights: Vec<LightEntry>,
    pub cameras: Vec<CameraEntry>,
    pub children: Vec<TransformNode>,
}

impl SceneDocument {
    /// Serialize to a JSON string
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Write the document to a JSON file
    ///
    /// Serialization happens before the destination is touched. The write is
    /// not atomic: a failed write may leave a partial file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<(), SceneSaveError> {
        let path = path.as_ref();
        let contents = self.to_json(pretty)?;
        fs::write(path, contents).map_err(|source| SceneSaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Materials keyed by `color<ID>`, written in ID order
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    entries: Vec<(MaterialId, Color)>,
}

impl MaterialTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&MaterialRegistry> for MaterialTable {
    fn from(registry: &MaterialRegistry) -> Self {
        Self {
            entries: registry.iter().collect(),
        }
    }
}

/// Diffuse-only material
#[derive(Debug, Clone, Copy, Serialize)]
struct MaterialEntry {
    kd: Color,
}

impl Serialize for MaterialTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, color) in &self.entries {
            map.serialize_entry(&id.name(), &MaterialEntry { kd: *color })?;
        }
        map.end()
    }
}

/// `{"pos": [x, y, z], "color": [r, g, b]}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightEntry {
    pub pos: Vec3,
    pub color: Color,
}

/// `{"pos": [x, y, z], "rot": [x, y, z, w]}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraEntry {
    pub pos: Vec3,
    pub rot: Quat,
}

/// Innermost shape object: geometry fields plus a material reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafShape {
    #[serde(flatten)]
    pub shape: ShapeTemplate,
    pub material: String,
}

/// What a transform node wraps
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeContent {
    Children(Vec<TransformNode>),
    Shapes(Vec<LeafShape>),
}

/// One level of the scene graph, with its matrix flattened row by row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformNode {
    pub transform: [f64; 16],
    #[serde(flatten)]
    pub content: NodeContent,
}

impl TransformNode {
    pub fn with_children(matrix: scene3d_math::Mat4, children: Vec<TransformNode>) -> Self {
        Self {
            transform: scene3d_math::mat4::to_row_major(matrix),
            content: NodeContent::Children(children),
        }
    }

    pub fn with_shapes(matrix: scene3d_math::Mat4, shapes: Vec<LeafShape>) -> Self {
        Self {
            transform: scene3d_math::mat4::to_row_major(matrix),
            content: NodeContent::Shapes(shapes),
        }
    }
}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// The destination could not be opened or written
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// Serialization error
    Serialize(serde_json::Error),
}

impl From<serde_json::Error> for SceneSaveError {
    fn from(e: serde_json::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io { path, source } => {
                write!(f, "Could not open {}: {}", path.display(), source)
            }
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneSaveError::Io { source, .. } => Some(source),
            SceneSaveError::Serialize(e) => Some(e),
        }
    }
}
