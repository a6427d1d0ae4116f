//! SceneBuilder - Declarative scene construction
//!
//! Collects cameras, lights, and shapes, then renders them into a single
//! scene document.

use std::path::Path;

use scene3d_core::{
    Camera, Color, Light, MaterialRegistry, Placement, SceneDocument, SceneSaveError,
    ShapeInstance, ShapeTemplate,
};
use scene3d_math::Vec3;

/// Builder for constructing 3D scene documents
///
/// Elements keep their insertion order. Each new shape color is assigned the
/// next material ID the moment the shape is added.
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .add_camera(Vec3::new(0.0, 2.0, 0.0), 0.0)
///     .add_light(Vec3::new(0.0, 100.0, 0.0), Color::WHITE)
///     .add_box(Vec3::new(0.0, -25.0, 0.0), 1000.0, 50.0, 1000.0, Color::GRAY)
///     .add_cone(Vec3::new(4.0, 0.0, 0.0), 0.5, 6.0, Color::BLUE);
/// scene.save("myscene.json", "My Scene")?;
/// ```
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    cameras: Vec<Camera>,
    lights: Vec<Light>,
    materials: MaterialRegistry,
    shapes: Vec<ShapeInstance>,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self {
            cameras: Vec::new(),
            lights: Vec::new(),
            materials: MaterialRegistry::new(),
            shapes: Vec::new(),
        }
    }

    /// Create a scene builder with room for `capacity` shapes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Add a camera at `position`, turned `yaw_degrees` about the Y axis
    pub fn add_camera(mut self, position: Vec3, yaw_degrees: f64) -> Self {
        self.cameras.push(Camera::new(position, yaw_degrees));
        self
    }

    /// Add a point light
    ///
    /// Light colors are not materials and never take a material ID.
    pub fn add_light(mut self, position: Vec3, color: Color) -> Self {
        self.lights.push(Light::new(position, color));
        self
    }

    /// Add any shape with an explicit rotation (degrees about X, Y, Z)
    pub fn add_shape(
        mut self,
        center: Vec3,
        template: ShapeTemplate,
        color: Color,
        rotation_degrees: Vec3,
    ) -> Self {
        let material = self.materials.resolve(color);
        let placement = Placement::new(center, rotation_degrees);
        self.shapes.push(ShapeInstance::new(template, placement, material));
        self
    }

    /// Add an unrotated box centered at `center`
    pub fn add_box(self, center: Vec3, length: f64, width: f64, height: f64, color: Color) -> Self {
        self.add_box_rotated(center, length, width, height, color, Vec3::ZERO)
    }

    /// Add a box centered at `center`, rotated about its local axes
    pub fn add_box_rotated(
        self,
        center: Vec3,
        length: f64,
        width: f64,
        height: f64,
        color: Color,
        rotation_degrees: Vec3,
    ) -> Self {
        self.add_shape(center, ShapeTemplate::cuboid(length, width, height), color, rotation_degrees)
    }

    /// Add an unrotated cone centered at `center`
    pub fn add_cone(self, center: Vec3, radius: f64, height: f64, color: Color) -> Self {
        self.add_cone_rotated(center, radius, height, color, Vec3::ZERO)
    }

    /// Add a cone centered at `center`, rotated about its local axes
    pub fn add_cone_rotated(
        self,
        center: Vec3,
        radius: f64,
        height: f64,
        color: Color,
        rotation_degrees: Vec3,
    ) -> Self {
        self.add_shape(center, ShapeTemplate::cone(radius, height), color, rotation_degrees)
    }

    /// Add an unrotated sphere centered at `center`
    pub fn add_sphere(self, center: Vec3, radius: f64, color: Color) -> Self {
        self.add_sphere_rotated(center, radius, color, Vec3::ZERO)
    }

    /// Add a sphere centered at `center`, rotated about its local axes
    pub fn add_sphere_rotated(
        self,
        center: Vec3,
        radius: f64,
        color: Color,
        rotation_degrees: Vec3,
    ) -> Self {
        self.add_shape(center, ShapeTemplate::sphere(radius), color, rotation_degrees)
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn shapes(&self) -> &[ShapeInstance] {
        &self.shapes
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Render everything added so far into a document named `name`
    pub fn to_document(&self, name: &str) -> SceneDocument {
        SceneDocument {
            name: name.to_string(),
            materials: (&self.materials).into(),
            lights: self.lights.iter().map(Light::to_entry).collect(),
            cameras: self.cameras.iter().map(Camera::to_entry).collect(),
            children: self.shapes.iter().map(ShapeInstance::to_node).collect(),
        }
    }

    /// Render the scene to a JSON string
    pub fn to_json(&self, name: &str, pretty: bool) -> Result<String, serde_json::Error> {
        self.to_document(name).to_json(pretty)
    }

    /// Save the scene as compact JSON
    ///
    /// On failure the error is logged and returned; the builder is untouched
    /// and the save can be retried with another path.
    pub fn save<P: AsRef<Path>>(&self, path: P, name: &str) -> Result<(), SceneSaveError> {
        self.save_with(path, name, false)
    }

    /// Save the scene, optionally pretty-printed
    pub fn save_with<P: AsRef<Path>>(
        &self,
        path: P,
        name: &str,
        pretty: bool,
    ) -> Result<(), SceneSaveError> {
        let path = path.as_ref();
        match self.to_document(name).save(path, pretty) {
            Ok(()) => {
                log::info!(
                    "Saved scene '{}' to {} ({} materials, {} lights, {} cameras, {} shapes)",
                    name,
                    path.display(),
                    self.materials.len(),
                    self.lights.len(),
                    self.cameras.len(),
                    self.shapes.len(),
                );
                Ok(())
            }
            Err(e) => {
                log::error!("{}", e);
                Err(e)
            }
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene3d_core::MaterialId;

    #[test]
    fn test_empty_scene() {
        let builder = SceneBuilder::new();
        assert_eq!(builder.shape_count(), 0);
        assert!(builder.materials().is_empty());

        let doc = builder.to_document("Empty");
        assert!(doc.children.is_empty());
        assert!(doc.materials.is_empty());
    }

    #[test]
    fn test_shape_colors_become_materials() {
        let builder = SceneBuilder::new()
            .add_box(Vec3::new(0.0, -25.0, 0.0), 1000.0, 50.0, 1000.0, Color::GRAY)
            .add_cone(Vec3::new(4.0, 0.0, 0.0), 0.5, 6.0, Color::BLUE)
            .add_sphere(Vec3::ZERO, 1.0, Color::GRAY);

        assert_eq!(builder.materials().len(), 2);
        let ids: Vec<MaterialId> = builder.shapes().iter().map(|s| s.material).collect();
        assert_eq!(ids, vec![MaterialId(0), MaterialId(1), MaterialId(0)]);
    }

    #[test]
    fn test_lights_do_not_register_materials() {
        let builder = SceneBuilder::new()
            .add_light(Vec3::new(0.0, 100.0, 0.0), Color::WHITE)
            .add_box(Vec3::ZERO, 1.0, 1.0, 1.0, Color::RED);

        assert_eq!(builder.materials().get(Color::WHITE), None);
        assert_eq!(builder.materials().get(Color::RED), Some(MaterialId(0)));
    }

    #[test]
    fn test_rotation_defaults_to_zero() {
        let builder = SceneBuilder::new()
            .add_cone(Vec3::new(1.0, 2.0, 3.0), 0.5, 6.0, Color::BLUE)
            .add_cone_rotated(Vec3::new(1.0, 2.0, 3.0), 0.5, 6.0, Color::BLUE, Vec3::new(0.0, 0.0, 90.0));

        let shapes = builder.shapes();
        assert_eq!(shapes[0].placement.rotation_degrees, Vec3::ZERO);
        assert_eq!(shapes[1].placement.rotation_degrees, Vec3::new(0.0, 0.0, 90.0));
        assert_eq!(shapes[0].placement.position, shapes[1].placement.position);
    }

    #[test]
    fn test_insertion_order() {
        let builder = SceneBuilder::with_capacity(3)
            .add_camera(Vec3::new(1.0, 0.0, 0.0), 0.0)
            .add_camera(Vec3::new(2.0, 0.0, 0.0), 90.0)
            .add_sphere(Vec3::ZERO, 1.0, Color::RED)
            .add_box(Vec3::ZERO, 1.0, 1.0, 1.0, Color::RED)
            .add_cone(Vec3::ZERO, 1.0, 1.0, Color::RED);

        let kinds: Vec<&str> = builder.shapes().iter().map(|s| s.template.kind()).collect();
        assert_eq!(kinds, vec!["sphere", "box", "cone"]);
        assert_eq!(builder.cameras()[1].position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(builder.cameras()[1].yaw_degrees, 90.0);
    }

    #[test]
    fn test_to_json_is_repeatable() {
        let builder = SceneBuilder::new()
            .add_light(Vec3::new(0.0, 10.0, 0.0), Color::WHITE)
            .add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, Color::GREEN);

        let first = builder.to_json("Repeat", false).unwrap();
        let second = builder.to_json("Repeat", false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pretty_and_compact_saves_match() {
        let builder = SceneBuilder::new()
            .add_camera(Vec3::new(0.0, 2.0, 0.0), 45.0)
            .add_light(Vec3::new(0.0, 100.0, 0.0), Color::WHITE)
            .add_box_rotated(Vec3::new(1.0, 0.0, 0.0), 2.0, 3.0, 4.0, Color::RED, Vec3::new(10.0, 20.0, 30.0))
            .add_sphere(Vec3::ZERO, 1.0, Color::BLUE);

        let dir = std::env::temp_dir().join("scene3d_builder_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let pretty_path = dir.join("pretty.json");
        let compact_path = dir.join("compact.json");

        builder.save_with(&pretty_path, "Formats", true).unwrap();
        builder.save_with(&compact_path, "Formats", false).unwrap();

        let pretty_text = std::fs::read_to_string(&pretty_path).unwrap();
        let compact_text = std::fs::read_to_string(&compact_path).unwrap();
        let _ = std::fs::remove_file(&pretty_path);
        let _ = std::fs::remove_file(&compact_path);

        assert!(pretty_text.contains('\n'));
        assert!(!compact_text.contains('\n'));

        let pretty: serde_json::Value = serde_json::from_str(&pretty_text).unwrap();
        let compact: serde_json::Value = serde_json::from_str(&compact_text).unwrap();
        assert_eq!(pretty, compact);
    }
}
