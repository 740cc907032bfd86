/// Scene objects: meshes, cameras and empties.

use glam::Vec3;
use slotmap::new_key_type;
use crate::camera::CameraLens;
use crate::material::Material;
use crate::math::Transform;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a SceneObject within a Scene.
    ///
    /// Keys remain valid even after other objects are removed.
    pub struct ObjectKey;
}

// ===== SCENE OBJECT =====

/// A named entity with a local transform and optional mesh, lens and material.
///
/// An object with a lens is a camera. An object may be both a mesh and a
/// camera, in which case both roles are available.
#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    transform: Transform,
    parent: Option<ObjectKey>,
    vertices: Option<Vec<Vec3>>,
    lens: Option<CameraLens>,
    material: Option<Material>,
}

impl SceneObject {
    /// Object without geometry
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            parent: None,
            vertices: None,
            lens: None,
            material: None,
        }
    }

    /// Mesh object with vertices in local space
    pub fn mesh(name: impl Into<String>, vertices: Vec<Vec3>) -> Self {
        Self { vertices: Some(vertices), ..Self::empty(name) }
    }

    /// Camera object
    pub fn camera(name: impl Into<String>, lens: CameraLens) -> Self {
        Self { lens: Some(lens), ..Self::empty(name) }
    }

    /// Builder: set the local transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder: attach a material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local transform (relative to the parent, or world if unparented)
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn parent(&self) -> Option<ObjectKey> {
        self.parent
    }

    /// Local-space vertex positions, if the object has mesh data
    pub fn vertices(&self) -> Option<&[Vec3]> {
        self.vertices.as_deref()
    }

    /// Lens, if the object is a camera
    pub fn lens(&self) -> Option<&CameraLens> {
        self.lens.as_ref()
    }

    pub fn is_camera(&self) -> bool {
        self.lens.is_some()
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    pub fn material_mut(&mut self) -> Option<&mut Material> {
        self.material.as_mut()
    }

    // ===== SETTERS =====

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn set_vertices(&mut self, vertices: Option<Vec<Vec3>>) {
        self.vertices = vertices;
    }

    pub fn set_material(&mut self, material: Option<Material>) {
        self.material = material;
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_parent_key(&mut self, parent: Option<ObjectKey>) {
        self.parent = parent;
    }
}
