/// Scene: in-memory scene graph.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys and a name
/// index for lookup. Names are unique: adding an object whose name is
/// taken appends a `.001`, `.002`, … suffix.

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::camera::{CameraLens, RenderFrame};
use crate::math::Transform;
use super::graph::SceneGraph;
use super::object::{ObjectKey, SceneObject};

/// A scene containing objects and cameras.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Objects stored in a slot map for O(1) insert/remove
    objects: SlotMap<ObjectKey, SceneObject>,
    /// Name → key index
    names: FxHashMap<String, ObjectKey>,
    /// Camera used when none is given explicitly
    active_camera: Option<ObjectKey>,
    /// Output frame for projection
    render_frame: RenderFrame,
}

impl Scene {
    /// Create an empty scene rendering into `render_frame`
    pub fn new(render_frame: RenderFrame) -> Self {
        Self {
            objects: SlotMap::with_key(),
            names: FxHashMap::default(),
            active_camera: None,
            render_frame,
        }
    }

    /// Add an object and return its key.
    ///
    /// If the name is already used, the object is renamed with the first
    /// free numeric suffix.
    pub fn add_object(&mut self, mut object: SceneObject) -> ObjectKey {
        let name = self.unique_name(object.name());
        if name != object.name() {
            crate::align_debug!("valign::scene", "Renamed '{}' to '{}'", object.name(), name);
            object.set_name(name.clone());
        }
        object.set_parent_key(None);
        let key = self.objects.insert(object);
        self.names.insert(name, key);
        key
    }

    /// Remove an object.
    ///
    /// Children are unparented and keep their world placement. Clears the
    /// active camera if it was this object.
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<SceneObject> {
        if !self.objects.contains_key(key) {
            return None;
        }

        let children: Vec<ObjectKey> = self.objects
            .iter()
            .filter(|(_, o)| o.parent() == Some(key))
            .map(|(k, _)| k)
            .collect();
        for child in children {
            if let Some(world) = self.world_matrix(child) {
                if let Some(object) = self.objects.get_mut(child) {
                    object.set_parent_key(None);
                    object.set_transform(Transform::from_matrix(&world));
                }
            }
        }

        if self.active_camera == Some(key) {
            self.active_camera = None;
        }

        let object = self.objects.remove(key)?;
        self.names.remove(object.name());
        Some(object)
    }

    /// Get an object by key
    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Get a mutable object by key
    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Look up an object by name
    pub fn find(&self, name: &str) -> Option<ObjectKey> {
        self.names.get(name).copied()
    }

    /// Iterate over all objects
    pub fn objects(&self) -> impl Iterator<Item = (ObjectKey, &SceneObject)> + '_ {
        self.objects.iter()
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Set the active camera. Returns false if the key is not a camera.
    pub fn set_active_camera(&mut self, key: ObjectKey) -> bool {
        match self.objects.get(key) {
            Some(object) if object.is_camera() => {
                self.active_camera = Some(key);
                true
            }
            _ => false,
        }
    }

    /// Camera used when none is given explicitly
    pub fn active_camera(&self) -> Option<ObjectKey> {
        self.active_camera
    }

    /// Replace the output frame used for projection
    pub fn set_render_frame(&mut self, frame: RenderFrame) {
        self.render_frame = frame;
    }

    /// World-space vertex positions of a mesh object
    pub fn world_vertices(&self, key: ObjectKey) -> Option<Vec<Vec3>> {
        let world = self.world_matrix(key)?;
        let vertices = self.objects.get(key)?.vertices()?;
        Some(vertices.iter().map(|v| world.transform_point3(*v)).collect())
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.names.contains_key(base) {
            return base.to_string();
        }
        (1u32..)
            .map(|n| format!("{}.{:03}", base, n))
            .find(|candidate| !self.names.contains_key(candidate))
            .unwrap_or_else(|| base.to_string())
    }
}

impl SceneGraph for Scene {
    fn contains(&self, key: ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    fn name(&self, key: ObjectKey) -> Option<&str> {
        self.objects.get(key).map(|o| o.name())
    }

    fn transform(&self, key: ObjectKey) -> Option<Transform> {
        self.objects.get(key).map(|o| *o.transform())
    }

    fn set_transform(&mut self, key: ObjectKey, transform: Transform) -> bool {
        match self.objects.get_mut(key) {
            Some(object) => {
                object.set_transform(transform);
                true
            }
            None => false,
        }
    }

    fn parent(&self, key: ObjectKey) -> Option<ObjectKey> {
        self.objects.get(key).and_then(|o| o.parent())
    }

    fn set_parent(&mut self, key: ObjectKey, parent: Option<ObjectKey>) -> bool {
        if !self.objects.contains_key(key) {
            return false;
        }
        if let Some(p) = parent {
            if !self.objects.contains_key(p) || self.is_ancestor(key, p) {
                crate::align_warn!("valign::scene", "Refused parent link that would form a cycle or reference a missing object");
                return false;
            }
        }
        if let Some(object) = self.objects.get_mut(key) {
            object.set_parent_key(parent);
        }
        true
    }

    fn world_matrix(&self, key: ObjectKey) -> Option<Mat4> {
        let mut object = self.objects.get(key)?;
        let mut matrix = object.transform().to_matrix();
        // set_parent refuses cycles, so this walk terminates
        while let Some(parent) = object.parent() {
            object = self.objects.get(parent)?;
            matrix = object.transform().to_matrix() * matrix;
        }
        Some(matrix)
    }

    fn local_vertices(&self, key: ObjectKey) -> Option<&[Vec3]> {
        self.objects.get(key).and_then(|o| o.vertices())
    }

    fn camera_lens(&self, key: ObjectKey) -> Option<&CameraLens> {
        self.objects.get(key).and_then(|o| o.lens())
    }

    fn render_frame(&self) -> RenderFrame {
        self.render_frame
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
