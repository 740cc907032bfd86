/// Scene graph provider: the interface the fitter mutates scenes through.

use glam::{Mat4, Vec3};
use crate::camera::{CameraLens, RenderFrame};
use crate::math::Transform;
use super::object::ObjectKey;

/// Read/write access to objects, cameras and the render frame.
///
/// `Scene` is the in-memory implementation. Hosts embedding the fitter can
/// implement this trait over their own object storage.
pub trait SceneGraph {
    /// Whether the key refers to a live object
    fn contains(&self, key: ObjectKey) -> bool;

    /// Object name
    fn name(&self, key: ObjectKey) -> Option<&str>;

    /// Local transform
    fn transform(&self, key: ObjectKey) -> Option<Transform>;

    /// Replace the local transform. Returns false if the key is invalid.
    fn set_transform(&mut self, key: ObjectKey, transform: Transform) -> bool;

    /// Parent of the object (`None` for a missing or unparented object)
    fn parent(&self, key: ObjectKey) -> Option<ObjectKey>;

    /// Set or clear the parent. The local transform is kept as-is.
    /// Returns false if either key is invalid or the link would form a cycle.
    fn set_parent(&mut self, key: ObjectKey, parent: Option<ObjectKey>) -> bool;

    /// World matrix (ancestors' local matrices applied)
    fn world_matrix(&self, key: ObjectKey) -> Option<Mat4>;

    /// Local-space vertices, if the object has mesh data
    fn local_vertices(&self, key: ObjectKey) -> Option<&[Vec3]>;

    /// Lens, if the object is a camera
    fn camera_lens(&self, key: ObjectKey) -> Option<&CameraLens>;

    /// Output frame used for projection
    fn render_frame(&self) -> RenderFrame;

    /// Whether `ancestor` is `key` itself or one of its parents
    fn is_ancestor(&self, ancestor: ObjectKey, key: ObjectKey) -> bool {
        let mut current = Some(key);
        while let Some(k) = current {
            if k == ancestor {
                return true;
            }
            current = self.parent(k);
        }
        false
    }

    /// World matrix of the parent, identity when unparented
    fn parent_world_matrix(&self, key: ObjectKey) -> Mat4 {
        self.parent(key)
            .and_then(|parent| self.world_matrix(parent))
            .unwrap_or(Mat4::IDENTITY)
    }

    /// Place the object at `world` by solving for its local transform
    /// under the current parent.
    fn set_world_matrix(&mut self, key: ObjectKey, world: Mat4) -> bool {
        let local = self.parent_world_matrix(key).inverse() * world;
        self.set_transform(key, Transform::from_matrix(&local))
    }
}
