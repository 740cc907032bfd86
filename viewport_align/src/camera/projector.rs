/// Projection service: maps world points to frame space and back.
///
/// The fitter treats the projector as an opaque pure function so that
/// callers can substitute their host application's own mapping.

use glam::{Mat4, Vec2, Vec3};
use crate::math::Transform;
use super::frame::{FramePoint, RenderFrame};
use super::lens::CameraLens;

/// World ↔ frame-space mapping for a camera.
pub trait FrameProjector: Send + Sync {
    /// Project a world point into the camera's frame.
    fn project(
        &self,
        point: Vec3,
        camera_world: &Mat4,
        lens: &CameraLens,
        frame: &RenderFrame,
    ) -> FramePoint;

    /// World point that projects to `point`.
    fn unproject(
        &self,
        point: FramePoint,
        camera_world: &Mat4,
        lens: &CameraLens,
        frame: &RenderFrame,
    ) -> Vec3;
}

/// Standard view-frame projection.
///
/// The point is brought into camera space (camera matrix with its scale
/// removed), depth is the distance along the camera's -Z axis, and u/v are
/// the position inside the lens view frame. For perspective lenses the view
/// frame is scaled by depth; a point at exactly zero depth maps to the
/// frame centre.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewFrameProjector;

impl ViewFrameProjector {
    pub fn new() -> Self {
        Self
    }

    /// Frame bounds in camera space at the given depth.
    fn bounds_at(lens: &CameraLens, frame: &RenderFrame, depth: f32) -> (Vec2, Vec2) {
        let view = lens.view_frame(frame);
        let scale = if lens.is_perspective() { depth } else { 1.0 };
        let a = view.min() * scale;
        let b = view.max() * scale;
        (a.min(b), a.max(b))
    }
}

fn camera_matrix(camera_world: &Mat4) -> Mat4 {
    Transform::from_matrix(camera_world).normalized().to_matrix()
}

impl FrameProjector for ViewFrameProjector {
    fn project(
        &self,
        point: Vec3,
        camera_world: &Mat4,
        lens: &CameraLens,
        frame: &RenderFrame,
    ) -> FramePoint {
        let local = camera_matrix(camera_world).inverse().transform_point3(point);
        let depth = -local.z;

        if lens.is_perspective() && depth == 0.0 {
            return FramePoint::new(0.5, 0.5, 0.0);
        }

        let (lo, hi) = Self::bounds_at(lens, frame, depth);
        let size = hi - lo;
        FramePoint::new(
            (local.x - lo.x) / size.x,
            (local.y - lo.y) / size.y,
            depth,
        )
    }

    fn unproject(
        &self,
        point: FramePoint,
        camera_world: &Mat4,
        lens: &CameraLens,
        frame: &RenderFrame,
    ) -> Vec3 {
        let (lo, hi) = Self::bounds_at(lens, frame, point.depth);
        let xy = lo + (hi - lo) * point.uv();
        camera_matrix(camera_world).transform_point3(Vec3::new(xy.x, xy.y, -point.depth))
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
