use glam::{Mat4, Quat, Vec2, Vec3};
use crate::camera::{CameraLens, FramePoint, RenderFrame, SensorFit};
use super::*;

const EPSILON: f32 = 1e-5;

fn square_frame() -> RenderFrame {
    RenderFrame::new(1000, 1000)
}

/// 90° lens: the view frame at unit distance spans [-1, 1].
fn wide_lens() -> CameraLens {
    CameraLens::perspective(std::f32::consts::FRAC_PI_2)
}

fn assert_frame_point(actual: FramePoint, u: f32, v: f32, depth: f32) {
    assert!((actual.u - u).abs() < EPSILON, "u: expected {}, got {}", u, actual.u);
    assert!((actual.v - v).abs() < EPSILON, "v: expected {}, got {}", v, actual.v);
    assert!((actual.depth - depth).abs() < EPSILON, "depth: expected {}, got {}", depth, actual.depth);
}

// ============================================================================
// Perspective projection
// ============================================================================

#[test]
fn test_point_on_view_axis_projects_to_center() {
    let p = ViewFrameProjector.project(Vec3::new(0.0, 0.0, -3.0), &Mat4::IDENTITY, &wide_lens(), &square_frame());
    assert_frame_point(p, 0.5, 0.5, 3.0);
    assert!(p.is_in_frame());
}

#[test]
fn test_frame_corner_projects_to_one() {
    let p = ViewFrameProjector.project(Vec3::new(2.0, 2.0, -2.0), &Mat4::IDENTITY, &wide_lens(), &square_frame());
    assert_frame_point(p, 1.0, 1.0, 2.0);
    assert!(p.is_in_frame());
}

#[test]
fn test_point_outside_frame() {
    let p = ViewFrameProjector.project(Vec3::new(2.0, 0.0, -1.0), &Mat4::IDENTITY, &wide_lens(), &square_frame());
    assert_frame_point(p, 1.5, 0.5, 1.0);
    assert!(!p.is_in_frame());
}

#[test]
fn test_point_behind_camera_has_negative_depth() {
    let p = ViewFrameProjector.project(Vec3::new(0.0, 0.0, 1.0), &Mat4::IDENTITY, &wide_lens(), &square_frame());
    assert!(p.is_behind());
    assert!(!p.is_in_frame());
    assert!((p.depth + 1.0).abs() < EPSILON);
}

#[test]
fn test_zero_depth_maps_to_center() {
    let p = ViewFrameProjector.project(Vec3::new(3.0, -1.0, 0.0), &Mat4::IDENTITY, &wide_lens(), &square_frame());
    assert_eq!(p, FramePoint::new(0.5, 0.5, 0.0));
}

#[test]
fn test_wide_frame_narrows_vertical_extent() {
    // 16:9 with auto fit: horizontal half-extent 1, vertical 9/16
    let frame = RenderFrame::new(1600, 900);
    let p = ViewFrameProjector.project(Vec3::new(0.0, 0.5625, -1.0), &Mat4::IDENTITY, &wide_lens(), &frame);
    assert_frame_point(p, 0.5, 1.0, 1.0);
}

#[test]
fn test_vertical_sensor_fit() {
    let frame = RenderFrame::new(1600, 900);
    let lens = wide_lens().with_sensor_fit(SensorFit::Vertical);
    let p = ViewFrameProjector.project(Vec3::new(0.0, 1.0, -1.0), &Mat4::IDENTITY, &lens, &frame);
    assert_frame_point(p, 0.5, 1.0, 1.0);
}

#[test]
fn test_lens_shift_moves_frame() {
    let lens = wide_lens().with_shift(Vec2::new(0.5, 0.0));
    let p = ViewFrameProjector.project(Vec3::new(0.0, 0.0, -1.0), &Mat4::IDENTITY, &lens, &square_frame());
    assert_frame_point(p, 0.0, 0.5, 1.0);
}

// ============================================================================
// Camera placement
// ============================================================================

#[test]
fn test_translated_camera() {
    let camera = Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0));
    let p = ViewFrameProjector.project(Vec3::ZERO, &camera, &wide_lens(), &square_frame());
    assert_frame_point(p, 0.5, 0.5, 10.0);
}

#[test]
fn test_rotated_camera_looks_along_rotated_axis() {
    // Rotate the camera to look down +X
    let camera = Mat4::from_quat(Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2));
    let p = ViewFrameProjector.project(Vec3::new(4.0, 0.0, 0.0), &camera, &wide_lens(), &square_frame());
    assert_frame_point(p, 0.5, 0.5, 4.0);
}

#[test]
fn test_camera_scale_is_ignored() {
    let scaled = Mat4::from_scale_rotation_translation(Vec3::splat(3.0), Quat::IDENTITY, Vec3::new(0.0, 0.0, 5.0));
    let plain = Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0));
    let point = Vec3::new(1.0, 0.5, -2.0);

    let a = ViewFrameProjector.project(point, &scaled, &wide_lens(), &square_frame());
    let b = ViewFrameProjector.project(point, &plain, &wide_lens(), &square_frame());
    assert_frame_point(a, b.u, b.v, b.depth);
}

// ============================================================================
// Orthographic projection
// ============================================================================

#[test]
fn test_orthographic_ignores_depth() {
    let lens = CameraLens::orthographic(4.0);
    let near = ViewFrameProjector.project(Vec3::new(1.0, 0.0, -1.0), &Mat4::IDENTITY, &lens, &square_frame());
    let far = ViewFrameProjector.project(Vec3::new(1.0, 0.0, -50.0), &Mat4::IDENTITY, &lens, &square_frame());
    assert_frame_point(near, 0.75, 0.5, 1.0);
    assert_frame_point(far, 0.75, 0.5, 50.0);
}

// ============================================================================
// Unproject
// ============================================================================

#[test]
fn test_unproject_inverts_project() {
    let camera = Mat4::from_rotation_translation(Quat::from_rotation_x(0.3), Vec3::new(1.0, 2.0, 8.0));
    let lens = CameraLens::default();
    let frame = RenderFrame::default();
    let world = Vec3::new(0.4, 1.1, -1.5);

    let projected = ViewFrameProjector.project(world, &camera, &lens, &frame);
    let back = ViewFrameProjector.unproject(projected, &camera, &lens, &frame);

    assert!((back - world).length() < 1e-4, "expected {:?}, got {:?}", world, back);
}

#[test]
fn test_unproject_center_lies_on_view_axis() {
    let camera = Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0));
    let p = ViewFrameProjector.unproject(FramePoint::new(0.5, 0.5, 5.0), &camera, &wide_lens(), &square_frame());
    assert!(p.length() < EPSILON);
}
