use glam::{Mat4, Quat, Vec3};
use super::*;

const EPSILON: f32 = 1e-5;

#[test]
fn test_identity_matrix() {
    assert_eq!(Transform::IDENTITY.to_matrix(), Mat4::IDENTITY);
    assert_eq!(Transform::default(), Transform::IDENTITY);
}

#[test]
fn test_matrix_round_trip() {
    let t = Transform {
        translation: Vec3::new(1.0, -2.0, 3.0),
        rotation: Quat::from_rotation_y(0.7),
        scale: Vec3::splat(2.5),
    };

    let back = Transform::from_matrix(&t.to_matrix());

    assert!((back.translation - t.translation).length() < EPSILON);
    assert!(back.rotation.angle_between(t.rotation) < 1e-4);
    assert!((back.scale - t.scale).length() < EPSILON);
}

#[test]
fn test_normalized_drops_scale_only() {
    let t = Transform {
        translation: Vec3::X,
        rotation: Quat::from_rotation_z(1.0),
        scale: Vec3::new(2.0, 3.0, 4.0),
    };
    let n = t.normalized();

    assert_eq!(n.scale, Vec3::ONE);
    assert_eq!(n.translation, t.translation);
    assert_eq!(n.rotation, t.rotation);
}

#[test]
fn test_scaled_by_is_uniform() {
    let t = Transform { scale: Vec3::new(1.0, 2.0, 3.0), ..Transform::IDENTITY };
    assert_eq!(t.scaled_by(0.5).scale, Vec3::new(0.5, 1.0, 1.5));
}

#[test]
fn test_is_finite() {
    assert!(Transform::IDENTITY.is_finite());
    let bad = Transform::from_translation(Vec3::new(f32::NAN, 0.0, 0.0));
    assert!(!bad.is_finite());
}
