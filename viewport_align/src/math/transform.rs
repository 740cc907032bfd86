/// Transform: translation, rotation and scale of a scene object.
///
/// Stored decomposed so that scale can be changed without touching
/// rotation (the fitter rescales uniformly and moves in world space).

use glam::{Mat4, Quat, Vec3};

/// Decomposed affine transform (T * R * S).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,
    /// Rotation
    pub rotation: Quat,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    /// Translation and rotation with unit scale
    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self { translation, rotation, scale: Vec3::ONE }
    }

    /// Decompose a matrix. Shear is lost.
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self { translation, rotation, scale }
    }

    /// Compose into a matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Same transform with the scale dropped (rotation + translation only).
    ///
    /// Used to place objects on a camera without inheriting the camera's scale.
    pub fn normalized(&self) -> Self {
        Self { scale: Vec3::ONE, ..*self }
    }

    /// Return a copy with the scale multiplied uniformly by `factor`
    pub fn scaled_by(&self, factor: f32) -> Self {
        Self { scale: self.scale * factor, ..*self }
    }

    /// Whether every component is finite
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
