/// Camera lens: projection shape of a camera object.

use glam::Vec2;
use super::frame::RenderFrame;

/// Projection model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with the field of view (radians) along the fitted axis
    Perspective {
        /// Field of view in radians
        fov: f32,
    },
    /// Orthographic projection with the frame extent (world units) along the fitted axis
    Orthographic {
        /// Full extent of the fitted axis in world units
        scale: f32,
    },
}

/// Which frame axis the field of view / orthographic scale applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorFit {
    /// The larger frame dimension
    #[default]
    Auto,
    /// Always the horizontal axis
    Horizontal,
    /// Always the vertical axis
    Vertical,
}

/// View frame rectangle on the plane at unit distance (perspective)
/// or in camera space (orthographic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    /// Center offset from the view axis
    pub center: Vec2,
    /// Half width and half height
    pub half_extent: Vec2,
}

impl ViewFrame {
    /// Lower-left corner
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extent
    }

    /// Upper-right corner
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extent
    }
}

/// Lens of a camera object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLens {
    /// Projection model
    pub projection: Projection,
    /// Axis the projection extent applies to
    pub sensor_fit: SensorFit,
    /// Lens shift, in units of the larger frame dimension
    pub shift: Vec2,
}

impl CameraLens {
    /// Perspective lens with the given field of view (radians)
    pub fn perspective(fov: f32) -> Self {
        Self {
            projection: Projection::Perspective { fov },
            sensor_fit: SensorFit::Auto,
            shift: Vec2::ZERO,
        }
    }

    /// Perspective lens from a focal length and sensor size (both millimetres)
    pub fn from_focal_length(focal_length: f32, sensor_size: f32) -> Self {
        Self::perspective(2.0 * (sensor_size / (2.0 * focal_length)).atan())
    }

    /// Orthographic lens covering `scale` world units along the fitted axis
    pub fn orthographic(scale: f32) -> Self {
        Self {
            projection: Projection::Orthographic { scale },
            sensor_fit: SensorFit::Auto,
            shift: Vec2::ZERO,
        }
    }

    /// Builder: set the sensor fit
    pub fn with_sensor_fit(mut self, sensor_fit: SensorFit) -> Self {
        self.sensor_fit = sensor_fit;
        self
    }

    /// Builder: set the lens shift
    pub fn with_shift(mut self, shift: Vec2) -> Self {
        self.shift = shift;
        self
    }

    /// Whether the frame grows with depth
    pub fn is_perspective(&self) -> bool {
        matches!(self.projection, Projection::Perspective { .. })
    }

    /// View frame for the given render frame.
    pub fn view_frame(&self, frame: &RenderFrame) -> ViewFrame {
        let aspect = frame.aspect();
        let horizontal = match self.sensor_fit {
            SensorFit::Auto => aspect >= 1.0,
            SensorFit::Horizontal => true,
            SensorFit::Vertical => false,
        };

        let half = match self.projection {
            Projection::Perspective { fov } => (fov * 0.5).tan(),
            Projection::Orthographic { scale } => scale * 0.5,
        };

        let half_extent = if horizontal {
            Vec2::new(half, half / aspect)
        } else {
            Vec2::new(half * aspect, half)
        };

        ViewFrame {
            center: self.shift * 2.0 * half_extent.max_element(),
            half_extent,
        }
    }
}

impl Default for CameraLens {
    /// 50mm lens on a 36mm sensor
    fn default() -> Self {
        Self::from_focal_length(50.0, 36.0)
    }
}

#[cfg(test)]
#[path = "lens_tests.rs"]
mod tests;
