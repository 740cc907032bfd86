/// Render frame and frame-space points.

use glam::Vec2;

/// Output frame the camera renders into.
///
/// Only the aspect ratio matters for projection; coordinates in
/// `FramePoint` are normalized and independent of pixel resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    /// Horizontal resolution in pixels
    pub width: u32,
    /// Vertical resolution in pixels
    pub height: u32,
    /// Pixel aspect (x, y)
    pub pixel_aspect: Vec2,
}

impl RenderFrame {
    /// Frame with square pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixel_aspect: Vec2::ONE }
    }

    /// Width / height ratio, pixel aspect included
    pub fn aspect(&self) -> f32 {
        (self.width as f32 * self.pixel_aspect.x) / (self.height as f32 * self.pixel_aspect.y)
    }

    /// Whether the frame has a non-zero, finite area
    pub fn is_valid(&self) -> bool {
        let aspect = self.aspect();
        self.width > 0
            && self.height > 0
            && self.pixel_aspect.x > 0.0
            && self.pixel_aspect.y > 0.0
            && aspect.is_finite()
    }
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// A point in frame space.
///
/// `u`/`v` are 0..1 inside the frame (origin bottom-left),
/// `depth` is the distance along the view axis (negative = behind camera).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePoint {
    /// Horizontal frame coordinate
    pub u: f32,
    /// Vertical frame coordinate
    pub v: f32,
    /// Signed depth along the camera's view direction
    pub depth: f32,
}

impl FramePoint {
    /// Create a frame point
    pub fn new(u: f32, v: f32, depth: f32) -> Self {
        Self { u, v, depth }
    }

    /// True iff u∈[0,1], v∈[0,1] and depth≥0
    pub fn is_in_frame(&self) -> bool {
        (0.0..=1.0).contains(&self.u) && (0.0..=1.0).contains(&self.v) && self.depth >= 0.0
    }

    /// Whether the point lies behind the camera
    pub fn is_behind(&self) -> bool {
        self.depth < 0.0
    }

    /// Whether all three components are finite
    pub fn is_finite(&self) -> bool {
        self.u.is_finite() && self.v.is_finite() && self.depth.is_finite()
    }

    /// (u, v) as a vector
    pub fn uv(&self) -> Vec2 {
        Vec2::new(self.u, self.v)
    }
}
