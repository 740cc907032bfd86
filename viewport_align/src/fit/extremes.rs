/// Extremes record: frame-space bounds of an object's vertices.

use glam::{Vec2, Vec3};
use crate::camera::FramePoint;

/// Min/max of one frame axis together with the world position of the
/// vertex found at each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtreme {
    /// Smallest frame coordinate
    pub min: f32,
    /// Largest frame coordinate
    pub max: f32,
    /// World position of the vertex at `min`
    pub world_at_min: Vec3,
    /// World position of the vertex at `max`
    pub world_at_max: Vec3,
}

impl AxisExtreme {
    fn start(value: f32, world: Vec3) -> Self {
        Self { min: value, max: value, world_at_min: world, world_at_max: world }
    }

    fn include(&mut self, value: f32, world: Vec3) {
        if value < self.min {
            self.min = value;
            self.world_at_min = world;
        }
        if value > self.max {
            self.max = value;
            self.world_at_max = world;
        }
    }

    /// max - min
    pub fn extent(&self) -> f32 {
        self.max - self.min
    }

    /// Midpoint of the range
    pub fn center(&self) -> f32 {
        (self.min + self.max) * 0.5
    }
}

/// Frame-space bounds of all vertices of an object seen from a camera.
///
/// Only meaningful when `min_depth >= 0`: a vertex behind the camera
/// invalidates u/v for the whole object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    /// Horizontal bounds (world x exposed via `x()`)
    pub u: AxisExtreme,
    /// Vertical bounds (world y exposed via `y()`)
    pub v: AxisExtreme,
    /// Smallest vertex depth
    pub min_depth: f32,
    /// Mean vertex depth
    pub mean_depth: f32,
    /// Number of vertices scanned
    pub vertex_count: usize,
}

impl Extremes {
    /// Build the record in one pass over (frame point, world position) pairs.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (FramePoint, Vec3)>,
    {
        let mut iter = points.into_iter();
        let (first, first_world) = iter.next()?;

        let mut extremes = Self {
            u: AxisExtreme::start(first.u, first_world),
            v: AxisExtreme::start(first.v, first_world),
            min_depth: first.depth,
            mean_depth: 0.0,
            vertex_count: 1,
        };
        let mut depth_sum = first.depth as f64;

        for (point, world) in iter {
            extremes.u.include(point.u, world);
            extremes.v.include(point.v, world);
            extremes.min_depth = extremes.min_depth.min(point.depth);
            depth_sum += point.depth as f64;
            extremes.vertex_count += 1;
        }

        extremes.mean_depth = (depth_sum / extremes.vertex_count as f64) as f32;
        Some(extremes)
    }

    /// Projected width (u extent)
    pub fn width(&self) -> f32 {
        self.u.extent()
    }

    /// Projected height (v extent)
    pub fn height(&self) -> f32 {
        self.v.extent()
    }

    /// Centre of the projected bounding box
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.u.center(), self.v.center())
    }

    /// World x of the leftmost and rightmost vertices
    pub fn x(&self) -> (f32, f32) {
        (self.u.world_at_min.x, self.u.world_at_max.x)
    }

    /// World y of the bottom and top vertices
    pub fn y(&self) -> (f32, f32) {
        (self.v.world_at_min.y, self.v.world_at_max.y)
    }

    /// Whether any vertex lies behind the camera
    pub fn has_vertices_behind(&self) -> bool {
        self.min_depth < 0.0
    }

    /// Whether every bound is a finite number
    pub fn is_finite(&self) -> bool {
        self.u.min.is_finite()
            && self.u.max.is_finite()
            && self.v.min.is_finite()
            && self.v.max.is_finite()
            && self.mean_depth.is_finite()
    }

    /// Whether the box lies inside `[margin, 1 - margin]` on both axes
    pub fn is_inside(&self, margin: f32) -> bool {
        let lo = margin;
        let hi = 1.0 - margin;
        self.u.min >= lo && self.u.max <= hi && self.v.min >= lo && self.v.max <= hi
    }

    /// Fraction by which the worse-overflowing axis exceeds the frame, ≥ 0
    pub fn overscale(&self) -> f32 {
        (self.width() - 1.0).max(self.height() - 1.0).max(0.0)
    }
}

#[cfg(test)]
#[path = "extremes_tests.rs"]
mod tests;
