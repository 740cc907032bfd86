/// Fitter configuration and per-call options.

/// Fitter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    /// Recenter attempts before `fit_to_frame` gives up with `BehindCamera`
    pub max_recenter_attempts: u32,
    /// Factor applied to the recenter distance after each failed attempt
    pub recenter_growth: f32,
    /// Lower bound for the recenter distance (a zero distance would place
    /// the object on the camera itself)
    pub min_recenter_distance: f32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_recenter_attempts: 10,
            recenter_growth: 2.0,
            min_recenter_distance: 0.1,
        }
    }
}

/// Options for a single `fit_to_frame` call
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Translate the object into frame if it still sticks out after scaling
    pub move_into_view: bool,
    /// Border kept free on every side, as a fraction of the frame (0 ≤ margin < 0.5)
    pub margin: f32,
    /// Distance in front of the camera used when recentering
    pub distance: f32,
}

impl FitOptions {
    /// Builder: set `move_into_view`
    pub fn with_move_into_view(mut self, move_into_view: bool) -> Self {
        self.move_into_view = move_into_view;
        self
    }

    /// Builder: set the margin
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Builder: set the recenter distance
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            move_into_view: true,
            margin: 0.0,
            distance: 5.0,
        }
    }
}
