//! Frustum fitting
//!
//! Projects an object's vertices into a camera's frame and scales and
//! moves the object until its silhouette lies inside the frame.

mod config;
mod extremes;
mod fitter;

pub use config::{FitConfig, FitOptions};
pub use extremes::{AxisExtreme, Extremes};
pub use fitter::{FitReport, FitStage, FrustumFitter};
