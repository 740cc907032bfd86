//! Camera module: lens description, render frame and projection service.
//!
//! A camera is a scene object carrying a `CameraLens`. Together with the
//! scene's `RenderFrame` the lens defines the view frame that world points
//! are mapped into by a `FrameProjector`.

mod frame;
mod lens;
mod projector;

pub use frame::{FramePoint, RenderFrame};
pub use lens::{CameraLens, Projection, SensorFit, ViewFrame};
pub use projector::{FrameProjector, ViewFrameProjector};
