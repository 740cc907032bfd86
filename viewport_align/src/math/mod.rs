//! Math helpers on top of glam.

mod transform;

pub use transform::Transform;
