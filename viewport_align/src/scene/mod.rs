//! Scene module
//!
//! Scene graph data model (objects, cameras, parenting) and the
//! `SceneGraph` provider trait the fitter reads and writes through.

mod graph;
mod object;
mod scene;

pub use graph::SceneGraph;
pub use object::{ObjectKey, SceneObject};
pub use scene::Scene;
