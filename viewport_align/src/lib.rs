/*!
# viewport_align

Camera framing utilities for 3D scenes.

Given a camera and a mesh object, the crate projects the object's vertices
into the camera's rendered frame and scales (and optionally moves) the
object until it is fully visible.

## Architecture

- **FrustumFitter**: projection queries and the bounded fit-to-frame procedure
- **SceneGraph**: provider trait the fitter reads and writes scenes through
- **Scene**: in-memory scene graph (objects, cameras, parenting)
- **FrameProjector**: world ↔ normalized frame mapping for a camera lens
- **TextureBatcher**: fills a material's free texture slots with image files
- **StripCatalog**: lists sequencer media strips for asset documentation

Everything public is reachable through the `align` namespace.
*/

// Internal modules
mod error;
mod reporter;
pub mod log;
pub mod math;
pub mod camera;
pub mod scene;
pub mod fit;
pub mod material;
pub mod catalog;

#[cfg(test)]
mod test_utils;

// Main align namespace module
pub mod align {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger slot
    pub use crate::reporter::Reporter;

    // Logging sub-module (types only, the align_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Transform type
    pub mod math {
        pub use crate::math::*;
    }

    // Lens, frame and projection
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene graph
    pub mod scene {
        pub use crate::scene::*;
    }

    // Frustum fitting
    pub mod fit {
        pub use crate::fit::*;
    }

    // Materials and texture batching
    pub mod material {
        pub use crate::material::*;
    }

    // Sequencer strip catalog
    pub mod catalog {
        pub use crate::catalog::*;
    }
}

// Re-export math library at crate root
pub use glam;
