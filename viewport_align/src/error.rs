//! Error types for viewport_align
//!
//! This module defines the error types shared by the frustum fitter,
//! the texture batcher and the strip catalog.

use std::fmt;

/// Result type for viewport_align operations
pub type Result<T> = std::result::Result<T, Error>;

/// viewport_align errors
///
/// None of these are fatal: the scene is left untouched (or in the last
/// consistent state for `BehindCamera`) and the caller may retry with
/// corrected input.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Absent object, camera, vertex data or material
    MissingInput(String),

    /// Geometry that cannot be projected meaningfully (no vertices,
    /// non-finite projection, zero-area frame)
    DegenerateGeometry(String),

    /// The object still had vertices behind the camera after the
    /// configured number of recenter attempts
    BehindCamera {
        /// Recenter attempts made before giving up
        attempts: u32,
    },

    /// A caller-supplied parameter is out of range
    InvalidParameter(String),
}

impl Error {
    /// Whether this error is a "nothing to do" condition rather than a failure.
    ///
    /// Missing and degenerate input are reported the same way: the operation
    /// becomes a no-op.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput(_) | Error::DegenerateGeometry(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInput(msg) => write!(f, "Missing input: {}", msg),
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
            Error::BehindCamera { attempts } => write!(
                f,
                "Object still behind camera after {} recenter attempt(s)",
                attempts
            ),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
