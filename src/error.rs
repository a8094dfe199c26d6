//! Error types for scene loading and output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a scene or writing a frame.
///
/// Rendering itself never fails; degenerate geometry is treated as a miss.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a scene file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Scene description is not valid JSON for the expected schema.
    #[error("failed to parse scene description: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the framebuffer to an image failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// Camera facing has zero length.
    #[error("camera facing {0:?} has zero length")]
    DegenerateCamera([f32; 3]),

    /// A primitive has parameters that can't describe a shape.
    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),
}
