//! Error types for blockrender library.

use std::io;
use thiserror::Error;

/// Result type alias for blockrender operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or rendering block content.
///
/// Unknown block types and modifiers are not errors: they are recorded
/// during the render pass and reported through marker elements and
/// [`crate::render::RenderResult::diagnostics`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document itself is missing (null).
    #[error("Render content is empty")]
    EmptyInput,

    /// A node does not have the shape its type requires.
    #[error("Invalid node at {path}: {reason}")]
    InvalidNode {
        /// Location of the node, e.g. `/0/children/2`
        path: String,
        /// What is wrong with it
        reason: String,
    },

    /// Error during serialization of rendered output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build an [`Error::InvalidNode`].
    pub fn invalid_node(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidNode {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
