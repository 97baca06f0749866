//! # Gizmo Errors
//!
//! Drawing calls reject degenerate geometry up front instead of emitting
//! NaN-valued segments. Nothing is sent to the sink when a call fails.

use thiserror::Error;

/// Errors raised by gizmo drawing calls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    /// A vector that has to be normalized has zero (or non-finite) length.
    #[error("degenerate input to {operation}: {input} has zero length")]
    DegenerateInput {
        operation: &'static str,
        input: &'static str,
    },
    /// A mesh index points past the end of the vertex buffer.
    #[error("mesh index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    /// The mesh index buffer does not describe whole triangles.
    #[error("mesh index buffer of length {index_count} is not a multiple of 3")]
    IncompleteTriangle { index_count: usize },
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, DrawError>;
