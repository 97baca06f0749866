// src/lib.rs
//! Haggis Gizmos
//!
//! Wireframe debug gizmos for 2D and 3D viewports. Each helper tessellates a
//! shape (point, arrow, circle, capsule, sphere, plane, triangle, mesh,
//! marker) into line segments and forwards them to a [`LineSink`] supplied by
//! the host renderer.

pub mod color;
pub mod error;
pub mod geometry;
pub mod gizmos;
pub mod math;
pub mod options;
pub mod prelude;
pub mod sink;

// Re-export main types for convenience
pub use color::Color;
pub use error::{DrawError, Result};
pub use options::DrawOptions;
pub use sink::{LineSink, Ray, Segment};
