//! # Haggis Gizmos Prelude
//!
//! Commonly used types, traits and drawing functions in one import.
//!
//! ## Usage
//!
//! ```rust
//! use haggis_gizmos::prelude::*;
//!
//! fn draw_debug(sink: &mut dyn LineSink) -> haggis_gizmos::Result<()> {
//!     let options = DrawOptions::default();
//!     point(sink, Point3::new(0.0, 1.0, 0.0), 0.25, Color::YELLOW, options);
//!     let origin = Point3::new(0.0, 0.0, 0.0);
//!     arrow(sink, origin, Vector3::unit_x(), 2.0, Color::RED, false, options)?;
//!     plane(sink, origin, Vector3::unit_y(), 1.0, Color::GRAY, options)?;
//!     Ok(())
//! }
//!
//! let mut recorder = SegmentRecorder::new();
//! draw_debug(&mut recorder).unwrap();
//! ```

// Re-export core value types
pub use crate::color::{random_color, random_color_with_alpha, Color};
pub use crate::error::DrawError;
pub use crate::math::Transform;
pub use crate::options::DrawOptions;

// Re-export sinks
pub use crate::sink::{LineBuffer, LineSink, LineVertex, Ray, Segment, SegmentRecorder};

// Re-export drawing functions
pub use crate::geometry::{
    arrow, arrow_2d, capsule, capsule_2d, circle_2d, marker, mesh, mesh_triangles, plane, point,
    point_2d, sphere, triangle, triangle_transformed, vector, WireMesh,
};

// Re-export retained gizmos
pub use crate::gizmos::{ArrowGizmo, Gizmo, GizmoManager};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Point2, Point3, Vector2, Vector3};
