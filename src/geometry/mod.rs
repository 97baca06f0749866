//! # Gizmo Geometry
//!
//! Stateless functions that tessellate debug shapes into line segments and
//! send them to a [`LineSink`](crate::sink::LineSink). Nothing is stored
//! between calls; every call is independent and re-entrant.
//!
//! ## Supported Shapes
//!
//! - **2D** ([`dim2`]): point cross, arrow, circle, capsule
//! - **3D** ([`dim3`]): point cross, arrow with conical head, sphere, capsule
//! - **Markers** ([`markers`]): axis marker, vector, plane
//! - **Meshes** ([`mesh`]): triangle, transformed triangle, indexed mesh
//!
//! Round shapes are built from quarter arcs of
//! [`ARC_SEGMENTS`](crate::math::ARC_SEGMENTS) segments each.
//!
//! ## Usage
//!
//! ```rust
//! use haggis_gizmos::prelude::*;
//!
//! let mut recorder = SegmentRecorder::new();
//! let options = DrawOptions::default().with_duration(1.0);
//!
//! circle_2d(&mut recorder, Point2::new(3.0, 4.0), 0.5, Color::RED, options)?;
//! capsule(
//!     &mut recorder,
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 2.0, 0.0),
//!     0.5,
//!     Color::BLUE,
//!     options,
//! )?;
//! assert_eq!(recorder.segments().len(), 100 + 404);
//! # Ok::<(), haggis_gizmos::DrawError>(())
//! ```

pub mod dim2;
pub mod dim3;
pub mod markers;
pub mod mesh;

pub use dim2::{arrow_2d, capsule_2d, circle_2d, point_2d};
pub use dim3::{arrow, capsule, point, sphere};
pub use markers::{marker, plane, vector};
pub use mesh::{mesh, mesh_triangles, triangle, triangle_transformed, WireMesh};

/// Half-angle between an arrow's shaft and each barb, in degrees
pub const ARROW_ANGLE_DEG: f32 = 15.0;

/// Slerp fraction that turns a direction by [`ARROW_ANGLE_DEG`] toward a
/// perpendicular vector
pub(crate) const ARROW_SLERP: f32 = ARROW_ANGLE_DEG / 90.0;
