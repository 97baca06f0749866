//! # Gizmo System
//!
//! Retained gizmos on top of the immediate-mode [`geometry`](crate::geometry)
//! functions. A gizmo keeps its parameters and redraws itself each frame;
//! the [`GizmoManager`] owns a set of them and draws them in priority order.
//!
//! ## Key Components
//!
//! - [`Gizmo`] - Base trait for all gizmo implementations
//! - [`GizmoManager`] - Manages multiple gizmo instances
//! - [`ArrowGizmo`] - Draws one configurable arrow every frame
//!
//! ## Usage
//!
//! ```rust
//! use haggis_gizmos::prelude::*;
//!
//! let mut gizmo_manager = GizmoManager::new();
//! gizmo_manager.add_gizmo("heading", Box::new(ArrowGizmo::new().with_scale(2.0)));
//!
//! // Once per frame
//! let mut lines = LineBuffer::new();
//! gizmo_manager.draw_frame(&mut lines);
//! assert_eq!(lines.line_count(), 105);
//! ```

pub mod arrow_gizmo;
pub mod manager;
pub mod traits;

// Re-export main types
pub use arrow_gizmo::ArrowGizmo;
pub use manager::GizmoManager;
pub use traits::Gizmo;
