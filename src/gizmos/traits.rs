//! # Gizmo Traits
//!
//! This module defines the trait that retained gizmos implement to be
//! redrawn every frame by the [`GizmoManager`](super::GizmoManager).

use crate::error::Result;
use crate::sink::LineSink;

/// A gizmo that knows how to draw itself once per frame.
///
/// The geometry functions in [`crate::geometry`] are immediate mode: they
/// draw once and forget. A `Gizmo` keeps the parameters between frames and
/// issues those calls again on every [`draw`](Gizmo::draw).
///
/// ## Examples
///
/// ```rust
/// use haggis_gizmos::prelude::*;
///
/// struct OriginMarker {
///     enabled: bool,
/// }
///
/// impl Gizmo for OriginMarker {
///     fn draw(&self, sink: &mut dyn LineSink) -> haggis_gizmos::Result<()> {
///         marker(sink, Point3::new(0.0, 0.0, 0.0), 1.0, Color::WHITE, DrawOptions::default());
///         Ok(())
///     }
///
///     fn name(&self) -> &str { "Origin Marker" }
///     fn is_enabled(&self) -> bool { self.enabled }
///     fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }
/// }
/// ```
pub trait Gizmo {
    /// Draw the gizmo for the current frame.
    ///
    /// # Errors
    ///
    /// Whatever the underlying geometry call rejects, typically
    /// [`DrawError::DegenerateInput`](crate::DrawError::DegenerateInput).
    fn draw(&self, sink: &mut dyn LineSink) -> Result<()>;

    /// Name used for logging and debugging.
    fn name(&self) -> &str;

    /// Check if the gizmo is currently enabled.
    fn is_enabled(&self) -> bool;

    /// Set the enabled state of the gizmo.
    fn set_enabled(&mut self, enabled: bool);

    /// Gizmos with higher priority values are drawn later (on top).
    /// Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }
}
