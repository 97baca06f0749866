//! # Line Sinks
//!
//! Gizmo functions never render anything themselves. They compute line
//! segments and hand each one to a [`LineSink`], which the host supplies.
//!
//! ## Provided Sinks
//!
//! - [`SegmentRecorder`] - Keeps every segment and ray, for headless tests and tooling
//! - [`LineBuffer`] - Packs lines into `bytemuck` vertices ready for a GPU line-list upload
//!
//! ## Usage
//!
//! ```rust
//! use haggis_gizmos::prelude::*;
//!
//! let mut recorder = SegmentRecorder::new();
//! sphere(&mut recorder, Point3::new(0.0, 0.0, 0.0), 1.0, Color::GREEN, DrawOptions::default());
//! assert_eq!(recorder.segments().len(), 300);
//! ```

pub mod line_buffer;
pub mod recorder;

pub use line_buffer::{LineBuffer, LineVertex};
pub use recorder::SegmentRecorder;

use crate::color::Color;
use crate::options::DrawOptions;
use cgmath::{Point3, Vector3};

/// A colored line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
    pub color: Color,
    pub options: DrawOptions,
}

impl Segment {
    pub fn new(
        start: Point3<f32>,
        end: Point3<f32>,
        color: Color,
        options: DrawOptions,
    ) -> Self {
        Self {
            start,
            end,
            color,
            options,
        }
    }

    /// Segment length
    pub fn length(&self) -> f32 {
        use cgmath::MetricSpace;
        self.start.distance(self.end)
    }
}

/// A line from `origin` along `direction`; its length is the direction's magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
    pub color: Color,
    pub options: DrawOptions,
}

impl Ray {
    pub fn new(
        origin: Point3<f32>,
        direction: Vector3<f32>,
        color: Color,
        options: DrawOptions,
    ) -> Self {
        Self {
            origin,
            direction,
            color,
            options,
        }
    }

    /// Point where the ray stops
    pub fn end(&self) -> Point3<f32> {
        self.origin + self.direction
    }

    /// The same line expressed as a [`Segment`]
    pub fn to_segment(&self) -> Segment {
        Segment::new(self.origin, self.end(), self.color, self.options)
    }
}

/// Receives the lines produced by gizmo functions.
///
/// This is the only boundary between the gizmo geometry and the renderer.
/// Implementations decide how lines are buffered, drawn and expired after
/// their `duration`.
///
/// ## Examples
///
/// ```rust
/// use haggis_gizmos::sink::{LineSink, Segment};
///
/// struct CountingSink(usize);
///
/// impl LineSink for CountingSink {
///     fn draw_segment(&mut self, _segment: Segment) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait LineSink {
    /// Draw one line segment.
    fn draw_segment(&mut self, segment: Segment);

    /// Draw a ray.
    ///
    /// Sinks without a dedicated ray primitive get the equivalent segment.
    fn draw_ray(&mut self, ray: Ray) {
        self.draw_segment(ray.to_segment());
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn draw_segment(&mut self, segment: Segment) {
        (**self).draw_segment(segment);
    }

    fn draw_ray(&mut self, ray: Ray) {
        (**self).draw_ray(ray);
    }
}
