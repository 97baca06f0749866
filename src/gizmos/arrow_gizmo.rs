//! # Arrow Gizmo
//!
//! A retained gizmo that draws a single 3D arrow every frame from a set of
//! tweakable parameters. Handy for eyeballing a direction while tuning it.

use crate::color::Color;
use crate::error::Result;
use crate::geometry::arrow;
use crate::gizmos::traits::Gizmo;
use crate::math::try_normalize;
use crate::options::DrawOptions;
use crate::sink::LineSink;
use cgmath::{Point3, Vector3};

/// Draws `arrow(start, normalize(direction), scale, ...)` on every frame.
#[derive(Debug, Clone)]
pub struct ArrowGizmo {
    /// Whether the gizmo is currently enabled
    enabled: bool,

    /// Where the arrow starts
    pub start: Point3<f32>,

    /// Which way it points; only the direction matters
    pub direction: Vector3<f32>,

    /// Put the head on `start` instead of the far end
    pub arrow_towards_point: bool,

    /// Shaft length
    pub scale: f32,

    /// Line color, magenta by default
    pub color: Color,

    /// Display settings passed to every line
    pub options: DrawOptions,
}

impl ArrowGizmo {
    /// Create an arrow gizmo pointing along +Z from the origin
    pub fn new() -> Self {
        Self {
            enabled: true,
            start: Point3::new(0.0, 0.0, 0.0),
            direction: Vector3::new(0.0, 0.0, 1.0),
            arrow_towards_point: false,
            scale: 1.0,
            color: Color::MAGENTA,
            options: DrawOptions::default(),
        }
    }

    pub fn with_start(mut self, start: Point3<f32>) -> Self {
        self.start = start;
        self
    }

    pub fn with_direction(mut self, direction: Vector3<f32>) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_arrow_towards_point(mut self, towards: bool) -> Self {
        self.arrow_towards_point = towards;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_options(mut self, options: DrawOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for ArrowGizmo {
    fn default() -> Self {
        Self::new()
    }
}

impl Gizmo for ArrowGizmo {
    fn draw(&self, sink: &mut dyn LineSink) -> Result<()> {
        let direction = try_normalize(self.direction, "arrow_gizmo", "direction")?;
        arrow(
            sink,
            self.start,
            direction,
            self.scale,
            self.color,
            self.arrow_towards_point,
            self.options,
        )
    }

    fn name(&self) -> &str {
        "Arrow Gizmo"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
