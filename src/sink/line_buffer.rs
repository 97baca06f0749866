//! # Line Vertex Buffer
//!
//! A sink that flattens lines into a GPU-compatible vertex list. Two vertices
//! per line, to be drawn with a line-list topology.

use super::{LineSink, Ray, Segment};

/// A colored line vertex.
///
/// # Memory Layout
///
/// `#[repr(C)]` keeps the layout C-compatible so the buffer can be cast to
/// bytes with [`bytemuck::cast_slice`] and uploaded as is.
///
/// # Fields
///
/// - `position`: 3D position coordinates [x, y, z]
/// - `color`: linear RGBA color [r, g, b, a]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Line vertices split by depth-test mode, since renderers usually draw the
/// two groups with different pipelines.
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    depth_tested: Vec<LineVertex>,
    overlay: Vec<LineVertex>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of lines drawn with depth testing
    pub fn depth_tested(&self) -> &[LineVertex] {
        &self.depth_tested
    }

    /// Vertices of lines drawn on top of everything
    pub fn overlay(&self) -> &[LineVertex] {
        &self.overlay
    }

    /// Raw bytes of the depth-tested vertices
    pub fn depth_tested_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.depth_tested)
    }

    /// Raw bytes of the overlay vertices
    pub fn overlay_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.overlay)
    }

    /// Number of lines across both groups
    pub fn line_count(&self) -> usize {
        (self.depth_tested.len() + self.overlay.len()) / 2
    }

    pub fn clear(&mut self) {
        self.depth_tested.clear();
        self.overlay.clear();
    }

    fn push_line(&mut self, segment: &Segment) {
        let color = segment.color.to_array();
        let target = if segment.options.depth_test {
            &mut self.depth_tested
        } else {
            &mut self.overlay
        };
        target.push(LineVertex {
            position: segment.start.into(),
            color,
        });
        target.push(LineVertex {
            position: segment.end.into(),
            color,
        });
    }
}

impl LineSink for LineBuffer {
    fn draw_segment(&mut self, segment: Segment) {
        self.push_line(&segment);
    }

    fn draw_ray(&mut self, ray: Ray) {
        self.push_line(&ray.to_segment());
    }
}
