//! Recording sink for headless use.

use super::{LineSink, Ray, Segment};

/// Sink that stores every segment and ray in the order they were drawn.
#[derive(Debug, Default, Clone)]
pub struct SegmentRecorder {
    segments: Vec<Segment>,
    rays: Vec<Ray>,
}

impl SegmentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments recorded so far
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Rays recorded so far
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Total number of lines, rays included
    pub fn line_count(&self) -> usize {
        self.segments.len() + self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.rays.is_empty()
    }

    /// Forget everything recorded, typically at the start of a frame
    pub fn clear(&mut self) {
        self.segments.clear();
        self.rays.clear();
    }

    /// Take the recorded lines, leaving the recorder empty
    pub fn drain(&mut self) -> (Vec<Segment>, Vec<Ray>) {
        (
            std::mem::take(&mut self.segments),
            std::mem::take(&mut self.rays),
        )
    }
}

impl LineSink for SegmentRecorder {
    fn draw_segment(&mut self, segment: Segment) {
        log::trace!("segment {:?} -> {:?}", segment.start, segment.end);
        self.segments.push(segment);
    }

    fn draw_ray(&mut self, ray: Ray) {
        log::trace!("ray {:?} along {:?}", ray.origin, ray.direction);
        self.rays.push(ray);
    }
}
