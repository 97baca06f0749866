//! # Draw Options
//!
//! Per-call display settings forwarded untouched to the line sink.

/// How long a gizmo stays on screen and whether it is depth tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    /// Seconds the lines stay visible. `0.0` means a single frame.
    pub duration: f32,
    /// Whether the lines are hidden behind scene geometry.
    pub depth_test: bool,
}

impl DrawOptions {
    /// Single-frame, depth-tested lines
    pub const fn new() -> Self {
        Self {
            duration: 0.0,
            depth_test: true,
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_depth_test(mut self, depth_test: bool) -> Self {
        self.depth_test = depth_test;
        self
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self::new()
    }
}
