//! # Gizmo Manager
//!
//! This module provides the registry that redraws retained gizmos every
//! frame. It has no rendering of its own; it feeds whatever
//! [`LineSink`] the host passes in.

use crate::gizmos::traits::Gizmo;
use crate::sink::LineSink;
use std::collections::HashMap;

/// Manager for handling multiple gizmo instances
pub struct GizmoManager {
    /// Collection of registered gizmos
    gizmos: HashMap<String, Box<dyn Gizmo>>,

    /// Whether the gizmo system is globally enabled
    enabled: bool,
}

impl GizmoManager {
    /// Create a new gizmo manager
    pub fn new() -> Self {
        Self {
            gizmos: HashMap::new(),
            enabled: true,
        }
    }

    /// Add a new gizmo to the manager, replacing any gizmo with the same name
    ///
    /// # Arguments
    ///
    /// * `name` - Unique identifier for the gizmo
    /// * `gizmo` - The gizmo instance to add
    pub fn add_gizmo(&mut self, name: impl Into<String>, gizmo: Box<dyn Gizmo>) {
        let name = name.into();
        log::debug!("registering gizmo '{}' ({})", name, gizmo.name());
        if self.gizmos.insert(name.clone(), gizmo).is_some() {
            log::debug!("gizmo '{}' replaced", name);
        }
    }

    /// Remove a gizmo from the manager, returning it if it was registered
    pub fn remove_gizmo(&mut self, name: &str) -> Option<Box<dyn Gizmo>> {
        self.gizmos.remove(name)
    }

    /// Check if a gizmo exists by name
    pub fn has_gizmo(&self, name: &str) -> bool {
        self.gizmos.contains_key(name)
    }

    /// Borrow a registered gizmo
    pub fn gizmo(&self, name: &str) -> Option<&dyn Gizmo> {
        self.gizmos.get(name).map(|gizmo| gizmo.as_ref())
    }

    /// Mutably borrow a registered gizmo, e.g. to toggle it
    pub fn gizmo_mut(&mut self, name: &str) -> Option<&mut (dyn Gizmo + 'static)> {
        self.gizmos.get_mut(name).map(|gizmo| gizmo.as_mut())
    }

    /// Draw every enabled gizmo, lowest priority first.
    ///
    /// A gizmo that fails to draw is logged and skipped so the rest of the
    /// frame still appears. Returns the number of gizmos drawn.
    pub fn draw_frame(&self, sink: &mut dyn LineSink) -> usize {
        if !self.enabled {
            return 0;
        }

        // Collect visible gizmos sorted by priority, then name for a stable order
        let mut visible: Vec<_> = self
            .gizmos
            .iter()
            .filter(|(_, gizmo)| gizmo.is_enabled())
            .collect();
        visible.sort_by(|(a_name, a), (b_name, b)| {
            a.priority().cmp(&b.priority()).then_with(|| a_name.cmp(b_name))
        });

        let mut drawn = 0;
        for (name, gizmo) in visible {
            match gizmo.draw(sink) {
                Ok(()) => drawn += 1,
                Err(err) => log::warn!("gizmo '{}' skipped: {}", name, err),
            }
        }
        drawn
    }

    /// Check if the gizmo system is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the enabled state of the gizmo system
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Enable or disable every registered gizmo
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for gizmo in self.gizmos.values_mut() {
            gizmo.set_enabled(enabled);
        }
    }

    /// Get the number of registered gizmos
    pub fn gizmo_count(&self) -> usize {
        self.gizmos.len()
    }

    /// Get a sorted list of all gizmo names
    pub fn gizmo_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gizmos.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Remove all gizmos
    pub fn clear(&mut self) {
        self.gizmos.clear();
    }
}

impl Default for GizmoManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::{DrawError, Result};
    use crate::sink::{Segment, SegmentRecorder};
    use cgmath::Point3;

    /// Draws one segment whose color encodes its priority
    struct TagGizmo {
        priority: i32,
        enabled: bool,
        fail: bool,
    }

    impl TagGizmo {
        fn boxed(priority: i32) -> Box<dyn Gizmo> {
            Box::new(Self {
                priority,
                enabled: true,
                fail: false,
            })
        }
    }

    impl Gizmo for TagGizmo {
        fn draw(&self, sink: &mut dyn LineSink) -> Result<()> {
            if self.fail {
                return Err(DrawError::DegenerateInput {
                    operation: "tag",
                    input: "test",
                });
            }
            let p = Point3::new(0.0, 0.0, 0.0);
            let color = Color::rgb(self.priority as f32, 0.0, 0.0);
            sink.draw_segment(Segment::new(p, p, color, Default::default()));
            Ok(())
        }

        fn name(&self) -> &str {
            "Tag Gizmo"
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    #[test]
    fn test_add_remove() {
        let mut manager = GizmoManager::new();
        manager.add_gizmo("a", TagGizmo::boxed(0));
        manager.add_gizmo("b", TagGizmo::boxed(1));
        assert_eq!(manager.gizmo_count(), 2);
        assert!(manager.has_gizmo("a"));
        assert_eq!(manager.gizmo_names(), vec!["a", "b"]);

        assert!(manager.remove_gizmo("a").is_some());
        assert!(manager.remove_gizmo("a").is_none());
        assert!(!manager.has_gizmo("a"));

        manager.clear();
        assert_eq!(manager.gizmo_count(), 0);
    }

    #[test]
    fn test_draw_frame_in_priority_order() {
        let mut manager = GizmoManager::new();
        manager.add_gizmo("top", TagGizmo::boxed(5));
        manager.add_gizmo("bottom", TagGizmo::boxed(-1));
        manager.add_gizmo("middle", TagGizmo::boxed(2));

        let mut recorder = SegmentRecorder::new();
        assert_eq!(manager.draw_frame(&mut recorder), 3);

        let order: Vec<f32> = recorder.segments().iter().map(|s| s.color.r).collect();
        assert_eq!(order, vec![-1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_disabled_gizmos_are_skipped() {
        let mut manager = GizmoManager::new();
        manager.add_gizmo("a", TagGizmo::boxed(0));
        manager.add_gizmo("b", TagGizmo::boxed(1));

        if let Some(gizmo) = manager.gizmo_mut("a") {
            gizmo.set_enabled(false);
        }
        let mut recorder = SegmentRecorder::new();
        assert_eq!(manager.draw_frame(&mut recorder), 1);

        manager.set_enabled(false);
        recorder.clear();
        assert_eq!(manager.draw_frame(&mut recorder), 0);
        assert!(recorder.is_empty());

        manager.set_enabled(true);
        manager.set_all_enabled(true);
        assert_eq!(manager.draw_frame(&mut recorder), 2);
    }

    #[test]
    fn test_failing_gizmo_does_not_stop_frame() {
        let mut manager = GizmoManager::new();
        manager.add_gizmo(
            "broken",
            Box::new(TagGizmo {
                priority: 0,
                enabled: true,
                fail: true,
            }),
        );
        manager.add_gizmo("ok", TagGizmo::boxed(1));

        let mut recorder = SegmentRecorder::new();
        assert_eq!(manager.draw_frame(&mut recorder), 1);
        assert_eq!(recorder.segments().len(), 1);
    }
}
