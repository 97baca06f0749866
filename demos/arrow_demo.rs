//! # Arrow Gizmo Demo
//!
//! Drives an [`ArrowGizmo`] through a few simulated frames and prints the
//! line buffer a renderer would upload each frame.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example arrow_demo -- 5
//! ```
//!
//! The optional argument is the number of frames to run (default 3).

use anyhow::Context;
use haggis_gizmos::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

const DEFAULT_FRAMES: u32 = 3;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("frame count must be a number, got '{}'", arg))?,
        None => DEFAULT_FRAMES,
    };

    // Fixed seed so every run picks the same colors
    let mut rng = StdRng::seed_from_u64(0x6a7);

    let mut gizmo_manager = GizmoManager::new();
    gizmo_manager.add_gizmo(
        "heading",
        Box::new(
            ArrowGizmo::new()
                .with_start(Point3::new(0.0, 0.0, 0.0))
                .with_direction(Vector3::new(1.0, 1.0, 0.0))
                .with_scale(4.0),
        ),
    );

    let mut lines = LineBuffer::new();
    for frame in 0..frames {
        lines.clear();

        // Retained gizmos
        let drawn = gizmo_manager.draw_frame(&mut lines);

        // Immediate-mode gizmos, redrawn every frame
        let angle = frame as f32 * 0.5;
        let orbit = Point2::new(3.0 * angle.cos(), 3.0 * angle.sin());
        circle_2d(
            &mut lines,
            orbit,
            0.5,
            random_color(&mut rng),
            DrawOptions::default(),
        )?;
        sphere(
            &mut lines,
            Point3::new(0.0, 2.0, 0.0),
            1.0,
            random_color_with_alpha(&mut rng, 0.5),
            DrawOptions::default().with_depth_test(false),
        );

        log::info!(
            "frame {}: {} gizmos, {} lines ({} depth-tested bytes, {} overlay bytes)",
            frame,
            drawn,
            lines.line_count(),
            lines.depth_tested_bytes().len(),
            lines.overlay_bytes().len(),
        );
    }

    println!(
        "Drew {} frames,
        {} lines in the last one",
        frames,
        lines.line_count()
    );
    Ok(())
}
