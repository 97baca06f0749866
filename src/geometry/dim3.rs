//! # 3D Gizmos
//!
//! Point crosses, arrows, spheres and capsules. World axes are +Y up, +X
//! right and +Z forward.

use super::ARROW_SLERP;
use crate::color::Color;
use crate::error::Result;
use crate::math::{
    arc, is_parallel, perpendicular, ring, slerp, try_normalize, WORLD_FORWARD, WORLD_RIGHT,
    WORLD_UP,
};
use crate::options::DrawOptions;
use crate::sink::{LineSink, Segment};
use cgmath::{InnerSpace, Point3, Vector3};

/// Arrow head size relative to the shaft length
pub const ARROW_HEAD_RATIO: f32 = 0.2;
/// Smallest arrow head size
pub const ARROW_HEAD_MIN: f32 = 0.1;
/// Largest arrow head size
pub const ARROW_HEAD_MAX: f32 = 1.0;
/// Shortest shaft an arrow is drawn with
pub const ARROW_MIN_SCALE: f32 = 1.0;

fn line<S: LineSink + ?Sized>(
    sink: &mut S,
    a: Point3<f32>,
    b: Point3<f32>,
    color: Color,
    options: DrawOptions,
) {
    sink.draw_segment(Segment::new(a, b, color, options));
}

/// A three-axis cross centered on `point`, arms of half-length `size`.
pub fn point<S: LineSink + ?Sized>(
    sink: &mut S,
    point: Point3<f32>,
    size: f32,
    color: Color,
    options: DrawOptions,
) {
    for axis in [WORLD_UP, WORLD_RIGHT, WORLD_FORWARD] {
        let arm = axis * size;
        line(sink, point - arm, point + arm, color, options);
    }
}

/// An arrow from `point` along `direction` with a conical head.
///
/// The shaft is `scale` long but never shorter than [`ARROW_MIN_SCALE`].
/// The head is `clamp(scale * 0.2, 0.1, 1.0)` long and is drawn as four
/// spokes plus the ring joining their tips. With `arrow_towards_point` the
/// head sits on `point`, otherwise on the end of the shaft.
///
/// The head's orientation around the shaft comes from
/// [`perpendicular`](crate::math::perpendicular), so it only depends on
/// `direction`.
///
/// # Errors
///
/// [`DrawError::DegenerateInput`](crate::DrawError::DegenerateInput) when
/// `direction` is zero.
pub fn arrow<S: LineSink + ?Sized>(
    sink: &mut S,
    point: Point3<f32>,
    direction: Vector3<f32>,
    scale: f32,
    color: Color,
    arrow_towards_point: bool,
    options: DrawOptions,
) -> Result<()> {
    let forward = try_normalize(direction, "arrow", "direction")?;
    let scale = scale.max(ARROW_MIN_SCALE);
    let head_size = (scale * ARROW_HEAD_RATIO).clamp(ARROW_HEAD_MIN, ARROW_HEAD_MAX);

    let right = perpendicular(forward);
    let up = right.cross(forward);

    // Cone geometry: ring center along the shaft, ring radius across it
    let spread = slerp(forward, right, ARROW_SLERP);
    let centre = forward * forward.dot(spread) * head_size;
    let radius = (spread * head_size - centre).magnitude();

    let end = point + forward * scale;
    let (head, heading, ring_center) = if arrow_towards_point {
        (point, forward, point + centre)
    } else {
        (end, -forward, end - centre)
    };

    // Main line
    line(sink, point, end, color, options);

    // Arrow edges
    for side in [right, -right, up, -up] {
        let tip = head + slerp(heading, side, ARROW_SLERP) * head_size;
        line(sink, head, tip, color, options);
    }

    ring(
        sink,
        right * radius,
        up * radius,
        ring_center,
        color,
        options,
    );
    Ok(())
}

/// A wireframe sphere: three world-aligned great circles.
pub fn sphere<S: LineSink + ?Sized>(
    sink: &mut S,
    center: Point3<f32>,
    radius: f32,
    color: Color,
    options: DrawOptions,
) {
    let up = WORLD_UP * radius;
    let right = up.cross(WORLD_FORWARD);
    let forward = WORLD_FORWARD * radius;

    ring(sink, right, up, center, color, options);
    ring(sink, forward, up, center, color, options);
    ring(sink, right, forward, center, color, options);
}

/// A capsule between `start` and `end`: a hemisphere at each end (two half
/// circles plus a full ring) joined by four rails.
///
/// When `start == end` exactly the capsule is drawn as a [`sphere`].
///
/// # Errors
///
/// [`DrawError::DegenerateInput`](crate::DrawError::DegenerateInput) when
/// the endpoints differ but are too close to give the capsule an axis.
pub fn capsule<S: LineSink + ?Sized>(
    sink: &mut S,
    start: Point3<f32>,
    end: Point3<f32>,
    radius: f32,
    color: Color,
    options: DrawOptions,
) -> Result<()> {
    if start == end {
        sphere(sink, start, radius, color, options);
        return Ok(());
    }

    let axis = try_normalize(end - start, "capsule", "end - start")?;
    let reference = if is_parallel(axis, WORLD_FORWARD) {
        WORLD_UP
    } else {
        WORLD_FORWARD
    };
    let right_dir = axis.cross(reference).normalize();
    let forward_dir = right_dir.cross(axis);

    let up = axis * radius;
    let right = right_dir * radius;
    let forward = forward_dir * radius;

    // Start cap
    arc(sink, right, -up, start, color, options);
    arc(sink, -right, -up, start, color, options);
    arc(sink, forward, -up, start, color, options);
    arc(sink, -forward, -up, start, color, options);
    ring(sink, right, forward, start, color, options);

    // End cap
    arc(sink, right, up, end, color, options);
    arc(sink, -right, up, end, color, options);
    arc(sink, forward, up, end, color, options);
    arc(sink, -forward, up, end, color, options);
    ring(sink, right, forward, end, color, options);

    // Side rails
    for offset in [right, -right, forward, -forward] {
        line(sink, start + offset, end + offset, color, options);
    }
    Ok(())
}
