//! # Gizmo Math
//!
//! Vector helpers shared by all gizmos: spherical interpolation between
//! vectors, checked normalization and the quarter-arc tessellation every
//! round gizmo is built from.
//!
//! World axes follow the engine convention used by the gizmos: `up` is +Y,
//! `right` is +X and `forward` is +Z.

pub mod transform;

pub use transform::Transform;

use crate::color::Color;
use crate::error::{DrawError, Result};
use crate::options::DrawOptions;
use crate::sink::{LineSink, Segment};
use cgmath::{
    InnerSpace, Point2, Point3, Quaternion, Rad, Rotation3, Vector2, Vector3, VectorSpace,
};

/// Number of straight segments used for a quarter arc
pub const ARC_SEGMENTS: u32 = 25;

/// Vectors shorter than this cannot be normalized
pub const NORMALIZE_EPSILON: f32 = 1e-5;

/// Below this, two unit vectors count as parallel
const PARALLEL_EPSILON: f32 = 1e-6;

pub const WORLD_UP: Vector3<f32> = Vector3 { x: 0.0, y: 1.0, z: 0.0 };
pub const WORLD_RIGHT: Vector3<f32> = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
pub const WORLD_FORWARD: Vector3<f32> = Vector3 { x: 0.0, y: 0.0, z: 1.0 };

/// Normalize `v`, or report which input of which gizmo was degenerate.
pub fn try_normalize(
    v: Vector3<f32>,
    operation: &'static str,
    input: &'static str,
) -> Result<Vector3<f32>> {
    let length = v.magnitude();
    if !(length > NORMALIZE_EPSILON) || !length.is_finite() {
        log::debug!("{}: {} has length {}, rejecting", operation, input, length);
        return Err(DrawError::DegenerateInput { operation, input });
    }
    Ok(v / length)
}

/// 2D variant of [`try_normalize`]
pub fn try_normalize_2d(
    v: Vector2<f32>,
    operation: &'static str,
    input: &'static str,
) -> Result<Vector2<f32>> {
    try_normalize(v.extend(0.0), operation, input).map(|n| n.truncate())
}

/// Whether two unit vectors point along the same line (either sign)
pub fn is_parallel(a: Vector3<f32>, b: Vector3<f32>) -> bool {
    a.cross(b).magnitude2() < PARALLEL_EPSILON
}

/// Unit vector perpendicular to the unit vector `v`.
///
/// Crosses with world up, or world forward when `v` lies along up, so the
/// result only depends on `v`.
pub fn perpendicular(v: Vector3<f32>) -> Vector3<f32> {
    let axis = if is_parallel(v, WORLD_UP) {
        WORLD_FORWARD
    } else {
        WORLD_UP
    };
    axis.cross(v).normalize()
}

/// Spherical interpolation between two vectors.
///
/// `t` is clamped to `[0, 1]`. The direction turns from `a` toward `b` along
/// the shorter arc while the length is interpolated linearly, so two vectors
/// of equal length sweep a circular arc. Opposite vectors turn about
/// [`perpendicular`]. Nearly parallel or zero-length inputs fall back to
/// linear interpolation.
pub fn slerp(a: Vector3<f32>, b: Vector3<f32>, t: f32) -> Vector3<f32> {
    let t = t.clamp(0.0, 1.0);
    let len_a = a.magnitude();
    let len_b = b.magnitude();
    if len_a < NORMALIZE_EPSILON || len_b < NORMALIZE_EPSILON {
        return a.lerp(b, t);
    }

    let from = a / len_a;
    let to = b / len_b;
    let length = len_a + (len_b - len_a) * t;
    let cos = from.dot(to).clamp(-1.0, 1.0);

    // Too close for a stable rotation axis
    if cos > 1.0 - PARALLEL_EPSILON {
        return a.lerp(b, t);
    }
    let axis = if cos < -1.0 + PARALLEL_EPSILON {
        perpendicular(from)
    } else {
        from.cross(to).normalize()
    };

    let rotation = Quaternion::from_axis_angle(axis, Rad(cos.acos() * t));
    (rotation * from) * length
}

/// 2D variant of [`slerp`], interpolating in the XY plane
pub fn slerp_2d(a: Vector2<f32>, b: Vector2<f32>, t: f32) -> Vector2<f32> {
    slerp(a.extend(0.0), b.extend(0.0), t).truncate()
}

/// Lift a 2D point into the XY plane
pub fn to_3d(p: Point2<f32>) -> Point3<f32> {
    Point3::new(p.x, p.y, 0.0)
}

/// Draw a quarter arc from `center + from` to `center + to` as
/// [`ARC_SEGMENTS`] straight segments.
///
/// Each segment runs from step `i` back to step `i - 1`, so the first point
/// of the arc is the end of the first segment.
pub fn arc<S: LineSink + ?Sized>(
    sink: &mut S,
    from: Vector3<f32>,
    to: Vector3<f32>,
    center: Point3<f32>,
    color: Color,
    options: DrawOptions,
) {
    let steps = ARC_SEGMENTS as f32;
    for i in 1..=ARC_SEGMENTS {
        let current = center + slerp(from, to, i as f32 / steps);
        let previous = center + slerp(from, to, (i - 1) as f32 / steps);
        sink.draw_segment(Segment::new(current, previous, color, options));
    }
}

/// A full circle of radius `|right|` made of four quarter arcs
/// (`-right → up → right → -up → -right`).
pub fn ring<S: LineSink + ?Sized>(
    sink: &mut S,
    right: Vector3<f32>,
    up: Vector3<f32>,
    center: Point3<f32>,
    color: Color,
    options: DrawOptions,
) {
    arc(sink, -right, up, center, color, options);
    arc(sink, up, right, center, color, options);
    arc(sink, right, -up, center, color, options);
    arc(sink, -up, -right, center, color, options);
}
