//! # 2D Gizmos
//!
//! Shapes in the XY plane. Segments are emitted with `z = 0`.

use super::ARROW_SLERP;
use crate::color::Color;
use crate::error::Result;
use crate::math::{arc, ring, slerp_2d, to_3d, try_normalize_2d};
use crate::options::DrawOptions;
use crate::sink::{LineSink, Segment};
use cgmath::{EuclideanSpace, Point2, Vector2};

fn line<S: LineSink + ?Sized>(
    sink: &mut S,
    a: Point2<f32>,
    b: Point2<f32>,
    color: Color,
    options: DrawOptions,
) {
    sink.draw_segment(Segment::new(to_3d(a), to_3d(b), color, options));
}

/// A `+` cross centered on `point` with arms of half-length `size`.
///
/// A zero `size` still emits both (zero-length) segments.
pub fn point_2d<S: LineSink + ?Sized>(
    sink: &mut S,
    point: Point2<f32>,
    size: f32,
    color: Color,
    options: DrawOptions,
) {
    let up = Vector2::new(0.0, size);
    let right = Vector2::new(size, 0.0);

    line(sink, point - up, point + up, color, options);
    line(sink, point - right, point + right, color, options);
}

/// An arrow from `point` toward `target`, `scale` units long.
///
/// The head is drawn at `point` when `arrow_towards_point` is set, otherwise
/// at the far end of the shaft. Its two barbs are unit length and open at
/// [`ARROW_ANGLE_DEG`](super::ARROW_ANGLE_DEG) from the shaft, and a third
/// segment closes the head.
///
/// # Errors
///
/// [`DrawError::DegenerateInput`](crate::DrawError::DegenerateInput) when
/// `target` coincides with `point`.
pub fn arrow_2d<S: LineSink + ?Sized>(
    sink: &mut S,
    point: Point2<f32>,
    target: Point2<f32>,
    scale: f32,
    color: Color,
    arrow_towards_point: bool,
    options: DrawOptions,
) -> Result<()> {
    let forward = try_normalize_2d(target - point, "arrow_2d", "target - point")?;
    let right = Vector2::new(forward.y, -forward.x);
    let end = point + forward * scale;

    line(sink, point, end, color, options);

    let (head, direction) = if arrow_towards_point {
        (point, forward)
    } else {
        (end, -forward)
    };
    let barb_a = head + slerp_2d(direction, right, ARROW_SLERP);
    let barb_b = head + slerp_2d(direction, -right, ARROW_SLERP);

    line(sink, head, barb_a, color, options);
    line(sink, head, barb_b, color, options);
    line(sink, barb_a, barb_b, color, options);
    Ok(())
}

/// A circle of `radius` around `point`, drawn as four quarter arcs.
///
/// The arc basis is taken from the direction of `point` itself (from the
/// origin), so the tessellation rotates with the circle's position.
///
/// # Errors
///
/// [`DrawError::DegenerateInput`](crate::DrawError::DegenerateInput) when
/// `point` is the origin, since it then has no direction.
pub fn circle_2d<S: LineSink + ?Sized>(
    sink: &mut S,
    point: Point2<f32>,
    radius: f32,
    color: Color,
    options: DrawOptions,
) -> Result<()> {
    let up = try_normalize_2d(point.to_vec(), "circle_2d", "point")? * radius;
    let right = Vector2::new(up.y, -up.x);

    ring(
        sink,
        right.extend(0.0),
        up.extend(0.0),
        to_3d(point),
        color,
        options,
    );
    Ok(())
}

/// A stadium shape: semicircular caps at `start` and `end` joined by two
/// straight rails `radius` away from the axis.
///
/// # Errors
///
/// [`DrawError::DegenerateInput`](crate::DrawError::DegenerateInput) when
/// `start` and `end` coincide.
pub fn capsule_2d<S: LineSink + ?Sized>(
    sink: &mut S,
    start: Point2<f32>,
    end: Point2<f32>,
    radius: f32,
    color: Color,
    options: DrawOptions,
) -> Result<()> {
    let up = try_normalize_2d(end - start, "capsule_2d", "end - start")? * radius;
    let right = Vector2::new(up.y, -up.x);

    let (up3, right3) = (up.extend(0.0), right.extend(0.0));
    let (start3, end3) = (to_3d(start), to_3d(end));

    // End caps
    arc(sink, right3, -up3, start3, color, options);
    arc(sink, -right3, -up3, start3, color, options);
    arc(sink, right3, up3, end3, color, options);
    arc(sink, -right3, up3, end3, color, options);

    // Side rails
    line(sink, start + right, end + right, color, options);
    line(sink, start - right, end - right, color, options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawError;
    use crate::math::tests::assert_point_near;
    use crate::sink::SegmentRecorder;
    use cgmath::{MetricSpace, Point3};

    fn opts() -> DrawOptions {
        DrawOptions::default()
    }

    #[test]
    fn test_point_2d() {
        let mut recorder = SegmentRecorder::new();
        point_2d(
            &mut recorder,
            Point2::new(1.0, 1.0),
            0.5,
            Color::WHITE,
            opts(),
        );

        let s = recorder.segments();
        assert_eq!(s.len(), 2);
        assert_point_near(s[0].start, Point3::new(1.0, 0.5, 0.0));
        assert_point_near(s[0].end, Point3::new(1.0, 1.5, 0.0));
        assert_point_near(s[1].start, Point3::new(0.5, 1.0, 0.0));
        assert_point_near(s[1].end, Point3::new(1.5, 1.0, 0.0));
    }

    #[test]
    fn test_point_2d_zero_size() {
        let mut recorder = SegmentRecorder::new();
        point_2d(
            &mut recorder,
            Point2::new(3.0, 0.0),
            0.0,
            Color::WHITE,
            opts(),
        );
        assert_eq!(recorder.segments().len(), 2);
        assert!(recorder.segments().iter().all(|s| s.length() == 0.0));
    }

    #[test]
    fn test_arrow_2d_towards_point() {
        let mut recorder = SegmentRecorder::new();
        arrow_2d(
            &mut recorder,
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            1.0,
            Color::RED,
            true,
            opts(),
        )
        .unwrap();

        let s = recorder.segments();
        assert_eq!(s.len(), 4);
        let origin = Point3::new(0.0, 0.0, 0.0);
        assert_point_near(s[0].start, origin);
        assert_point_near(s[0].end, Point3::new(1.0, 0.0, 0.0));

        let (sin, cos) = 15f32.to_radians().sin_cos();
        assert_point_near(s[1].start, origin);
        assert_point_near(s[1].end, Point3::new(cos, -sin, 0.0));
        assert_point_near(s[2].start, origin);
        assert_point_near(s[2].end, Point3::new(cos, sin, 0.0));
        // Closing line between the barb tips
        assert_point_near(s[3].start, s[1].end);
        assert_point_near(s[3].end, s[2].end);
        assert!(s.iter().all(|seg| seg.color == Color::RED));
    }

    #[test]
    fn test_arrow_2d_head_at_end() {
        let mut recorder = SegmentRecorder::new();
        arrow_2d(
            &mut recorder,
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            2.0,
            Color::RED,
            false,
            opts(),
        )
        .unwrap();

        let s = recorder.segments();
        let tip = Point3::new(0.0, 2.0, 0.0);
        assert_point_near(s[0].end, tip);
        assert_point_near(s[1].start, tip);
        assert_point_near(s[2].start, tip);
        // Barbs point back down the shaft
        assert!(s[1].end.y < tip.y);
        assert!(s[2].end.y < tip.y);
        assert!((s[1].end.distance(tip) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_arrow_2d_degenerate() {
        let mut recorder = SegmentRecorder::new();
        let p = Point2::new(2.0, 2.0);
        let err = arrow_2d(&mut recorder, p, p, 1.0, Color::RED, true, opts()).unwrap_err();
        assert!(matches!(
            err,
            DrawError::DegenerateInput {
                operation: "arrow_2d",
                ..
            }
        ));
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_circle_2d_segment_count_and_radius() {
        let mut recorder = SegmentRecorder::new();
        let center = Point2::new(3.0, 4.0);
        circle_2d(&mut recorder, center, 2.0, Color::GREEN, opts()).unwrap();

        let s = recorder.segments();
        assert_eq!(s.len(), 100);
        for segment in s {
            assert!((segment.start.distance(to_3d(center)) - 2.0).abs() < 1e-4);
            assert_eq!(segment.start.z, 0.0);
        }
    }

    #[test]
    fn test_circle_2d_orientation_follows_position() {
        // First arc starts at -right where up = normalize(point) * radius
        let mut recorder = SegmentRecorder::new();
        circle_2d(
            &mut recorder,
            Point2::new(0.0, 5.0),
            1.0,
            Color::GREEN,
            opts(),
        )
        .unwrap();
        assert_point_near(recorder.segments()[0].end, Point3::new(-1.0, 5.0, 0.0));

        recorder.clear();
        circle_2d(
            &mut recorder,
            Point2::new(5.0, 0.0),
            1.0,
            Color::GREEN,
            opts(),
        )
        .unwrap();
        assert_point_near(recorder.segments()[0].end, Point3::new(5.0, 1.0, 0.0));
    }

    #[test]
    fn test_circle_2d_at_origin_is_rejected() {
        let mut recorder = SegmentRecorder::new();
        let result = circle_2d(
            &mut recorder,
            Point2::new(0.0, 0.0),
            1.0,
            Color::GREEN,
            opts(),
        );
        assert!(result.is_err());
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_capsule_2d() {
        let mut recorder = SegmentRecorder::new();
        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(0.0, 4.0);
        capsule_2d(&mut recorder, start, end, 1.0, Color::BLUE, opts()).unwrap();

        let s = recorder.segments();
        assert_eq!(s.len(), 102);

        // Caps bulge away from the shaft
        assert_point_near(s[24].start, Point3::new(0.0, -1.0, 0.0));
        assert_point_near(s[74].start, Point3::new(0.0, 5.0, 0.0));

        // Rails are offset by the radius
        let rails = &s[100..];
        assert_point_near(rails[0].start, Point3::new(1.0, 0.0, 0.0));
        assert_point_near(rails[0].end, Point3::new(1.0, 4.0, 0.0));
        assert_point_near(rails[1].start, Point3::new(-1.0, 0.0, 0.0));
        assert_point_near(rails[1].end, Point3::new(-1.0, 4.0, 0.0));
    }

    #[test]
    fn test_capsule_2d_degenerate() {
        let mut recorder = SegmentRecorder::new();
        let p = Point2::new(1.0, 1.0);
        let result = capsule_2d(&mut recorder, p, p, 1.0, Color::BLUE, opts());
        assert!(result.is_err());
        assert!(recorder.is_empty());
    }
}
