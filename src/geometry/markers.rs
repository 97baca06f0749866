//! # Markers, Vectors and Planes

use crate::color::Color;
use crate::error::Result;
use crate::math::{is_parallel, try_normalize, WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};
use crate::options::DrawOptions;
use crate::sink::{LineSink, Ray, Segment};
use cgmath::{Deg, InnerSpace, Point3, Quaternion, Rotation3, Vector3};

/// Three world-axis lines through `position`, each `size` long in total.
pub fn marker<S: LineSink + ?Sized>(
    sink: &mut S,
    position: Point3<f32>,
    size: f32,
    color: Color,
    options: DrawOptions,
) {
    let half = size * 0.5;
    for axis in [WORLD_UP, WORLD_RIGHT, WORLD_FORWARD] {
        sink.draw_segment(Segment::new(
            position + axis * half,
            position - axis * half,
            color,
            options,
        ));
    }
}

/// A ray of `direction * ray_size` from `position` with a [`marker`] of
/// `marker_size` at its tip.
///
/// `options` applies to both the ray and the marker. Neither is forced to a
/// single frame or drawn on top of the scene; pass
/// `DrawOptions::default().with_depth_test(false)` for an overlay.
pub fn vector<S: LineSink + ?Sized>(
    sink: &mut S,
    position: Point3<f32>,
    direction: Vector3<f32>,
    ray_size: f32,
    marker_size: f32,
    color: Color,
    options: DrawOptions,
) {
    let ray = direction * ray_size;
    sink.draw_ray(Ray::new(position, ray, color, options));
    marker(sink, position + ray, marker_size, color, options);
}

/// A square in the plane through `position` perpendicular to `normal`,
/// with its diagonals and a ray of `normal * size` showing the normal.
///
/// The half-diagonals are `size * |normal|` long. The first diagonal lies
/// along `normal × forward`, or `normal × up` when the normal is along the
/// world forward axis.
///
/// # Errors
///
/// [`DrawError::DegenerateInput`](crate::DrawError::DegenerateInput) when
/// `normal` is zero.
pub fn plane<S: LineSink + ?Sized>(
    sink: &mut S,
    position: Point3<f32>,
    normal: Vector3<f32>,
    size: f32,
    color: Color,
    options: DrawOptions,
) -> Result<()> {
    let unit_normal = try_normalize(normal, "plane", "normal")?;
    let reference = if is_parallel(unit_normal, WORLD_FORWARD) {
        WORLD_UP
    } else {
        WORLD_FORWARD
    };

    let diagonal = normal.cross(reference).normalize() * normal.magnitude();
    let corner0 = position + diagonal * size;
    let corner2 = position - diagonal * size;

    let quarter_turn = Quaternion::from_axis_angle(unit_normal, Deg(90.0));
    let diagonal = quarter_turn * diagonal;
    let corner1 = position + diagonal * size;
    let corner3 = position - diagonal * size;

    let corners = [corner0, corner1, corner2, corner3];
    let mut line =
        |a: Point3<f32>, b: Point3<f32>| sink.draw_segment(Segment::new(a, b, color, options));

    // Diagonals
    line(corner0, corner2);
    line(corner1, corner3);
    // Outline
    for i in 0..corners.len() {
        line(corners[i], corners[(i + 1) % corners.len()]);
    }

    sink.draw_ray(Ray::new(position, normal * size, color, options));
    Ok(())
}
