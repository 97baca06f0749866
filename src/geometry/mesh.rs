//! # Triangle and Mesh Wireframes

use crate::color::Color;
use crate::error::{DrawError, Result};
use crate::math::transform::{apply, Transform};
use crate::options::DrawOptions;
use crate::sink::{LineSink, Segment};
use cgmath::Point3;

/// Indexed triangle geometry drawn by [`mesh`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireMesh {
    /// Vertex positions in local space
    pub vertices: Vec<Point3<f32>>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
}

impl WireMesh {
    pub fn new(vertices: Vec<Point3<f32>>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Build from raw `[x, y, z]` positions, the layout GPU vertex data uses.
    pub fn from_positions(positions: &[[f32; 3]], indices: Vec<u32>) -> Self {
        Self {
            vertices: positions.iter().copied().map(Point3::from).collect(),
            indices,
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of complete triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check that the index buffer describes whole triangles over existing vertices.
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(DrawError::IncompleteTriangle {
                index_count: self.indices.len(),
            });
        }
        match self.indices.iter().find(|&&i| i as usize >= self.vertices.len()) {
            Some(&index) => Err(DrawError::IndexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            }),
            None => Ok(()),
        }
    }

    fn vertex(&self, index: u32) -> Result<Point3<f32>> {
        self.vertices
            .get(index as usize)
            .copied()
            .ok_or(DrawError::IndexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            })
    }
}

/// The closed outline `a → b → c → a`, drawn for a single frame with depth testing.
pub fn triangle<S: LineSink + ?Sized>(
    sink: &mut S,
    a: Point3<f32>,
    b: Point3<f32>,
    c: Point3<f32>,
    color: Color,
) {
    let options = DrawOptions::default();
    sink.draw_segment(Segment::new(a, b, color, options));
    sink.draw_segment(Segment::new(b, c, color, options));
    sink.draw_segment(Segment::new(c, a, color, options));
}

/// [`triangle`] with each vertex mapped from local to world space first.
pub fn triangle_transformed<S: LineSink + ?Sized>(
    sink: &mut S,
    a: Point3<f32>,
    b: Point3<f32>,
    c: Point3<f32>,
    color: Color,
    transform: &Transform,
) {
    let matrix = transform.matrix();
    triangle(
        sink,
        apply(&matrix, a),
        apply(&matrix, b),
        apply(&matrix, c),
        color,
    );
}

/// World-space triangles of `mesh`, produced lazily, one per three indices.
///
/// A trailing partial triangle is skipped; use [`WireMesh::validate`] to
/// reject it. An index past the vertex buffer yields an error item.
pub fn mesh_triangles<'a>(
    mesh: &'a WireMesh,
    transform: &Transform,
) -> impl Iterator<Item = Result<[Point3<f32>; 3]>> + 'a {
    let matrix = transform.matrix();
    mesh.indices.chunks_exact(3).map(move |tri| -> Result<[Point3<f32>; 3]> {
        Ok([
            apply(&matrix, mesh.vertex(tri[0])?),
            apply(&matrix, mesh.vertex(tri[1])?),
            apply(&matrix, mesh.vertex(tri[2])?),
        ])
    })
}

/// Every triangle of `mesh` as a wireframe, placed by `transform`.
///
/// The mesh is validated before anything is drawn, so a bad index buffer
/// produces no partial output.
///
/// # Errors
///
/// [`DrawError::IncompleteTriangle`] or [`DrawError::IndexOutOfRange`] for a
/// malformed index buffer.
pub fn mesh<S: LineSink + ?Sized>(
    sink: &mut S,
    mesh: &WireMesh,
    color: Color,
    transform: &Transform,
) -> Result<()> {
    if let Err(err) = mesh.validate() {
        log::debug!("mesh: rejecting index buffer: {}", err);
        return Err(err);
    }
    for tri in mesh_triangles(mesh, transform) {
        let [a, b, c] = tri?;
        triangle(sink, a, b, c, color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tests::assert_point_near;
    use crate::sink::SegmentRecorder;
    use cgmath::{Deg, Vector3};

    fn quad() -> WireMesh {
        WireMesh::from_positions(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            vec![0, 1, 2, 2, 3, 0],
        )
    }

    #[test]
    fn test_triangle_path() {
        let mut recorder = SegmentRecorder::new();
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        triangle(&mut recorder, a, b, c, Color::RED);

        let s = recorder.segments();
        assert_eq!(s.len(), 3);
        assert_eq!((s[0].start, s[0].end), (a, b));
        assert_eq!((s[1].start, s[1].end), (b, c));
        assert_eq!((s[2].start, s[2].end), (c, a));
        assert!(s.iter().all(|seg| seg.options == DrawOptions::default()));
    }

    #[test]
    fn test_triangle_transformed() {
        let mut recorder = SegmentRecorder::new();
        let transform = Transform::from_translation(Vector3::new(0.0, 0.0, 5.0))
            .with_scale(2.0);
        triangle_transformed(
            &mut recorder,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Color::RED,
            &transform,
        );

        let s = recorder.segments();
        assert_point_near(s[0].start, Point3::new(0.0, 0.0, 5.0));
        assert_point_near(s[1].start, Point3::new(2.0, 0.0, 5.0));
        assert_point_near(s[2].start, Point3::new(0.0, 2.0, 5.0));
    }

    #[test]
    fn test_triangle_transformed_scales_then_rotates_then_translates() {
        let mut recorder = SegmentRecorder::new();
        let transform = Transform::from_translation(Vector3::new(0.0, 0.0, 5.0))
            .with_rotation_y(Deg(90.0))
            .with_scale(2.0);
        triangle_transformed(
            &mut recorder,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Color::RED,
            &transform,
        );

        // +X scaled to 2 turns onto -Z about +Y before the offset is added
        let s = recorder.segments();
        assert_point_near(s[0].start, Point3::new(0.0, 0.0, 5.0));
        assert_point_near(s[1].start, Point3::new(0.0, 0.0, 3.0));
        assert_point_near(s[2].start, Point3::new(0.0, 2.0, 5.0));
        assert_point_near(s[2].end, s[0].start);
    }

    #[test]
    fn test_mesh_draws_each_triangle() {
        let mut recorder = SegmentRecorder::new();
        let shape = quad();
        assert_eq!(shape.triangle_count(), 2);
        mesh(&mut recorder, &shape, Color::GRAY, &Transform::default()).unwrap();

        let s = recorder.segments();
        assert_eq!(s.len(), 6);
        assert_eq!(s[3].start, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(s[5].end, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_mesh_triangles_is_lazy_and_transformed() {
        let shape = quad();
        let transform = Transform::from_translation(Vector3::new(0.0, 3.0, 0.0));
        let mut triangles = mesh_triangles(&shape, &transform);

        let first = triangles.next().unwrap().unwrap();
        assert_point_near(first[2], Point3::new(1.0, 4.0, 0.0));
        assert!(triangles.next().is_some());
        assert!(triangles.next().is_none());
    }

    #[test]
    fn test_mesh_rejects_bad_indices() {
        let mut recorder = SegmentRecorder::new();
        let mut broken = quad();
        broken.indices.push(1);
        assert_eq!(
            mesh(&mut recorder, &broken, Color::GRAY, &Transform::default()),
            Err(DrawError::IncompleteTriangle { index_count: 7 })
        );

        let mut broken = quad();
        broken.indices[4] = 9;
        assert_eq!(
            mesh(&mut recorder, &broken, Color::GRAY, &Transform::default()),
            Err(DrawError::IndexOutOfRange {
                index: 9,
                vertex_count: 4
            })
        );
        // Nothing is drawn for a rejected mesh
        assert!(recorder.is_empty());

        // The lazy iterator reports the bad triangle in place
        let results: Vec<_> = mesh_triangles(&broken, &Transform::default()).collect();
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
