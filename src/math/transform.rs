//! Translation / rotation / scale transform used to place triangles and
//! meshes in world space.

use cgmath::{Deg, Matrix4, Point3, Quaternion, Rotation3, SquareMatrix, Vector3};
use cgmath::Transform as _;

/// Local-to-world transform applied as `T * R * S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    /// Identity transform
    pub fn new() -> Self {
        Self {
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn from_translation(translation: Vector3<f32>) -> Self {
        Self {
            translation,
            ..Self::new()
        }
    }

    pub fn with_translation(mut self, translation: Vector3<f32>) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Quaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotation about the world Y axis, the common case for placed objects
    pub fn with_rotation_y(self, angle: Deg<f32>) -> Self {
        self.with_rotation(Quaternion::from_angle_y(angle))
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vector3::new(scale, scale, scale);
        self
    }

    pub fn with_scale_xyz(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    /// The transform as a single matrix. Order matters: T * R * S
    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.translation);
        let r = Matrix4::from(self.rotation);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }

    /// Map a local-space point into world space
    pub fn transform_point(&self, point: Point3<f32>) -> Point3<f32> {
        self.matrix().transform_point(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(translation: Vector3<f32>) -> Self {
        Self::from_translation(translation)
    }
}

/// Identity check used to skip work on untransformed meshes
pub(crate) fn is_identity(matrix: &Matrix4<f32>) -> bool {
    *matrix == Matrix4::identity()
}

/// Apply a precomputed matrix to a point
pub(crate) fn apply(matrix: &Matrix4<f32>, point: Point3<f32>) -> Point3<f32> {
    if is_identity(matrix) {
        return point;
    }
    matrix.transform_point(point)
}
