/// Head rotation transforms composed from oscillation yaw and tilt pitch
use nalgebra::{Matrix3, Point3, Rotation3, Vector3};

use crate::geometry::Mesh;

/// Transform builder for the fan head orientation
pub struct Transform;

impl Transform {
    /// Yaw rotation about the vertical (z) axis, in degrees
    pub fn yaw_matrix(degrees: f32) -> Matrix3<f32> {
        Rotation3::new(Vector3::new(0.0, 0.0, degrees.to_radians())).into_inner()
    }

    /// Pitch rotation about the x axis, in degrees
    pub fn pitch_matrix(degrees: f32) -> Matrix3<f32> {
        Rotation3::new(Vector3::new(degrees.to_radians(), 0.0, 0.0)).into_inner()
    }

    /// Compose the head orientation: oscillation yaw applied after tilt.
    ///
    /// The yaw factor is identity while oscillation is disabled, and the
    /// pitch factor is identity for untilted archetypes.
    pub fn head_matrix(oscillating: bool, oscillate_angle: f32, tilt_angle: f32) -> Matrix3<f32> {
        let mut matrix = if oscillating {
            Self::yaw_matrix(oscillate_angle)
        } else {
            Matrix3::identity()
        };
        if tilt_angle != 0.0 {
            matrix *= Self::pitch_matrix(tilt_angle);
        }
        matrix
    }

    /// Rotate every vertex of a mesh in place
    pub fn apply(matrix: &Matrix3<f32>, mesh: &mut Mesh) {
        for vertex in &mut mesh.vertices {
            *vertex = Point3::from(matrix * vertex.coords);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_when_static_and_untilted() {
        let matrix = Transform::head_matrix(false, 25.0, 0.0);
        assert_relative_eq!(matrix, Matrix3::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_yaw_rotates_about_z() {
        let matrix = Transform::yaw_matrix(90.0);
        let rotated = matrix * Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(rotated, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_rotates_about_x() {
        let matrix = Transform::pitch_matrix(90.0);
        let rotated = matrix * Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(rotated, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_composition_order_yaw_then_tilt() {
        let composed = Transform::head_matrix(true, 30.0, 15.0);
        let expected = Transform::yaw_matrix(30.0) * Transform::pitch_matrix(15.0);
        assert_relative_eq!(composed, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_apply_rotates_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(1.0, 0.0, 0.0);
        let matrix = Transform::yaw_matrix(180.0);
        Transform::apply(&matrix, &mut mesh);
        assert_relative_eq!(mesh.vertices[0].x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.vertices[0].y, 0.0, epsilon = 1e-6);
    }
}
