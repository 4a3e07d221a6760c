/// Camera and projection utilities shared with hosts
use nalgebra::{Matrix4, Point3, Vector3};

/// Camera configuration for framing the fan.
///
/// The fan model is z-up (blades sweep the xy plane, stands drop along
/// -z), so the default view orbits the origin with z as the up vector.
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(3.0, 3.0, 2.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 0.0, 1.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            aspect: width as f32 / height as f32,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Place the camera on an orbit around the target.
    ///
    /// `azimuth` and `elevation` are in radians; `distance` is the
    /// radius of the orbit.
    pub fn orbit(&mut self, azimuth: f32, elevation: f32, distance: f32) {
        let (sin_az, cos_az) = azimuth.sin_cos();
        let (sin_el, cos_el) = elevation.sin_cos();
        self.position = self.target
            + Vector3::new(
                distance * cos_el * cos_az,
                distance * cos_el * sin_az,
                distance * sin_el,
            );
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the perspective projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// Returns screen coordinates plus a depth value, or None when the
    /// point falls outside the view volume.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let view = self.view_matrix();
        let eye = view.transform_point(point);

        // Points at or behind the eye plane cannot be projected
        if eye.z >= -self.near {
            return None;
        }

        let clip = self.projection_matrix() * eye.to_homogeneous();
        let w = clip.w;
        if w.abs() < 1e-6 {
            return None;
        }

        let ndc_x = clip.x / w;
        let ndc_y = clip.y / w;
        let depth = -eye.z;

        // Clip test
        if !(-1.0..=1.0).contains(&ndc_x) || !(-1.0..=1.0).contains(&ndc_y) {
            return None;
        }

        // Convert to screen space
        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(camera.up, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_orbit_distance() {
        let mut camera = Camera::new(800, 600);
        camera.orbit(0.8, 0.35, 5.0);
        assert_relative_eq!(
            (camera.position - camera.target).norm(),
            5.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let mut camera = Camera::new(800, 600);
        camera.orbit(0.0, 0.0, 5.0);
        let (x, y, depth) = camera
            .project_to_screen(&Point3::new(0.0, 0.0, 0.0), 800, 600)
            .unwrap();
        assert_relative_eq!(x, 400.0, epsilon = 1e-2);
        assert_relative_eq!(y, 300.0, epsilon = 1e-2);
        assert_relative_eq!(depth, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_point_behind_camera_clipped() {
        let mut camera = Camera::new(800, 600);
        camera.orbit(0.0, 0.0, 5.0);
        // Far beyond the camera position along the view axis
        assert!(camera
            .project_to_screen(&Point3::new(10.0, 0.0, 0.0), 800, 600)
            .is_none());
    }
}
