/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Perspective camera looking at a fixed target
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Matrix4<f32>,
}

impl Camera {
    /// Camera on the +Z axis at `distance`, looking at the origin
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32, distance: f32) -> Self {
        let mut camera = Self {
            position: Point3::new(0.0, 0.0, distance),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
            projection: Matrix4::identity(),
        };
        camera.update_projection_matrix();
        camera
    }

    /// Set the aspect ratio from a surface size and rebuild the projection.
    ///
    /// A zero or non-finite ratio is ignored so the projection stays finite.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
        self.update_projection_matrix();
    }

    /// Recompute the cached projection after changing fov, aspect or clip planes
    pub fn update_projection_matrix(&mut self) {
        self.projection = Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far);
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    pub fn projection_matrix(&self) -> &Matrix4<f32> {
        &self.projection
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection * self.view_matrix()
    }

    /// Project a point to screen space through a matrix ending in this
    /// camera's projection (view-projection for world points, MVP for object-space ones).
    ///
    /// Returns pixel `x`, `y` (origin top-left) and NDC depth, or `None` when
    /// the point is behind the camera. Points off screen are still returned.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        to_clip: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let clip = to_clip * point.to_homogeneous();

        // Prevent division by near-zero depth values
        if clip.w < 1e-6 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        // Convert to screen space
        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(40.0, 2.0, 0.1, 1000.0, 120.0)
    }

    #[test]
    fn test_camera_creation() {
        let camera = camera();
        assert!((camera.fov - 40f32.to_radians()).abs() < 1e-6);
        assert_eq!(camera.position, Point3::new(0.0, 0.0, 120.0));
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn test_view_matrix() {
        let camera = camera();
        let view = camera.view_matrix();
        // The origin sits 120 units in front of the camera
        let origin = view.transform_point(&Point3::origin());
        assert!((origin - Point3::new(0.0, 0.0, -120.0)).norm() < 1e-4);
    }

    #[test]
    fn test_set_aspect_updates_projection() {
        let mut camera = camera();
        let before = *camera.projection_matrix();
        camera.set_aspect(800.0 / 600.0);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!((camera.projection_matrix() - before).norm() > 1e-3);
    }

    #[test]
    fn test_set_aspect_ignores_degenerate() {
        let mut camera = camera();
        camera.set_aspect(0.0);
        camera.set_aspect(f32::INFINITY);
        camera.set_aspect(f32::NAN);
        assert_eq!(camera.aspect, 2.0);
        assert!(camera.projection_matrix().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_project_center_and_behind() {
        let camera = camera();
        let vp = camera.view_projection();

        let (x, y, depth) = camera.project_to_screen(&Point3::origin(), &vp, 800, 400).unwrap();
        assert!((x - 400.0).abs() < 1e-3);
        assert!((y - 200.0).abs() < 1e-3);
        assert!(depth > -1.0 && depth < 1.0);

        assert!(camera
            .project_to_screen(&Point3::new(0.0, 0.0, 200.0), &vp, 800, 400)
            .is_none());
    }
}
