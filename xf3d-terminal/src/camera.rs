//! Fixed viewpoint used to put already-transformed vertices on screen
use nalgebra::{Matrix4, Point3, Vector3};

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
    /// Camera slightly above the horizon, `distance` units from the origin
    pub fn new(width: u32, height: u32, distance: f32) -> Self {
        Self {
            position: Point3::new(0.0, distance * 0.35, distance),
            target: Point3::origin(),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            aspect: width as f32 / height.max(1) as f32,
            near: 0.1,
            far: 100.0 + distance,
        }
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(&self.position, &self.target, &self.up);
        let projection = Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far);
        projection * view
    }

    /// Project a world-space point to screen space.
    ///
    /// Returns `None` for points behind the camera; points off screen are
    /// still returned so partially visible triangles can be clipped by the
    /// rasterizer.
    pub fn project_to_screen(&self, point: &Point3<f32>, width: u32, height: u32) -> Option<(f32, f32, f32)> {
        Self::project_with(&self.view_projection(), point, width, height)
    }

    /// [`Camera::project_to_screen`] against a view-projection built once
    /// by the caller, for projecting a whole vertex buffer
    pub fn project_with(
        view_projection: &Matrix4<f32>,
        point: &Point3<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let clip = view_projection * point.to_homogeneous();

        // Prevent division by near-zero depth values
        if clip.w < 1e-6 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.w;

        // Convert to screen space
        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_lands_mid_screen() {
        let camera = Camera::new(80, 40, 10.0);
        let (x, y, depth) = camera.project_to_screen(&Point3::origin(), 80, 40).unwrap();
        assert!((x - 40.0).abs() < 1e-3);
        assert!((y - 20.0).abs() < 1e-3);
        assert!(depth > 0.0);
    }

    #[test]
    fn test_shared_view_projection_matches_per_point() {
        let camera = Camera::new(80, 40, 10.0);
        let vp = camera.view_projection();
        for point in [
            Point3::origin(),
            Point3::new(1.0, -2.0, 0.5),
            Point3::new(-3.0, 1.0, -4.0),
            Point3::new(0.0, 7.0, 20.0),
        ] {
            assert_eq!(
                Camera::project_with(&vp, &point, 80, 40),
                camera.project_to_screen(&point, 80, 40)
            );
        }
    }

    #[test]
    fn test_points_behind_camera_are_dropped() {
        let camera = Camera::new(80, 40, 10.0);
        assert!(camera.project_to_screen(&Point3::new(0.0, 7.0, 20.0), 80, 40).is_none());
    }
}
