//! Camera Module
//!
//! Fixed perspective camera for the box-drop demos. This module is
//! window-system agnostic - it only deals with camera state and math; the
//! aspect ratio is passed in by whoever owns the surface.

use glam::{Mat4, Vec3};

/// Perspective camera with an explicit look-at target.
///
/// The demos never move the camera; only the aspect ratio changes when the
/// window is resized, which the caller passes into [`Camera::view_proj`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// World-space eye position
    pub position: Vec3,
    /// World-space point the camera looks at
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            // Above and behind the grid, looking at the middle of the pile
            position: Vec3::new(0.0, 17.0, 25.0),
            target: Vec3::new(0.0, 5.0, 0.0),
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// View matrix looking from `position` at `target` with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Combined view-projection matrix for the given aspect ratio.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Normalized direction from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_default_framing() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 17.0, 25.0));
        assert_eq!(camera.target, Vec3::new(0.0, 5.0, 0.0));
        assert!((camera.fov - 75.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_camera_forward_normalized() {
        let camera = Camera::default();
        let forward = camera.forward();
        assert!((forward.length() - 1.0).abs() < 0.001);
        // Camera sits at +Z above the target, so it looks toward -Z and down
        assert!(forward.z < 0.0);
        assert!(forward.y < 0.0);
    }

    #[test]
    fn test_view_matrix_centers_target() {
        let camera = Camera::default();
        let view = camera.view_matrix();
        let target_view = view.transform_point3(camera.target);
        // Looking down -Z in view space, target on the view axis
        assert!(target_view.z < 0.0);
        assert!(target_view.x.abs() < 0.001);
        assert!(target_view.y.abs() < 0.001);
    }

    #[test]
    fn test_projection_respects_aspect() {
        let camera = Camera::default();
        let wide = camera.projection_matrix(2.0);
        let square = camera.projection_matrix(1.0);
        // Wider aspect compresses x
        assert!(wide.col(0).x < square.col(0).x);
    }
}
