//! Uniform Structs for GPU Shaders
//!
//! GPU-compatible uniform buffer structures that must match the WGSL layout
//! in `shaders/box_demo.wgsl` exactly.

use glam::{Mat4, Vec3};

/// Per-frame scene uniforms.
///
/// WGSL layout (96 bytes total):
///   offset  0: view_proj (mat4x4<f32>) = 64 bytes
///   offset 64: camera_pos (vec3<f32>)  = 12 bytes
///   offset 76: time (f32)              = 4 bytes
///   offset 80: sun_dir (vec3<f32>)     = 12 bytes
///   offset 92: ambient (f32)           = 4 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    /// Seconds since demo start
    pub time: f32,
    /// Normalized direction toward the light
    pub sun_dir: [f32; 3],
    /// Ambient light intensity
    pub ambient: f32,
}

static_assertions::assert_eq_size!(SceneUniforms, [u8; 96]);

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 17.0, 25.0],
            time: 0.0,
            // Directional light from above and behind the camera
            sun_dir: Vec3::new(0.0, 1.0, 1.0).normalize().into(),
            // Soft white ambient
            ambient: 0.25,
        }
    }
}

impl SceneUniforms {
    /// Build per-frame uniforms from the camera state.
    pub fn new(view_proj: Mat4, camera_pos: Vec3, time: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: camera_pos.into(),
            time,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_uniforms_size() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 96);
    }

    #[test]
    fn test_scene_uniforms_pod() {
        let uniforms = SceneUniforms::default();
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), std::mem::size_of::<SceneUniforms>());
    }

    #[test]
    fn test_sun_dir_normalized() {
        let uniforms = SceneUniforms::default();
        let len = (uniforms.sun_dir[0].powi(2)
            + uniforms.sun_dir[1].powi(2)
            + uniforms.sun_dir[2].powi(2))
        .sqrt();
        assert!((len - 1.0).abs() < 1e-5);
    }
}
