//! Render Module
//!
//! wgpu-based rendering for the box-drop demos: a shared GPU context, an
//! instanced pass for the cube grid and a line pass for the wireframe
//! ground plane.

pub mod gpu_context;
pub mod instancing;
pub mod mesh;
pub mod scene_renderer;
pub mod uniforms;

// Re-export commonly used types for convenience
pub use gpu_context::{GpuContext, GpuContextConfig};
pub use instancing::{
    BoxInstance, create_instance_buffer, instance_buffer_layout, pack_rgba, unpack_rgba,
};
pub use mesh::{LineVertex, MeshVertex, cube_mesh, ground_grid_lines};
pub use scene_renderer::SceneRenderer;
pub use uniforms::SceneUniforms;
