//! GPU Instance Buffer System for the Box Grid
//!
//! GPU-compatible instance data for drawing the whole cube grid in a single
//! instanced draw call, one instance per physics box.

use wgpu::util::DeviceExt;

/// GPU instance data for a single box.
///
/// Layout (48 bytes total, 16-byte aligned for GPU compatibility):
/// - position: vec3<f32> (12 bytes) - World position
/// - _pad0:    u32 (4 bytes) - Padding for alignment
/// - rotation: vec4<f32> (16 bytes) - Quaternion rotation (x, y, z, w)
/// - scale:    f32 (4 bytes) - Cube edge length
/// - color:    u32 (4 bytes) - Packed RGBA color (8 bits per channel)
/// - _pad1:    2 x u32 (8 bytes) - Tail padding
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxInstance {
    /// World position (x, y, z)
    pub position: [f32; 3],
    pub _pad0: u32,
    /// Rotation quaternion (x, y, z, w)
    pub rotation: [f32; 4],
    /// Cube edge length
    pub scale: f32,
    /// Packed RGBA color (0xRRGGBBAA format)
    pub color: u32,
    pub _pad1: [u32; 2],
}

static_assertions::assert_eq_size!(BoxInstance, [u8; 48]);

impl Default for BoxInstance {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            _pad0: 0,
            rotation: [0.0, 0.0, 0.0, 1.0], // Identity quaternion
            scale: 1.0,
            color: 0xFFFFFFFF, // White, fully opaque
            _pad1: [0, 0],
        }
    }
}

impl BoxInstance {
    /// Create an instance from a pose, edge length and packed color.
    pub fn new(position: [f32; 3], rotation: [f32; 4], scale: f32, color: u32) -> Self {
        Self {
            position,
            _pad0: 0,
            rotation,
            scale,
            color,
            _pad1: [0, 0],
        }
    }
}

/// Pack RGBA color components into a single u32 value.
/// Format: 0xRRGGBBAA
#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32)
}

/// Unpack a u32 color value into RGBA components.
#[inline]
pub fn unpack_rgba(packed: u32) -> (u8, u8, u8, u8) {
    let r = ((packed >> 24) & 0xFF) as u8;
    let g = ((packed >> 16) & 0xFF) as u8;
    let b = ((packed >> 8) & 0xFF) as u8;
    let a = (packed & 0xFF) as u8;
    (r, g, b, a)
}

/// Create a GPU instance buffer holding up to `capacity` boxes.
pub fn create_instance_buffer(
    device: &wgpu::Device,
    capacity: usize,
    label: Option<&str>,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label,
        size: (capacity * std::mem::size_of::<BoxInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Create a GPU instance buffer initialized with the given instances.
pub fn create_instance_buffer_init(
    device: &wgpu::Device,
    instances: &[BoxInstance],
    label: Option<&str>,
) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label,
        contents: bytemuck::cast_slice(instances),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

/// Describes the vertex buffer layout for [`BoxInstance`].
///
/// Shader locations 2..=5; locations 0 and 1 belong to the cube mesh
/// (position, normal).
pub fn instance_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<BoxInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 2,
            },
            // _pad0 is skipped (offset 12)
            // rotation: vec4<f32> at offset 16
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 16,
                shader_location: 3,
            },
            // scale: f32 at offset 32
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 32,
                shader_location: 4,
            },
            // color: u32 at offset 36
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Uint32,
                offset: 36,
                shader_location: 5,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_instance_size() {
        assert_eq!(std::mem::size_of::<BoxInstance>(), 48);
    }

    #[test]
    fn test_default_instance() {
        let instance = BoxInstance::default();
        assert_eq!(instance.position, [0.0, 0.0, 0.0]);
        assert_eq!(instance.rotation, [0.0, 0.0, 0.0, 1.0]); // Identity quaternion
        assert_eq!(instance.scale, 1.0);
        assert_eq!(instance.color, 0xFFFFFFFF);
    }

    #[test]
    fn test_pack_unpack_rgba() {
        let (r, g, b, a) = (255, 128, 64, 191);
        let packed = pack_rgba(r, g, b, a);
        let (ur, ug, ub, ua) = unpack_rgba(packed);
        assert_eq!((ur, ug, ub, ua), (r, g, b, a));
    }

    #[test]
    fn test_pack_rgba_layout() {
        // Format: 0xRRGGBBAA
        assert_eq!(pack_rgba(0xFF, 0, 0, 0), 0xFF000000);
        assert_eq!(pack_rgba(0, 0, 0, 0xFF), 0x000000FF);
    }

    #[test]
    fn test_instance_layout_skips_padding() {
        let layout = instance_buffer_layout();
        assert_eq!(layout.array_stride, 48);
        // rotation must start past the padded position
        assert_eq!(layout.attributes[1].offset, 16);
        // color sits right after scale
        assert_eq!(layout.attributes[3].offset, 36);
    }
}
