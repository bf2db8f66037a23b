//! Mesh Geometry
//!
//! CPU-side geometry for the demos: a unit cube with per-face normals
//! (instanced for every box) and the wireframe ground grid.

/// Vertex for the cube mesh (position, normal).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Vertex for line rendering (position only).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

/// Vertex buffer layout for [`MeshVertex`] (shader locations 0, 1).
pub fn mesh_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    }
}

/// Vertex buffer layout for [`LineVertex`] (shader location 0).
pub fn line_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    }
}

/// Unit cube centered at the origin: 24 vertices (4 per face, so normals
/// stay flat) and 36 indices. Instance scale stretches it to box size.
pub fn cube_mesh() -> (Vec<MeshVertex>, Vec<u32>) {
    // (normal, four corners counter-clockwise seen from outside)
    const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // +X
        (
            [1.0, 0.0, 0.0],
            [
                [0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
                [0.5, 0.5, 0.5],
                [0.5, -0.5, 0.5],
            ],
        ),
        // -X
        (
            [-1.0, 0.0, 0.0],
            [
                [-0.5, -0.5, 0.5],
                [-0.5, 0.5, 0.5],
                [-0.5, 0.5, -0.5],
                [-0.5, -0.5, -0.5],
            ],
        ),
        // +Y
        (
            [0.0, 1.0, 0.0],
            [
                [-0.5, 0.5, 0.5],
                [0.5, 0.5, 0.5],
                [0.5, 0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        // -Y
        (
            [0.0, -1.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, 0.5],
            ],
        ),
        // +Z
        (
            [0.0, 0.0, 1.0],
            [
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [0.5, 0.5, 0.5],
                [-0.5, 0.5, 0.5],
            ],
        ),
        // -Z
        (
            [0.0, 0.0, -1.0],
            [
                [0.5, -0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [-0.5, 0.5, -0.5],
                [0.5, 0.5, -0.5],
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in FACES {
        let base = vertices.len() as u32;
        for position in corners {
            vertices.push(MeshVertex { position, normal });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// Wireframe ground grid on the XZ plane at y = 0, as a line list.
///
/// `extent` is the full side length, `divisions` the number of cells per
/// side (25 x 25 in the demos, matching the ground slab footprint).
pub fn ground_grid_lines(extent: f32, divisions: u32) -> Vec<LineVertex> {
    let half = extent / 2.0;
    let step = extent / divisions as f32;
    let mut vertices = Vec::with_capacity(((divisions + 1) * 4) as usize);

    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        // Line parallel to Z
        vertices.push(LineVertex {
            position: [offset, 0.0, -half],
        });
        vertices.push(LineVertex {
            position: [offset, 0.0, half],
        });
        // Line parallel to X
        vertices.push(LineVertex {
            position: [-half, 0.0, offset],
        });
        vertices.push(LineVertex {
            position: [half, 0.0, offset],
        });
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_mesh_counts() {
        let (vertices, indices) = cube_mesh();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
    }

    #[test]
    fn test_cube_mesh_is_unit_sized() {
        let (vertices, _) = cube_mesh();
        for v in &vertices {
            for c in v.position {
                assert!(c.abs() <= 0.5 + 1e-6);
            }
        }
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let (vertices, _) = cube_mesh();
        for v in &vertices {
            // Each face vertex lies on the half-cube boundary its normal points at
            let dot = v.position[0] * v.normal[0]
                + v.position[1] * v.normal[1]
                + v.position[2] * v.normal[2];
            assert!((dot - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_cube_indices_in_range() {
        let (vertices, indices) = cube_mesh();
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_ground_grid_line_count() {
        let lines = ground_grid_lines(25.0, 25);
        // 26 lines per direction, 2 vertices per line
        assert_eq!(lines.len(), 26 * 2 * 2);
    }

    #[test]
    fn test_ground_grid_spans_extent() {
        let lines = ground_grid_lines(25.0, 25);
        let max_x = lines
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert!((max_x - 12.5).abs() < 1e-5);
        assert!(lines.iter().all(|v| v.position[1] == 0.0));
    }
}
