//! Scene Renderer
//!
//! Assembles the two demo render passes: the instanced translucent boxes and
//! the wireframe ground grid. All three demo binaries share this renderer;
//! they differ only in how they drive the simulation.

use super::gpu_context::GpuContext;
use super::instancing::{self, BoxInstance};
use super::mesh::{self, line_vertex_layout, mesh_vertex_layout};
use super::uniforms::SceneUniforms;

/// Background clear color (white, matching the demo's page background).
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Renderer for the box grid scene.
pub struct SceneRenderer {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    box_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,

    cube_vertex_buffer: wgpu::Buffer,
    cube_index_buffer: wgpu::Buffer,
    cube_index_count: u32,

    grid_vertex_buffer: wgpu::Buffer,
    grid_vertex_count: u32,

    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
}

impl SceneRenderer {
    /// Build pipelines and static geometry. `instance_capacity` is the
    /// maximum number of boxes ever uploaded (the grid size is fixed per
    /// demo run).
    pub fn new(gpu: &GpuContext, instance_capacity: usize, grid_extent: f32) -> Self {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Box Demo Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../../shaders/box_demo.wgsl").into(),
                ),
            });

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Scene Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let uniform_buffer =
            gpu.create_uniform_buffer("Scene Uniforms", &SceneUniforms::default());

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        // Instanced translucent boxes
        let box_pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Box Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_box"),
                    buffers: &[mesh_vertex_layout(), instancing::instance_buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_box"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        // Ground grid lines
        let line_pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Grid Line Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_line"),
                    buffers: &[line_vertex_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_line"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let (cube_vertices, cube_indices) = mesh::cube_mesh();
        let cube_vertex_buffer = gpu.create_vertex_buffer("Cube Vertices", &cube_vertices);
        let cube_index_buffer = gpu.create_index_buffer("Cube Indices", &cube_indices);

        let grid_vertices = mesh::ground_grid_lines(grid_extent, grid_extent as u32);
        let grid_vertex_buffer = gpu.create_vertex_buffer("Grid Lines", &grid_vertices);

        let instance_buffer = instancing::create_instance_buffer(
            &gpu.device,
            instance_capacity,
            Some("Box Instances"),
        );

        Self {
            uniform_buffer,
            bind_group,
            box_pipeline,
            line_pipeline,
            cube_vertex_buffer,
            cube_index_buffer,
            cube_index_count: cube_indices.len() as u32,
            grid_vertex_buffer,
            grid_vertex_count: grid_vertices.len() as u32,
            instance_buffer,
            instance_capacity,
            instance_count: 0,
        }
    }

    /// Upload per-frame scene uniforms.
    pub fn update_uniforms(&self, gpu: &GpuContext, uniforms: &SceneUniforms) {
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Upload the per-box instance data for this frame.
    ///
    /// # Panics
    /// Panics if `instances.len()` exceeds the capacity given at creation.
    pub fn update_instances(&mut self, gpu: &GpuContext, instances: &[BoxInstance]) {
        assert!(
            instances.len() <= self.instance_capacity,
            "Instance upload of {} exceeds capacity {}",
            instances.len(),
            self.instance_capacity
        );
        gpu.write_buffer(&self.instance_buffer, instances);
        self.instance_count = instances.len() as u32;
    }

    /// Render one frame: clear to white, draw the ground grid, then the
    /// translucent boxes on top.
    pub fn render(&self, gpu: &GpuContext) -> Result<(), wgpu::SurfaceError> {
        let output = gpu.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Ground grid first (opaque)
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.grid_vertex_buffer.slice(..));
            render_pass.draw(0..self.grid_vertex_count, 0..1);

            // Then the boxes, all in one instanced draw
            if self.instance_count > 0 {
                render_pass.set_pipeline(&self.box_pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.cube_vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                render_pass
                    .set_index_buffer(self.cube_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..self.cube_index_count, 0, 0..self.instance_count);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
