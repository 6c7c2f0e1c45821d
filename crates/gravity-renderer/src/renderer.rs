//! wgpu frame sink
//!
//! Uploads a finished [`GeometryBatch`](crate::GeometryBatch) into growable
//! vertex/index buffers and draws it with one `draw_indexed` call.

use crate::color::Color;
use crate::mesh::Vertex;
use crate::sink::FrameSink;
use crate::vertex::GpuVertex;

const INITIAL_VERTEX_CAPACITY: usize = 1024;
const INITIAL_INDEX_CAPACITY: usize = 2048;

/// Background behind the bodies
pub const CLEAR_COLOR: Color = Color::BLACK;

/// How batch triangles are rasterized
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    #[default]
    Solid,
    /// Triangle edges only, for inspecting the tessellation
    Wireframe,
}

impl FillMode {
    pub fn toggled(self) -> Self {
        match self {
            FillMode::Solid => FillMode::Wireframe,
            FillMode::Wireframe => FillMode::Solid,
        }
    }

    pub fn polygon_mode(self) -> wgpu::PolygonMode {
        match self {
            FillMode::Solid => wgpu::PolygonMode::Fill,
            FillMode::Wireframe => wgpu::PolygonMode::Line,
        }
    }

    /// Device features a pipeline in this mode needs
    pub fn required_features(self) -> wgpu::Features {
        match self {
            FillMode::Solid => wgpu::Features::empty(),
            FillMode::Wireframe => wgpu::Features::POLYGON_MODE_LINE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FillMode::Solid => "Gravity Batch Pipeline",
            FillMode::Wireframe => "Gravity Wireframe Pipeline",
        }
    }
}

pub struct BatchRenderer {
    pipeline: wgpu::RenderPipeline,
    wireframe_pipeline: Option<wgpu::RenderPipeline>,
    fill_mode: FillMode,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_capacity: usize,
    gpu_vertices: Vec<GpuVertex>,
    clear_color: wgpu::Color,
}

impl BatchRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        // Load shader
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Gravity Batch Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/batch.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Gravity Batch Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline =
            Self::create_pipeline(device, &shader, &pipeline_layout, surface_format, FillMode::Solid);

        // Line rasterization is an optional device feature
        let wireframe_pipeline = device
            .features()
            .contains(FillMode::Wireframe.required_features())
            .then(|| {
                Self::create_pipeline(
                    device,
                    &shader,
                    &pipeline_layout,
                    surface_format,
                    FillMode::Wireframe,
                )
            });

        let vertex_buffer = Self::create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY);
        let index_buffer = Self::create_index_buffer(device, INITIAL_INDEX_CAPACITY);

        Self {
            pipeline,
            wireframe_pipeline,
            fill_mode: FillMode::Solid,
            vertex_buffer,
            index_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            index_capacity: INITIAL_INDEX_CAPACITY,
            gpu_vertices: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            clear_color: wgpu::Color {
                r: CLEAR_COLOR.r as f64,
                g: CLEAR_COLOR.g as f64,
                b: CLEAR_COLOR.b as f64,
                a: 1.0,
            },
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        pipeline_layout: &wgpu::PipelineLayout,
        surface_format: wgpu::TextureFormat,
        fill_mode: FillMode,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(fill_mode.label()),
            layout: Some(pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[GpuVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: fill_mode.polygon_mode(),
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Gravity Vertex Buffer"),
            size: (capacity * std::mem::size_of::<GpuVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_index_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Gravity Index Buffer"),
            size: (capacity * std::mem::size_of::<u32>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    /// Switch how triangles are rasterized
    ///
    /// Returns false and stays solid if the device lacks line rasterization.
    pub fn set_fill_mode(&mut self, fill_mode: FillMode) -> bool {
        if fill_mode == FillMode::Wireframe && self.wireframe_pipeline.is_none() {
            log::warn!("Wireframe rendering is not supported by this device");
            self.fill_mode = FillMode::Solid;
            return false;
        }
        self.fill_mode = fill_mode;
        true
    }

    /// Clear `target` and draw the triangles described by `vertices`/`indices`
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        vertices: &[Vertex],
        indices: &[u32],
    ) {
        self.gpu_vertices.clear();
        self.gpu_vertices
            .extend(vertices.iter().copied().map(GpuVertex::from));

        // Resize vertex buffer if needed
        if self.gpu_vertices.len() > self.vertex_capacity {
            self.vertex_capacity = (self.gpu_vertices.len() * 2).next_power_of_two();
            self.vertex_buffer = Self::create_vertex_buffer(device, self.vertex_capacity);
            log::debug!("Grew vertex buffer to {} vertices", self.vertex_capacity);
        }

        // Resize index buffer if needed
        if indices.len() > self.index_capacity {
            self.index_capacity = (indices.len() * 2).next_power_of_two();
            self.index_buffer = Self::create_index_buffer(device, self.index_capacity);
            log::debug!("Grew index buffer to {} indices", self.index_capacity);
        }

        // Upload geometry
        if !indices.is_empty() {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.gpu_vertices),
            );
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(indices));
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Gravity Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if !indices.is_empty() {
            let pipeline = match (self.fill_mode, &self.wireframe_pipeline) {
                (FillMode::Wireframe, Some(wireframe)) => wireframe,
                _ => &self.pipeline,
            };
            render_pass.set_pipeline(pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..indices.len() as u32, 0, 0..1);
        }
    }
}

/// [`FrameSink`] that draws into one acquired surface texture
pub struct SurfaceFrame<'a> {
    pub renderer: &'a mut BatchRenderer,
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub view: &'a wgpu::TextureView,
}

impl FrameSink for SurfaceFrame<'_> {
    fn draw(&mut self, vertices: &[Vertex], indices: &[u32]) {
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Gravity Render Encoder"),
            });

        self.renderer.render(
            self.device,
            self.queue,
            &mut encoder,
            self.view,
            vertices,
            indices,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_mode_toggles() {
        assert_eq!(FillMode::default(), FillMode::Solid);
        assert_eq!(FillMode::Solid.toggled(), FillMode::Wireframe);
        assert_eq!(FillMode::Wireframe.toggled(), FillMode::Solid);
    }

    #[test]
    fn test_wireframe_needs_line_polygon_feature() {
        assert_eq!(FillMode::Solid.polygon_mode(), wgpu::PolygonMode::Fill);
        assert!(FillMode::Solid.required_features().is_empty());

        assert_eq!(FillMode::Wireframe.polygon_mode(), wgpu::PolygonMode::Line);
        assert!(FillMode::Wireframe
            .required_features()
            .contains(wgpu::Features::POLYGON_MODE_LINE));
    }
}
