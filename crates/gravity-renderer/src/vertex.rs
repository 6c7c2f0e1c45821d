use crate::mesh::Vertex;

/// GPU vertex layout with Pod/Zeroable for buffer uploading
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub pos: [f32; 2],   // 8 bytes
    pub color: [f32; 3], // 12 bytes
}

impl From<Vertex> for GpuVertex {
    fn from(vertex: Vertex) -> Self {
        Self {
            pos: vertex.pos,
            color: vertex.color,
        }
    }
}

impl GpuVertex {
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use gravity_physics::Vector2;

    #[test]
    fn test_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 20);
    }

    #[test]
    fn test_from_vertex_copies_fields() {
        let vertex = Vertex::new(Vector2::new(0.25, -0.5), Color::from_packed(0x00FF00));
        let gpu = GpuVertex::from(vertex);
        assert_eq!(gpu.pos, [0.25, -0.5]);
        assert_eq!(gpu.color, [0.0, 1.0, 0.0]);
    }
}
