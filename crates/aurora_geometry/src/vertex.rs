/// Interleaved vertex type shared by every mesh this crate generates.
///
/// The position carries an explicit homogeneous `1.0` in its fourth
/// component so the buffer can be bound as `vec4<f32>` without a shader-side
/// expansion.  Nine floats per vertex, 36-byte stride, attribute offsets
/// 0 / 16 / 28.  The matching WGSL attribute locations are declared by the
/// sphere pipeline in `aurora_render`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Object-space position (x, y, z, 1.0).
    pub position: [f32; 4],
    /// Unit surface normal; zero for degenerate (zero-radius) geometry.
    pub normal: [f32; 3],
    /// Texture coordinate, v flipped so v=0 is the top of the texture.
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Returns the `VertexBufferLayout` that matches this struct's memory
    /// layout.  Pass this to `wgpu::VertexState::buffers` when building a
    /// render pipeline.
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // @location(0) position
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 0,
                },
                // @location(1) normal
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 1,
                },
                // @location(2) uv
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: std::mem::size_of::<[f32; 7]>() as wgpu::BufferAddress,
                    shader_location: 2,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_36_bytes() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 36);
    }

    #[test]
    fn layout_matches_struct() {
        let layout = MeshVertex::layout();
        assert_eq!(layout.array_stride, 36);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 16);
        assert_eq!(layout.attributes[2].offset, 28);
    }
}
