/// A drawable GPU mesh — a pair of vertex/index buffers plus the index
/// count.
///
/// Meshes are cheaply cloneable because the underlying buffers are `Arc`-
/// wrapped; a second handle does **not** copy GPU memory.
use std::sync::Arc;

use aurora_geometry::MeshData;

use crate::buffer;

#[derive(Clone)]
pub struct Mesh {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    /// Index format used when binding this mesh.
    pub index_format: wgpu::IndexFormat,
}

impl Mesh {
    /// Uploads CPU-side mesh data as-is.  The vertex buffer keeps the
    /// 36-byte interleaved layout described by
    /// [`aurora_geometry::MeshVertex::layout`].
    pub fn upload(device: &wgpu::Device, label: &str, data: &MeshData) -> Self {
        log::debug!(
            "uploading mesh '{label}': {} vertices, {} indices",
            data.vertex_count(),
            data.indices.len()
        );
        Self {
            vertex_buffer: buffer::create_vertex(device, label, &data.vertices),
            index_buffer: buffer::create_index(device, label, &data.indices),
            index_count: data.indices.len() as u32,
            index_format: wgpu::IndexFormat::Uint16,
        }
    }
}
