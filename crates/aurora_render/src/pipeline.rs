/// The sphere render pipeline.
///
/// Compiles the embedded WGSL and combines it with the interleaved vertex
/// layout from `aurora_geometry`.  The shader passes clip-space position
/// through untouched and colors fragments by their uv, which makes seam and
/// pole texture-coordinate bugs immediately visible.
use std::sync::Arc;

use aurora_geometry::MeshVertex;

const SPHERE_WGSL: &str = r#"
struct VertexIn {
    @location(0) position: vec4f,
    @location(1) normal: vec3f,
    @location(2) uv: vec2f,
};

struct VertexOut {
    @builtin(position) position: vec4f,
    @location(0) color: vec4f,
};

@vertex
fn vs_main(vin: VertexIn) -> VertexOut {
    var vout: VertexOut;
    vout.position = vin.position;
    vout.color = vec4f(vin.uv, 1.0, 1.0);
    return vout;
}

@fragment
fn fs_main(vin: VertexOut) -> @location(0) vec4f {
    return vin.color;
}
"#;

#[derive(Clone)]
pub struct SpherePipeline {
    pub inner: Arc<wgpu::RenderPipeline>,
}

impl SpherePipeline {
    /// Compiles and links the sphere shader for the given `target_format`.
    ///
    /// Culling is disabled: the mesh's winding is whatever the generator
    /// emits, and jittered spheres can self-intersect anyway.
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sphere Shader"),
            source: wgpu::ShaderSource::Wgsl(SPHERE_WGSL.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sphere Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sphere Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            inner: Arc::new(pipeline),
        }
    }
}
