// Renders the generated sphere once, off-screen, and saves the frame as a
// PNG.  The shader colors fragments by uv, so the pole fans and the seam
// are directly visible in the output — the fastest way to eyeball the
// texture-coordinate handling.

use anyhow::Context as _;
use aurora_core::GpuContext;
use aurora_geometry::{generate, SphereParams};
use aurora_render::{Mesh, SpherePipeline};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    pollster::block_on(run())
}

async fn run() -> anyhow::Result<()> {
    let context = GpuContext::new().await?;
    let device = &context.device;

    let data = generate(&SphereParams::default());
    log::info!(
        "sphere: {} vertices, {} indices",
        data.vertex_count(),
        data.indices.len()
    );
    let mesh = Mesh::upload(device, "Sphere", &data);
    let pipeline = SpherePipeline::new(device, FORMAT);

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Color Target"),
        size: wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Frame Encoder"),
    });
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sphere Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.05,
                        g: 0.05,
                        b: 0.08,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&pipeline.inner);
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), mesh.index_format);
        pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    // bytes per row must be a multiple of COPY_BYTES_PER_ROW_ALIGNMENT
    let unpadded = 4 * WIDTH;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    let padded = ((unpadded + align - 1) / align) * align;

    let readback = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Readback Buffer"),
        size: padded as u64 * HEIGHT as u64,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    encoder.copy_texture_to_buffer(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::ImageCopyBuffer {
            buffer: &readback,
            layout: wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(padded),
                rows_per_image: None,
            },
        },
        wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
    );

    context.queue.submit(std::iter::once(encoder.finish()));

    let slice = readback.slice(..);
    slice.map_async(wgpu::MapMode::Read, |_| {});
    device.poll(wgpu::Maintain::Wait);
    let mapped = slice.get_mapped_range();

    // drop the row padding while copying out
    let mut pixels = Vec::with_capacity((4 * WIDTH * HEIGHT) as usize);
    for row in 0..HEIGHT as usize {
        let start = row * padded as usize;
        pixels.extend_from_slice(&mapped[start..start + unpadded as usize]);
    }
    drop(mapped);

    image::save_buffer("hello_mesh.png", &pixels, WIDTH, HEIGHT, image::ColorType::Rgba8)
        .context("failed to write hello_mesh.png")?;

    println!("Rendered the sphere, output written to hello_mesh.png");
    Ok(())
}
