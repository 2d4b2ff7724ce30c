// Generates the default sphere and prints its statistics.  The quickest
// smoke test of the geometry crate: no GPU, no window, just the buffers.

use aurora_geometry::{generate, SphereParams};

fn main() {
    env_logger::init();

    let params = SphereParams::default();
    let mesh = generate(&params);

    println!("Generated sphere:");
    println!("  vertices:  {}", mesh.vertex_count());
    println!("  indices:   {}", mesh.indices.len());
    println!("  triangles: {}", mesh.triangle_count());

    if let Some(v) = mesh.vertices.first() {
        println!(
            "  first vertex pos:    ({}, {}, {})",
            v.position[0], v.position[1], v.position[2]
        );
        println!(
            "  first vertex normal: ({}, {}, {})",
            v.normal[0], v.normal[1], v.normal[2]
        );
        println!("  first vertex uv:     ({}, {})", v.uv[0], v.uv[1]);
    }
}
