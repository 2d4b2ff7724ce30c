//! `aurora_geometry` — CPU-side procedural mesh generation.
//!
//! The crate produces interleaved vertex/index data ready for GPU upload but
//! performs no GPU work itself; the only `wgpu` type it exposes is the
//! [`wgpu::VertexBufferLayout`] matching [`MeshVertex`].

pub mod sphere;
pub mod vertex;

pub use sphere::{generate, generate_seeded, MeshData, SphereParams};
pub use vertex::MeshVertex;
