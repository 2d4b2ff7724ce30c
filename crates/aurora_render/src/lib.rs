//! `aurora_render` — GPU-upload and pipeline glue for the samples.
//!
//! | Module     | Responsibility                                    |
//! |------------|---------------------------------------------------|
//! | `buffer`   | Vertex / index buffer creation helpers            |
//! | `mesh`     | Drawable GPU mesh handle + upload from `MeshData` |
//! | `pipeline` | The uv-colored sphere render pipeline             |

pub mod buffer;
pub mod mesh;
pub mod pipeline;

pub use mesh::Mesh;
pub use pipeline::SpherePipeline;
