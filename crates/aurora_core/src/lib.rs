// aurora_core: the GPU context shared by every sample

pub mod context;

pub use context::{ContextError, GpuContext};
