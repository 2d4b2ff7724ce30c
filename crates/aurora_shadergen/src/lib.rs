//! `aurora_shadergen` — the shader cross-compilation pipeline.
//!
//! Takes Vulkan-style GLSL through the same stages the native toolchain
//! would: parse and validate the GLSL, lower it to a SPIR-V binary, read
//! the SPIR-V back and emit WGSL, then compile the WGSL on a real device
//! as the final validation step.  `naga` does the heavy lifting for every
//! text/binary transform; this crate only sequences the stages and attaches
//! diagnostics.

use std::fmt;

use thiserror::Error;

pub mod manifest;
pub mod pipeline;

pub use manifest::{PipelineManifest, StageArtifact};
pub use pipeline::{cross_compile, validate_on_device, CompiledStage};

/// Shader stages the pipeline knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
            ShaderStage::Compute => naga::ShaderStage::Compute,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        };
        f.write_str(name)
    }
}

/// Errors from any stage of the cross-compilation pipeline.
///
/// Each variant carries the stage that failed plus the underlying
/// diagnostic rendered to text, so binaries can report failures without
/// depending on `naga`'s error types.
#[derive(Debug, Error)]
pub enum ShaderGenError {
    #[error("GLSL parse failed for {stage} shader:\n{message}")]
    GlslParse { stage: ShaderStage, message: String },
    #[error("module validation failed for {stage} shader:\n{message}")]
    Validation { stage: ShaderStage, message: String },
    #[error("SPIR-V emission failed for {stage} shader: {message}")]
    SpirvEmit { stage: ShaderStage, message: String },
    #[error("SPIR-V read-back failed for {stage} shader: {message}")]
    SpirvParse { stage: ShaderStage, message: String },
    #[error("WGSL emission failed for {stage} shader: {message}")]
    WgslEmit { stage: ShaderStage, message: String },
    #[error("device rejected {stage} shader module: {message}")]
    DeviceValidation { stage: ShaderStage, message: String },
}
