//! The staged transforms: GLSL → naga IR → SPIR-V → naga IR → WGSL, plus
//! final compilation on a device.
//!
//! Going *through* the SPIR-V binary (rather than straight from GLSL to
//! WGSL) is deliberate: it exercises the same intermediate a native
//! toolchain ships, and `.spv` artifacts written to disk can be inspected
//! with standard SPIR-V tooling.

use naga::valid::{Capabilities, ModuleInfo, ValidationFlags, Validator};

use crate::{ShaderGenError, ShaderStage};

/// The artifacts of one shader stage after a full pipeline run.
#[derive(Debug, Clone)]
pub struct CompiledStage {
    pub stage: ShaderStage,
    /// SPIR-V binary, little-endian words as bytes.
    pub spirv: Vec<u8>,
    /// WGSL recovered from the SPIR-V.
    pub wgsl: String,
}

/// Runs `source` through every CPU-side stage and returns the artifacts.
pub fn cross_compile(stage: ShaderStage, source: &str) -> Result<CompiledStage, ShaderGenError> {
    let module = parse_glsl(stage, source)?;
    let info = validate(stage, &module, source)?;
    let spirv = emit_spirv(stage, &module, &info)?;
    let wgsl = spirv_to_wgsl(stage, &spirv)?;
    log::info!(
        "{stage} shader: {} bytes of SPIR-V, {} bytes of WGSL",
        spirv.len(),
        wgsl.len()
    );
    Ok(CompiledStage { stage, spirv, wgsl })
}

/// Stage 1: parse Vulkan-style GLSL into naga IR.
pub fn parse_glsl(stage: ShaderStage, source: &str) -> Result<naga::Module, ShaderGenError> {
    let mut frontend = naga::front::glsl::Frontend::default();
    frontend
        .parse(&naga::front::glsl::Options::from(stage.to_naga()), source)
        .map_err(|e| ShaderGenError::GlslParse {
            stage,
            message: e.emit_to_string(source),
        })
}

fn validate(
    stage: ShaderStage,
    module: &naga::Module,
    source: &str,
) -> Result<ModuleInfo, ShaderGenError> {
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(module)
        .map_err(|e| ShaderGenError::Validation {
            stage,
            message: e.emit_to_string(source),
        })
}

/// Stage 2: lower the validated module to a SPIR-V binary.
pub fn emit_spirv(
    stage: ShaderStage,
    module: &naga::Module,
    info: &ModuleInfo,
) -> Result<Vec<u8>, ShaderGenError> {
    let options = naga::back::spv::Options::default();
    let pipeline_options = naga::back::spv::PipelineOptions {
        shader_stage: stage.to_naga(),
        entry_point: "main".to_string(),
    };
    let words = naga::back::spv::write_vec(module, info, &options, Some(&pipeline_options))
        .map_err(|e| ShaderGenError::SpirvEmit {
            stage,
            message: e.to_string(),
        })?;
    Ok(bytemuck::cast_slice(&words).to_vec())
}

/// Stage 3: read the SPIR-V back and emit WGSL from it.
pub fn spirv_to_wgsl(stage: ShaderStage, spirv: &[u8]) -> Result<String, ShaderGenError> {
    let module =
        naga::front::spv::parse_u8_slice(spirv, &naga::front::spv::Options::default()).map_err(
            |e| ShaderGenError::SpirvParse {
                stage,
                message: e.to_string(),
            },
        )?;
    let info = Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| ShaderGenError::Validation {
            stage,
            message: e.to_string(),
        })?;
    naga::back::wgsl::write_string(&module, &info, naga::back::wgsl::WriterFlags::empty()).map_err(
        |e| ShaderGenError::WgslEmit {
            stage,
            message: e.to_string(),
        },
    )
}

/// Stage 4: compile the WGSL on a real device.
///
/// Uses an error scope so a rejection surfaces as a `ShaderGenError`
/// instead of wgpu's internal error handler.
pub fn validate_on_device(
    device: &wgpu::Device,
    stage: ShaderStage,
    label: &str,
    wgsl: &str,
) -> Result<wgpu::ShaderModule, ShaderGenError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(wgsl.into()),
    });
    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(ShaderGenError::DeviceValidation {
            stage,
            message: error.to_string(),
        });
    }
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERT: &str = "\
#version 450
layout(location = 0) in vec4 a_position;
layout(location = 2) in vec2 a_uv;
layout(location = 0) out vec2 v_uv;
void main() {
    v_uv = a_uv;
    gl_Position = a_position;
}
";

    const FRAG: &str = "\
#version 450
layout(location = 0) in vec2 v_uv;
layout(location = 0) out vec4 frag_color;
void main() {
    frag_color = vec4(v_uv, 1.0, 1.0);
}
";

    #[test]
    fn vertex_stage_round_trips_to_wgsl() {
        let compiled = cross_compile(ShaderStage::Vertex, VERT).unwrap();
        // SPIR-V magic number, little-endian
        assert_eq!(&compiled.spirv[..4], &0x0723_0203u32.to_le_bytes());
        assert!(compiled.wgsl.contains("@vertex"));
        assert!(compiled.wgsl.contains("fn main"));
    }

    #[test]
    fn fragment_stage_round_trips_to_wgsl() {
        let compiled = cross_compile(ShaderStage::Fragment, FRAG).unwrap();
        assert!(compiled.wgsl.contains("@fragment"));
    }

    #[test]
    fn broken_glsl_reports_a_parse_error() {
        let err = cross_compile(ShaderStage::Fragment, "#version 450\nvoid main( {}").unwrap_err();
        assert!(matches!(err, ShaderGenError::GlslParse { .. }));
    }

    #[test]
    fn stage_mismatch_is_rejected() {
        // vertex source handed to the fragment frontend has no business
        // writing gl_Position
        let err = cross_compile(ShaderStage::Fragment, VERT);
        assert!(err.is_err());
    }
}
