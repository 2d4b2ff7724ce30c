// Drives the full shader cross-compilation pipeline:
//
//   GLSL  →  SPIR-V binary  →  WGSL  →  device compilation
//
// Each intermediate is written to the output directory together with a
// JSON manifest, so the artifacts can be inspected or fed to other tools.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use aurora_core::GpuContext;
use aurora_shadergen::{
    cross_compile, validate_on_device, PipelineManifest, ShaderStage, StageArtifact,
};
use clap::Parser;

const DEFAULT_VERT: &str = "\
#version 450
layout(location = 0) in vec4 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec2 a_uv;
layout(location = 0) out vec2 v_uv;
void main() {
    v_uv = a_uv;
    gl_Position = a_position;
}
";

const DEFAULT_FRAG: &str = "\
#version 450
layout(location = 0) in vec2 v_uv;
layout(location = 0) out vec4 frag_color;
void main() {
    frag_color = vec4(v_uv, 1.0, 1.0);
}
";

#[derive(Parser)]
#[command(about = "Cross-compiles GLSL through SPIR-V to WGSL and validates it on the GPU")]
struct Args {
    /// Vertex GLSL source; an embedded shader is used when omitted.
    #[arg(long)]
    vert: Option<PathBuf>,
    /// Fragment GLSL source; an embedded shader is used when omitted.
    #[arg(long)]
    frag: Option<PathBuf>,
    /// Directory receiving the .spv / .wgsl artifacts and manifest.json.
    #[arg(long, default_value = "shader_out")]
    out_dir: PathBuf,
    /// Skip the final device-validation stage (no GPU required).
    #[arg(long)]
    no_device: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let vert = read_source(&args.vert, DEFAULT_VERT)?;
    let frag = read_source(&args.frag, DEFAULT_FRAG)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let mut manifest = PipelineManifest::default();
    let mut compiled_stages = Vec::new();

    for (stage, source) in [(ShaderStage::Vertex, vert), (ShaderStage::Fragment, frag)] {
        let compiled = cross_compile(stage, &source)?;

        let spv_name = format!("{stage}.spv");
        fs::write(args.out_dir.join(&spv_name), &compiled.spirv)
            .with_context(|| format!("failed to write {spv_name}"))?;
        manifest.push(StageArtifact {
            stage: stage.to_string(),
            kind: "spirv".into(),
            file: spv_name,
            bytes: compiled.spirv.len() as u64,
            entry_point: "main".into(),
        });

        let wgsl_name = format!("{stage}.wgsl");
        fs::write(args.out_dir.join(&wgsl_name), &compiled.wgsl)
            .with_context(|| format!("failed to write {wgsl_name}"))?;
        manifest.push(StageArtifact {
            stage: stage.to_string(),
            kind: "wgsl".into(),
            file: wgsl_name,
            bytes: compiled.wgsl.len() as u64,
            entry_point: "main".into(),
        });

        compiled_stages.push(compiled);
    }

    if !args.no_device {
        let context = pollster::block_on(GpuContext::new())?;
        for compiled in &compiled_stages {
            let label = format!("{} module", compiled.stage);
            validate_on_device(&context.device, compiled.stage, &label, &compiled.wgsl)?;
            log::info!("{} WGSL accepted by the device", compiled.stage);
        }
    }

    let manifest_path = args.out_dir.join("manifest.json");
    fs::write(&manifest_path, manifest.to_json()?)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    println!("Pipeline complete; artifacts in {}", args.out_dir.display());
    Ok(())
}

fn read_source(path: &Option<PathBuf>, fallback: &str) -> anyhow::Result<String> {
    match path {
        Some(p) => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        None => Ok(fallback.to_string()),
    }
}
