//! JSON manifest describing the artifacts a pipeline run wrote to disk.

use serde::{Deserialize, Serialize};

/// One artifact (a `.spv` or `.wgsl` file) produced for a shader stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageArtifact {
    /// Stage name: "vertex", "fragment" or "compute".
    pub stage: String,
    /// Artifact kind: "spirv" or "wgsl".
    pub kind: String,
    /// File name relative to the manifest's directory.
    pub file: String,
    /// Artifact size in bytes.
    pub bytes: u64,
    /// Entry point name inside the artifact.
    pub entry_point: String,
}

/// The whole run, serialized as `manifest.json` next to the artifacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PipelineManifest {
    pub artifacts: Vec<StageArtifact>,
}

impl PipelineManifest {
    pub fn push(&mut self, artifact: StageArtifact) {
        self.artifacts.push(artifact);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_round_trips_through_json() {
        let mut manifest = PipelineManifest::default();
        manifest.push(StageArtifact {
            stage: "vertex".into(),
            kind: "spirv".into(),
            file: "vertex.spv".into(),
            bytes: 420,
            entry_point: "main".into(),
        });
        let json = manifest.to_json().unwrap();
        let back: PipelineManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest);
    }
}
