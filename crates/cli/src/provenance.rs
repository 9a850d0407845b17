//! `<artifact>.provenance.json` sidecars for generated test vectors.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a generated artifact.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
    pub outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self {
            params,
            tag,
            outputs: Vec::new(),
        }
    }

    pub fn with_outputs(mut self, outputs: Vec<PathBuf>) -> Self {
        self.outputs = outputs;
        self
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    engine_version: &'static str,
    callsite: String,
    tag: Option<&'a str>,
    params: &'a Value,
    /// The artifact first, then every file it indexes.
    outputs: Vec<String>,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        engine_version: hullref::VERSION,
        callsite: format!("{}:{}", caller.file(), caller.line()),
        tag: payload.tag.as_deref(),
        params: &payload.params,
        outputs: std::iter::once(artifact)
            .chain(payload.outputs.iter().map(PathBuf::as_path))
            .map(|p| p.display().to_string())
            .collect(),
    };
    let path = artifact.with_extension("provenance.json");
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` from the environment, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_manifest_and_lists_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("manifest.json");
        fs::write(&artifact, "[]").unwrap();
        let extra = dir.path().join("test_data_0.csv");
        let payload = Payload::new(json!({"cases": 1}), Some("nightly".to_string()))
            .with_outputs(vec![extra.clone()]);

        let path = write_sidecar(&artifact, payload).unwrap();
        assert_eq!(path, dir.path().join("manifest.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.display().to_string());
        assert_eq!(parsed["outputs"][1], extra.display().to_string());
        assert_eq!(parsed["tag"], "nightly");
        assert_eq!(parsed["params"]["cases"], 1);
        assert_eq!(parsed["engine_version"], hullref::VERSION);
        assert!(parsed["callsite"].as_str().unwrap().contains("provenance.rs"));
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }
}
