// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Compiled contract artifacts (Forge JSON output).

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Bytes;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("could not read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("bad artifact json in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One compiled contract, as written by `forge build` to
/// `out/<Name>.sol/<Name>.json`.
#[derive(Debug, Deserialize)]
pub struct Artifact {
    pub abi: serde_json::Value,
    pub bytecode: ArtifactBytecode,
}

#[derive(Debug, Deserialize)]
pub struct ArtifactBytecode {
    pub object: Bytes,
}

impl Artifact {
    /// Loads the artifact for `name` from a Forge output directory.
    pub fn load(dir: &Path, name: &str) -> Result<Self, ArtifactError> {
        let path = dir.join(format!("{name}.sol")).join(format!("{name}.json"));
        Self::load_path(&path)
    }

    pub fn load_path(path: &Path) -> Result<Self, ArtifactError> {
        let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ArtifactError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Creation code: compiled bytecode followed by the ABI-encoded
    /// constructor arguments.
    pub fn creation_code(&self, constructor_args: &[u8]) -> Vec<u8> {
        let mut code = self.bytecode.object.to_vec();
        code.extend_from_slice(constructor_args);
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT_JSON: &str = r#"{
        "abi": [{"type": "constructor", "inputs": [{"name": "owner", "type": "address"}]}],
        "bytecode": {"object": "0x6080c0de"}
    }"#;

    #[test]
    fn parses_forge_output() {
        let artifact: Artifact = serde_json::from_str(ARTIFACT_JSON).unwrap();
        assert_eq!(artifact.bytecode.object.as_ref(), &[0x60, 0x80, 0xc0, 0xde]);
        assert!(artifact.abi.is_array());
    }

    #[test]
    fn creation_code_appends_constructor_args() {
        let artifact: Artifact = serde_json::from_str(ARTIFACT_JSON).unwrap();
        let code = artifact.creation_code(&[0xaa, 0xbb]);
        assert_eq!(code, vec![0x60, 0x80, 0xc0, 0xde, 0xaa, 0xbb]);
    }

    #[test]
    fn load_reports_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::load(dir.path(), "Pixel8").unwrap_err();
        assert!(matches!(err, ArtifactError::Io { path, .. } if path.ends_with("Pixel8.sol/Pixel8.json")));
    }

    #[test]
    fn load_finds_nested_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let contract_dir = dir.path().join("Pixel8.sol");
        fs::create_dir(&contract_dir).unwrap();
        fs::write(contract_dir.join("Pixel8.json"), ARTIFACT_JSON).unwrap();

        let artifact = Artifact::load(dir.path(), "Pixel8").unwrap();
        assert_eq!(artifact.bytecode.object.len(), 4);
    }
}
