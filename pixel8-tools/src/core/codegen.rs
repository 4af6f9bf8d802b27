// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Type-binding generation over compiled artifacts.
//!
//! `Bindings.toml` declares which Forge artifacts get alloy `sol!` bindings.
//! The generated file is consumed by downstream crates, not by this tool.

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Filename for the bindings manifest.
pub const FILENAME: &str = "Bindings.toml";

#[derive(Debug, Deserialize)]
pub struct BindingsManifest {
    /// Output file for the generated bindings module.
    pub out: PathBuf,
    /// Glob patterns over compiled artifact JSON files.
    pub include: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),
    #[error("bad include pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("missing {FILENAME}")]
    Missing,
    #[error("artifact path has no contract name: {0}")]
    NoName(PathBuf),
}

pub fn load_manifest(path: &Path) -> Result<BindingsManifest, CodegenError> {
    if !path.exists() {
        return Err(CodegenError::Missing);
    }
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

const GENERATED_HEADER: &str =
    "//! Generated by `pixel8-deploy codegen`. Do not edit.\n\nuse alloy::sol;\n";

/// Writes one `sol!` invocation per matched artifact into the manifest's
/// output file, returning the matched artifact paths.
pub fn generate(manifest: &BindingsManifest) -> Result<Vec<PathBuf>, CodegenError> {
    let mut matched = Vec::new();
    for pattern in &manifest.include {
        for entry in glob::glob(pattern)? {
            matched.push(entry?);
        }
    }
    matched.sort();
    matched.dedup();

    let mut out = String::from(GENERATED_HEADER);
    for path in &matched {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| CodegenError::NoName(path.clone()))?;
        write!(
            out,
            "\nsol!(\n    #[sol(rpc)]\n    {name},\n    \"{}\"\n);\n",
            path.display()
        )
        .expect("writing to string");
    }

    fs::write(&manifest.out, out)?;
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(&dir.path().join(FILENAME)).unwrap_err();
        assert!(matches!(err, CodegenError::Missing));
    }

    #[test]
    fn manifest_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        fs::write(
            &path,
            "out = \"bindings.rs\"\ninclude = [\"out/**/Pixel8.json\"]\n",
        )
        .unwrap();

        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.out, PathBuf::from("bindings.rs"));
        assert_eq!(manifest.include, vec!["out/**/Pixel8.json"]);
    }

    #[test]
    fn generates_one_sol_invocation_per_artifact() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Pixel8", "MintSwapPool"] {
            let contract_dir = dir.path().join("out").join(format!("{name}.sol"));
            fs::create_dir_all(&contract_dir).unwrap();
            fs::write(contract_dir.join(format!("{name}.json")), "{}").unwrap();
        }

        let manifest = BindingsManifest {
            out: dir.path().join("bindings.rs"),
            include: vec![format!("{}/out/**/*.json", dir.path().display())],
        };
        let matched = generate(&manifest).unwrap();
        assert_eq!(matched.len(), 2);

        let generated = fs::read_to_string(&manifest.out).unwrap();
        assert!(generated.contains("MintSwapPool,"));
        assert!(generated.contains("Pixel8,"));
        assert!(generated.contains("#[sol(rpc)]"));
        assert_eq!(generated.matches("sol!(").count(), 2);
    }
}
