// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Binding generation.

use std::path::Path;

use crate::core::codegen;

/// Generates the `sol!` bindings declared in the bindings manifest.
pub fn codegen(manifest_path: &Path) -> eyre::Result<()> {
    let manifest = codegen::load_manifest(manifest_path)?;
    let matched = codegen::generate(&manifest)?;
    for path in &matched {
        debug!(@grey, "bound artifact: {}", path.display());
    }
    greyln!(
        "generated {} binding(s) to {}",
        matched.len(),
        manifest.out.display()
    );
    Ok(())
}
