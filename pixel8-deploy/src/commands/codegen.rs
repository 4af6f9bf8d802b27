// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

use std::path::PathBuf;

use pixel8_tools::{core::codegen::FILENAME, ops};

use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Path to the bindings manifest.
    #[arg(long, default_value = FILENAME)]
    manifest: PathBuf,
}

pub fn exec(args: Args) -> CliResult {
    ops::codegen(&args.manifest)?;
    Ok(())
}
