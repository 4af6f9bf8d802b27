// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

/// The chain targeted when none is named on the command line.
pub const DEFAULT_CHAIN: &str = "local";

/// Default Forge output directory holding compiled artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "out";
