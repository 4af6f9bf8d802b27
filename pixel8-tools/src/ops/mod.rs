// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

pub use addresses::addresses;
pub use codegen::codegen;
pub use deploy::deploy;
pub use verify::verify;

mod addresses;
mod codegen;
mod deploy;
mod verify;
