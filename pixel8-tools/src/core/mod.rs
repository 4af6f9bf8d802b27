// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

pub mod account;
pub mod artifact;
pub mod chain;
pub mod codegen;
pub mod contracts;
pub mod deployment;
pub mod verification;
pub mod wiring;
