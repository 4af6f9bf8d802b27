// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Tools for deploying the Pixel8 contract suite.
//!
//! The suite consists of the Pixel8 NFT/game contract, the MintSwapPool swap
//! pool, the Factory and the GameStats contract. All four are deployed
//! deterministically through a keyless CREATE3 factory, so addresses are
//! fixed by the deploying account and a per-contract salt rather than by
//! deployment order.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
