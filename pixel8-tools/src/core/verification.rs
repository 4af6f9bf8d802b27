// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Source verification via the external `forge` verifier.
//!
//! Contracts are already live by the time verification runs; callers treat
//! failures here as non-fatal.

use std::process::Command;

use alloy::primitives::Address;

use crate::{core::chain::ChainConfig, utils::sys};

/// Optimizer runs the contracts are compiled with.
pub const NUM_OF_OPTIMIZATIONS: u32 = 200;

const FORGE_INSTALL_LINK: &str = "https://getfoundry.sh";

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("forge not found. Please see\n{FORGE_INSTALL_LINK}")]
    CommandDoesNotExist,
    #[error("chain {0} has no verifier API url")]
    NoVerifierUrl(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("forge verify-contract failed for {name} (exit code: {code:?})")]
    CommandFailure { name: String, code: Option<i32> },
}

/// One contract to submit for verification.
#[derive(Debug)]
pub struct VerifyTarget {
    pub name: &'static str,
    /// `path:Name` source locator.
    pub source: &'static str,
    pub address: Address,
    /// Raw ABI encoding of the constructor arguments, no selector.
    pub constructor_args: Vec<u8>,
}

/// Submits one contract to the chain's verification API and blocks until the
/// verifier finishes.
pub fn verify_contract(
    chain: &ChainConfig,
    api_key: &str,
    target: &VerifyTarget,
) -> Result<(), VerificationError> {
    let verifier_url = chain
        .verifier_api_url
        .ok_or_else(|| VerificationError::NoVerifierUrl(chain.name.to_string()))?;
    if !sys::command_exists("forge") {
        return Err(VerificationError::CommandDoesNotExist);
    }

    info!(@grey, "verifying {} at {}", target.name, target.address);
    let status = command(chain.chain_id, api_key, verifier_url, target).status()?;
    if !status.success() {
        return Err(VerificationError::CommandFailure {
            name: target.name.to_string(),
            code: status.code(),
        });
    }
    Ok(())
}

/// Assembles the `forge verify-contract` invocation.
fn command(chain_id: u64, api_key: &str, verifier_url: &str, target: &VerifyTarget) -> Command {
    let mut cmd = Command::new("forge");
    cmd.arg("verify-contract")
        .args(["--chain-id", &chain_id.to_string()])
        .args(["--etherscan-api-key", api_key])
        .args(["--verifier-url", verifier_url])
        .args(["--num-of-optimizations", &NUM_OF_OPTIMIZATIONS.to_string()])
        .arg("--watch")
        .args(["--constructor-args", &hex::encode(&target.constructor_args)])
        .arg(target.address.to_string())
        .arg(target.source);
    cmd
}
