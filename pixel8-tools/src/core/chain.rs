// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Target chain registry.
//!
//! A deployment run targets exactly one entry of this table, selected by name
//! on the command line. The table is the single source of truth for RPC
//! endpoints and the well-known accounts each chain uses.

use alloy::primitives::{address, Address};

/// Name of the ephemeral development chain (anvil).
pub const LOCAL_CHAIN: &str = "local";

#[derive(Debug)]
pub struct ChainConfig {
    pub name: &'static str,
    pub chain_id: u64,
    pub rpc_url: &'static str,
    /// Contract owner account.
    pub owner: Address,
    /// Account allowed to sign mint/reveal authorisations.
    pub authoriser: Address,
    /// Receiver of the dev royalty cut.
    pub dev_royalty_receiver: Address,
    /// Block-explorer verification API, where one exists.
    pub verifier_api_url: Option<&'static str>,
}

impl ChainConfig {
    pub fn is_local(&self) -> bool {
        self.name == LOCAL_CHAIN
    }
}

/// Every chain this tool knows how to deploy to.
pub const CHAINS: &[ChainConfig] = &[
    ChainConfig {
        name: LOCAL_CHAIN,
        chain_id: 1337,
        rpc_url: "http://localhost:8545",
        owner: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"), // anvil account 1
        authoriser: address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"), // anvil account 2
        dev_royalty_receiver: address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"), // anvil account 3
        verifier_api_url: None,
    },
    ChainConfig {
        name: "arbitrumSepolia",
        chain_id: 421_614,
        rpc_url: "https://api.zan.top/arb-sepolia",
        owner: address!("d50a0a15f448452710a5ce278d2dc723a368e663"), // pixel8 deployment account
        authoriser: address!("d50a0a15f448452710a5ce278d2dc723a368e663"),
        dev_royalty_receiver: address!("d50a0a15f448452710a5ce278d2dc723a368e663"),
        verifier_api_url: Some("https://sepolia.arbiscan.io/api"),
    },
];

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("chain not configured: {0}")]
    UnknownChain(String),
}

pub fn chain_config(name: &str) -> Result<&'static ChainConfig, ChainError> {
    CHAINS
        .iter()
        .find(|chain| chain.name == name)
        .ok_or_else(|| ChainError::UnknownChain(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chains_resolve() {
        let local = chain_config("local").unwrap();
        assert_eq!(local.chain_id, 1337);
        assert!(local.is_local());
        assert!(local.verifier_api_url.is_none());

        let sepolia = chain_config("arbitrumSepolia").unwrap();
        assert_eq!(sepolia.chain_id, 421_614);
        assert!(!sepolia.is_local());
        assert!(sepolia.verifier_api_url.is_some());
    }

    #[test]
    fn unknown_chain_is_an_error() {
        let err = chain_config("mainnet").unwrap_err();
        assert!(matches!(err, ChainError::UnknownChain(name) if name == "mainnet"));
    }
}
