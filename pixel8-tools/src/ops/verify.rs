// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Source verification for an already deployed suite.

use alloy::primitives::Address;
use eyre::{bail, eyre};

use crate::core::{
    account::Secrets,
    chain::ChainConfig,
    contracts,
    deployment::create3,
    verification::{self, VerifyTarget},
};

/// Verification targets for a suite deployed by `sender`. Addresses are
/// re-derived from the salts, so no chain access is needed.
pub(crate) fn targets(chain: &ChainConfig, sender: Address) -> Vec<VerifyTarget> {
    let pixel8_addr = create3::deterministic_address(sender, contracts::PIXEL8.salt());
    let factory_addr = create3::deterministic_address(sender, contracts::FACTORY.salt());
    let pool_addr = create3::deterministic_address(sender, contracts::MINT_SWAP_POOL.salt());
    let stats_addr = create3::deterministic_address(sender, contracts::GAME_STATS.salt());

    vec![
        VerifyTarget {
            name: contracts::PIXEL8.name,
            source: contracts::PIXEL8.source,
            address: pixel8_addr,
            constructor_args: contracts::pixel8_constructor_args(chain, pool_addr),
        },
        VerifyTarget {
            name: contracts::FACTORY.name,
            source: contracts::FACTORY.source,
            address: factory_addr,
            constructor_args: contracts::factory_constructor_args(chain),
        },
        VerifyTarget {
            name: contracts::MINT_SWAP_POOL.name,
            source: contracts::MINT_SWAP_POOL.source,
            address: pool_addr,
            constructor_args: contracts::pool_constructor_args(chain, pixel8_addr),
        },
        VerifyTarget {
            name: contracts::GAME_STATS.name,
            source: contracts::GAME_STATS.source,
            address: stats_addr,
            constructor_args: contracts::game_stats_constructor_args(pixel8_addr),
        },
    ]
}

/// Verifies every contract of the suite deployed by `sender` on `chain`.
pub fn verify(chain: &ChainConfig, secrets: &Secrets, sender: Address) -> eyre::Result<()> {
    let api_key = secrets
        .verifier_api_key
        .as_deref()
        .ok_or_else(|| eyre!("no verifier API key for chain {}", chain.name))?;

    let mut failures = 0;
    for target in targets(chain, sender) {
        if let Err(err) = verification::verify_contract(chain, api_key, &target) {
            warn!(@yellow, "verification of {} failed: {err}", target.name);
            failures += 1;
        }
    }
    if failures > 0 {
        bail!("{failures} contract(s) failed verification");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::core::chain::chain_config;

    #[test]
    fn targets_cover_the_whole_suite_with_distinct_addresses() {
        let chain = chain_config("arbitrumSepolia").unwrap();
        let sender = address!("d50a0a15f448452710a5ce278d2dc723a368e663");
        let targets = targets(chain, sender);

        assert_eq!(targets.len(), contracts::CONTRACTS.len());
        for (i, a) in targets.iter().enumerate() {
            for b in &targets[i + 1..] {
                assert_ne!(a.address, b.address, "{} vs {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn pixel8_target_references_the_pool_target() {
        let chain = chain_config("arbitrumSepolia").unwrap();
        let sender = address!("d50a0a15f448452710a5ce278d2dc723a368e663");
        let targets = targets(chain, sender);

        let pool = targets.iter().find(|t| t.name == "MintSwapPool").unwrap();
        let pixel8 = targets.iter().find(|t| t.name == "Pixel8").unwrap();
        assert!(pixel8
            .constructor_args
            .windows(32)
            .any(|word| word[..12] == [0; 12] && word[12..] == *pool.address.as_slice()));
    }
}
