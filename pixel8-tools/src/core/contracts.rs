// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! The Pixel8 contract suite.
//!
//! Constructor configuration and deployment identity (salt, source locator,
//! gas budget) for each of the four contracts. Salts are derived from fixed
//! labels and must never change once any chain holds a deployment, or the
//! deterministic addresses move.

use alloy::{
    primitives::{keccak256, utils::parse_ether, Address, B256, U256},
    sol,
    sol_types::SolValue,
};

use crate::core::chain::ChainConfig;

sol! {
    /// Royalty destination and cut, in basis points.
    struct RoyaltyCut {
        address receiver;
        uint256 feeBips;
    }

    /// Pixel8 constructor configuration.
    struct Pixel8Config {
        address owner;
        address authoriser;
        RoyaltyCut devRoyalty;
        uint256 prizePoolFeeBips;
        string defaultImage;
        uint256 gameOverRevealThreshold;
        uint256 forceSwapCost;
        uint256 forceSwapCooldownPeriod;
        uint256 externalTradeThreshold;
        address pool;
    }

    /// Linear mint price curve for the pool.
    struct PriceCurve {
        uint256 mintStartId;
        uint256 mintEndId;
        uint256 startPriceWei;
        uint256 delta;
    }

    struct PoolSettings {
        address nft;
        PriceCurve curve;
    }

    #[sol(rpc)]
    interface MintSwapPool {
        function create(PoolSettings memory settings) external;
    }
}

/// Deployment identity of one contract in the suite.
#[derive(Debug)]
pub struct ContractSpec {
    pub name: &'static str,
    /// `path:Name` locator understood by the source verifier.
    pub source: &'static str,
    salt_label: &'static str,
    pub gas_limit: u64,
}

impl ContractSpec {
    pub fn salt(&self) -> B256 {
        keccak256(self.salt_label.as_bytes())
    }
}

pub const PIXEL8: ContractSpec = ContractSpec {
    name: "Pixel8",
    source: "src/Pixel8.sol:Pixel8",
    salt_label: "pixel8.contract.pixel8",
    gas_limit: 10_000_000,
};

pub const FACTORY: ContractSpec = ContractSpec {
    name: "Factory",
    source: "src/Factory.sol:Factory",
    salt_label: "pixel8.contract.factory",
    gas_limit: 4_000_000,
};

pub const MINT_SWAP_POOL: ContractSpec = ContractSpec {
    name: "MintSwapPool",
    source: "src/MintSwapPool.sol:MintSwapPool",
    salt_label: "pixel8.contract.pool",
    gas_limit: 6_000_000,
};

pub const GAME_STATS: ContractSpec = ContractSpec {
    name: "GameStats",
    source: "src/GameStats.sol:GameStats",
    salt_label: "pixel8.contract.stats",
    gas_limit: 3_000_000,
};

/// The whole suite, in deployment order.
pub const CONTRACTS: &[&ContractSpec] = &[&PIXEL8, &FACTORY, &MINT_SWAP_POOL, &GAME_STATS];

/// Placeholder tile image shown before reveal (inline SVG data URI).
pub const DEFAULT_PIXEL8_IMG: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIGZpbGw9Im5vbmUiIHZpZXdCb3g9IjAgMCA1MTIgNTEyIj48cGF0aCBmaWxsPSIjRDhEOEQ4IiBmaWxsLW9wYWNpdHk9Ii41IiBkPSJNMCAwaDUxMnY1MTJIMHoiLz48ZyBjbGlwLXBhdGg9InVybCgjYSkiPjxwYXRoIGZpbGw9IiMzMTMwMzAiIGQ9Ik0xOTcuNiAzNTJoMTE1LjhjNC44IDAgOC43LTMuOSA4LjctOC43VjI0NWMwLTQuOC00LTguNy04LjctOC43aC04Ljd2LTI2YTQ5LjMgNDkuMyAwIDAgMC05OC40IDB2MjZoLTguN2E4LjcgOC43IDAgMCAwLTguNyA4Ljd2OTguNGMwIDQuOCA0IDguNyA4LjcgOC43Wm02Ni42LTU1djExLjZhOC43IDguNyAwIDEgMS0xNy40IDBWMjk3YTE0LjUgMTQuNSAwIDEgMSAxNy40IDBabS00MC41LTg2LjhhMzEuOSAzMS45IDAgMCAxIDYzLjYgMHYyNmgtNjMuNnYtMjZaIi8+PC9nPjxkZWZzPjxjbGlwUGF0aCBpZD0iYSI+PHBhdGggZmlsbD0iI2ZmZiIgZD0iTTE2MCAxNjFoMTkxdjE5MUgxNjB6Ii8+PC9jbGlwUGF0aD48L2RlZnM+PC9zdmc+";

/// Dev royalty: 1%.
pub const DEV_ROYALTY_FEE_BIPS: u64 = 100;
/// Prize pool cut: 6.5%.
pub const PRIZE_POOL_FEE_BIPS: u64 = 650;
/// Game ends when all 1764 tiles are revealed.
pub const GAME_OVER_REVEAL_THRESHOLD: u64 = 1764;
/// External trading unlocks at 70% of the tiles.
pub const EXTERNAL_TRADE_THRESHOLD: u64 = 1234;
/// Force-swap cooldown: one hour, in milliseconds.
pub const FORCE_SWAP_COOLDOWN_MS: u64 = 3_600_000;

/// Pixel8 constructor configuration for `chain`, pointing at `pool` (which
/// may be a predicted, not-yet-deployed address).
pub fn pixel8_config(chain: &ChainConfig, pool: Address) -> Pixel8Config {
    Pixel8Config {
        owner: chain.owner,
        authoriser: chain.authoriser,
        devRoyalty: RoyaltyCut {
            receiver: chain.dev_royalty_receiver,
            feeBips: U256::from(DEV_ROYALTY_FEE_BIPS),
        },
        prizePoolFeeBips: U256::from(PRIZE_POOL_FEE_BIPS),
        defaultImage: DEFAULT_PIXEL8_IMG.to_string(),
        gameOverRevealThreshold: U256::from(GAME_OVER_REVEAL_THRESHOLD),
        forceSwapCost: parse_ether("0.1").unwrap(),
        forceSwapCooldownPeriod: U256::from(FORCE_SWAP_COOLDOWN_MS),
        externalTradeThreshold: U256::from(EXTERNAL_TRADE_THRESHOLD),
        pool,
    }
}

pub fn pixel8_constructor_args(chain: &ChainConfig, pool: Address) -> Vec<u8> {
    pixel8_config(chain, pool).abi_encode()
}

pub fn factory_constructor_args(chain: &ChainConfig) -> Vec<u8> {
    chain.authoriser.abi_encode()
}

pub fn pool_constructor_args(chain: &ChainConfig, nft: Address) -> Vec<u8> {
    (chain.owner, nft).abi_encode_params()
}

pub fn game_stats_constructor_args(nft: Address) -> Vec<u8> {
    nft.abi_encode()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::core::chain::chain_config;

    #[test]
    fn salts_are_pairwise_distinct() {
        for (i, a) in CONTRACTS.iter().enumerate() {
            for b in &CONTRACTS[i + 1..] {
                assert_ne!(a.salt(), b.salt(), "{} vs {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn salts_derive_from_their_labels() {
        assert_eq!(PIXEL8.salt(), keccak256(b"pixel8.contract.pixel8"));
        assert_eq!(MINT_SWAP_POOL.salt(), keccak256(b"pixel8.contract.pool"));
    }

    #[test]
    fn pixel8_args_embed_the_pool_address() {
        let chain = chain_config("local").unwrap();
        let pool = address!("1111111111111111111111111111111111111111");
        let args = pixel8_constructor_args(chain, pool);
        assert!(!args.is_empty());
        assert!(args
            .windows(32)
            .any(|word| word[..12] == [0; 12] && word[12..] == *pool.as_slice()));
    }

    #[test]
    fn constructor_encodings_are_deterministic() {
        let chain = chain_config("local").unwrap();
        let pool = address!("2222222222222222222222222222222222222222");
        assert_eq!(
            pixel8_constructor_args(chain, pool),
            pixel8_constructor_args(chain, pool)
        );
        assert_eq!(
            pool_constructor_args(chain, pool),
            pool_constructor_args(chain, pool)
        );
    }

    #[test]
    fn simple_constructors_encode_one_word_per_arg() {
        let chain = chain_config("local").unwrap();
        assert_eq!(factory_constructor_args(chain).len(), 32);
        assert_eq!(
            pool_constructor_args(chain, Address::ZERO).len(),
            64
        );
        assert_eq!(game_stats_constructor_args(Address::ZERO).len(), 32);
    }

    #[test]
    fn force_swap_cost_is_a_tenth_of_an_ether() {
        let chain = chain_config("local").unwrap();
        let config = pixel8_config(chain, Address::ZERO);
        assert_eq!(
            config.forceSwapCost,
            U256::from(100_000_000_000_000_000u128)
        );
        assert_eq!(config.devRoyalty.feeBips, U256::from(100));
        assert_eq!(config.prizePoolFeeBips, U256::from(650));
    }
}
