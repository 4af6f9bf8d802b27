// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Post-deployment wiring for local development chains.

use alloy::{
    primitives::{utils::parse_ether, Address, U256},
    providers::{Provider, WalletProvider},
};

use crate::core::{
    contracts::{MintSwapPool, PoolSettings, PriceCurve, GAME_OVER_REVEAL_THRESHOLD},
    deployment::{wait_for_tx, DeploymentError},
};

/// Seeds the pool with its mint price curve so a local game is playable
/// immediately after deployment. Live chains configure the curve through
/// governance instead.
pub async fn create_pool_curve<P: Provider + WalletProvider>(
    pool: Address,
    nft: Address,
    provider: &P,
) -> Result<(), DeploymentError> {
    let pool = MintSwapPool::new(pool, provider);
    let settings = PoolSettings {
        nft,
        curve: PriceCurve {
            mintStartId: U256::from(1),
            mintEndId: U256::from(GAME_OVER_REVEAL_THRESHOLD),
            startPriceWei: parse_ether("0.01").unwrap(),
            delta: parse_ether("0.0001").unwrap(),
        },
    };

    info!(@grey, "creating pool curve for nft {nft}");
    let pending = pool
        .create(settings)
        .from(provider.default_signer_address())
        .send()
        .await?;
    wait_for_tx(pending).await?;
    Ok(())
}
