// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Full deployment sequence for the Pixel8 suite.

use std::path::Path;

use alloy::providers::{Provider, WalletProvider};

use crate::core::{
    account::Secrets,
    artifact::Artifact,
    chain::ChainConfig,
    contracts,
    deployment::{self, create3},
    wiring,
};

use super::verify;

/// Deploys the whole suite to `chain`, wiring local chains and verifying
/// where the chain supports it. Safe to re-run: the factory and every
/// contract are skipped when code already exists at their addresses.
pub async fn deploy<P: Provider + WalletProvider>(
    chain: &ChainConfig,
    secrets: &Secrets,
    artifacts_dir: &Path,
    provider: &P,
) -> eyre::Result<()> {
    let sender = provider.default_signer_address();
    greyln!("deploying to chain {} from {sender}", chain.name);

    let pixel8_artifact = Artifact::load(artifacts_dir, contracts::PIXEL8.name)?;
    let factory_artifact = Artifact::load(artifacts_dir, contracts::FACTORY.name)?;
    let pool_artifact = Artifact::load(artifacts_dir, contracts::MINT_SWAP_POOL.name)?;
    let stats_artifact = Artifact::load(artifacts_dir, contracts::GAME_STATS.name)?;

    let factory = create3::ensure_factory(provider).await?;

    // The pool address is fixed by (sender, salt), so the NFT constructor can
    // reference the pool before the pool exists.
    let pool_addr = factory
        .getDeployed(sender, contracts::MINT_SWAP_POOL.salt())
        .call()
        .await?;

    greyln!("deploying Pixel8...");
    let pixel8_addr = deployment::deploy_deterministic(
        &factory,
        contracts::PIXEL8.salt(),
        pixel8_artifact.creation_code(&contracts::pixel8_constructor_args(chain, pool_addr)),
        contracts::PIXEL8.gas_limit,
        provider,
    )
    .await?;
    greyln!("...done - Pixel8 at {pixel8_addr}");

    greyln!("deploying Factory...");
    let factory_addr = deployment::deploy_deterministic(
        &factory,
        contracts::FACTORY.salt(),
        factory_artifact.creation_code(&contracts::factory_constructor_args(chain)),
        contracts::FACTORY.gas_limit,
        provider,
    )
    .await?;
    greyln!("...done - Factory at {factory_addr}");

    greyln!("deploying MintSwapPool...");
    let pool_addr = deployment::deploy_deterministic(
        &factory,
        contracts::MINT_SWAP_POOL.salt(),
        pool_artifact.creation_code(&contracts::pool_constructor_args(chain, pixel8_addr)),
        contracts::MINT_SWAP_POOL.gas_limit,
        provider,
    )
    .await?;
    greyln!("...done - MintSwapPool at {pool_addr}");

    greyln!("deploying GameStats...");
    let stats_addr = deployment::deploy_deterministic(
        &factory,
        contracts::GAME_STATS.salt(),
        stats_artifact.creation_code(&contracts::game_stats_constructor_args(pixel8_addr)),
        contracts::GAME_STATS.gas_limit,
        provider,
    )
    .await?;
    greyln!("...done - GameStats at {stats_addr}");

    if chain.is_local() {
        greyln!("wiring pool...");
        wiring::create_pool_curve(pool_addr, pixel8_addr, provider).await?;
    }

    if chain.verifier_api_url.is_some() && secrets.verifier_api_key.is_some() {
        greyln!("verifying contracts...");
        // contracts are live at this point, verification failure is not fatal
        if let Err(err) = verify::verify(chain, secrets, sender) {
            warn!(@yellow, "verification failed: {err}");
        }
    }

    Ok(())
}
