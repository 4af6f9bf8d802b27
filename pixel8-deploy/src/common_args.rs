// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

use std::path::PathBuf;

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::Signer,
};
use pixel8_tools::core::{
    account::Secrets,
    chain::{self, ChainConfig, ChainError},
};

use crate::constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_CHAIN};

#[derive(Debug, clap::Args)]
pub struct ChainArgs {
    /// Target chain, by registry name.
    #[arg(short, long, default_value = DEFAULT_CHAIN)]
    chain: String,
}

impl ChainArgs {
    pub fn config(&self) -> Result<&'static ChainConfig, ChainError> {
        chain::chain_config(&self.chain)
    }
}

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding compiled Forge artifacts.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
}

pub async fn build_provider_with_wallet(
    chain: &ChainConfig,
    secrets: &Secrets,
) -> eyre::Result<impl Provider + WalletProvider> {
    let signer = secrets.signer()?.with_chain_id(Some(chain.chain_id));
    let wallet = EthereumWallet::new(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(chain.rpc_url)
        .await?;
    Ok(provider)
}
