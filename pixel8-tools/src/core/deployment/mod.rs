// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Deterministic contract deployment through the keyless CREATE3 factory.

use alloy::{
    network::Ethereum,
    primitives::{Address, TxHash, B256},
    providers::{PendingTransactionBuilder, Provider, WalletProvider},
    rpc::types::TransactionReceipt,
};

use crate::utils::color::DebugColor;

use self::create3::Create3Factory;

pub mod create3;

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
}

/// Blocks until the transaction is included, requiring a success receipt.
pub async fn wait_for_tx(
    pending: PendingTransactionBuilder<Ethereum>,
) -> Result<TransactionReceipt, DeploymentError> {
    let tx_hash = *pending.tx_hash();
    debug!(@grey, "waiting for tx: {}", tx_hash.debug_lavender());
    let receipt = pending
        .get_receipt()
        .await
        .or(Err(DeploymentError::FailedToComplete))?;
    if !receipt.status() {
        return Err(DeploymentError::Reverted { tx_hash });
    }
    Ok(receipt)
}

/// Deploys `creation_code` at the address fixed by the signing account and
/// `salt`, skipping the transaction entirely if code is already present
/// there. Returns the deterministic address either way.
pub async fn deploy_deterministic<P: Provider + WalletProvider>(
    factory: &Create3Factory::Create3FactoryInstance<&P>,
    salt: B256,
    creation_code: Vec<u8>,
    gas_limit: u64,
    provider: &P,
) -> Result<Address, DeploymentError> {
    let sender = provider.default_signer_address();
    let address = factory.getDeployed(sender, salt).call().await?;

    let code = provider.get_code_at(address).await?;
    if !code.is_empty() {
        info!(@grey, "contract already deployed at {address}");
        return Ok(address);
    }

    info!(@grey, "deploying contract to {address}");
    let pending = factory
        .deploy_call(salt, creation_code.into())
        .gas(gas_limit)
        .from(sender)
        .send()
        .await?;
    wait_for_tx(pending).await?;

    Ok(address)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::b256;

    use super::*;

    #[test]
    fn reverted_error_names_the_tx() {
        let tx_hash = b256!("deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef");
        let err = DeploymentError::Reverted { tx_hash };
        assert!(err.to_string().contains("deadbeef"));
    }
}
