// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Signing-account and secret resolution.
//!
//! Secrets are resolved before any network activity so a misconfigured run
//! fails without touching the RPC endpoint.

use alloy::signers::local::PrivateKeySigner;

use crate::core::chain::ChainConfig;

/// Anvil account 1. Publicly known, only ever valid on ephemeral local chains.
pub const LOCAL_DEV_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
pub const VERIFIER_API_KEY_ENV: &str = "VERIFIER_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{PRIVATE_KEY_ENV} env var is required for chain {0}")]
    MissingPrivateKey(String),
    #[error("{VERIFIER_API_KEY_ENV} env var is required for chain {0}")]
    MissingVerifierKey(String),
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(#[from] alloy::signers::local::LocalSignerError),
}

/// Deployment secrets for one chain.
#[derive(Clone, Debug)]
pub struct Secrets {
    pub private_key: String,
    pub verifier_api_key: Option<String>,
}

impl Secrets {
    /// Resolves secrets for `chain` from the process environment.
    pub fn resolve(chain: &ChainConfig) -> Result<Self, AccountError> {
        Self::resolve_from(chain, |name| std::env::var(name).ok())
    }

    /// Resolution over an injected env lookup.
    ///
    /// The local chain uses the fixed development key and never reads the
    /// environment. Every other chain requires a private key, and a verifier
    /// API key whenever the chain has a verification endpoint.
    pub fn resolve_from(
        chain: &ChainConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AccountError> {
        if chain.is_local() {
            return Ok(Self {
                private_key: LOCAL_DEV_PRIVATE_KEY.to_string(),
                verifier_api_key: None,
            });
        }

        let private_key = env(PRIVATE_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AccountError::MissingPrivateKey(chain.name.to_string()))?;

        let verifier_api_key = match chain.verifier_api_url {
            Some(_) => Some(
                env(VERIFIER_API_KEY_ENV)
                    .filter(|key| !key.is_empty())
                    .ok_or_else(|| AccountError::MissingVerifierKey(chain.name.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            private_key,
            verifier_api_key,
        })
    }

    pub fn signer(&self) -> Result<PrivateKeySigner, AccountError> {
        Ok(self.private_key.trim().parse::<PrivateKeySigner>()?)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::core::chain::chain_config;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn local_chain_uses_dev_key_without_env() {
        let chain = chain_config("local").unwrap();
        let secrets = Secrets::resolve_from(chain, no_env).unwrap();
        assert_eq!(secrets.private_key, LOCAL_DEV_PRIVATE_KEY);
        assert!(secrets.verifier_api_key.is_none());
    }

    #[test]
    fn missing_private_key_fails_before_any_rpc() {
        let chain = chain_config("arbitrumSepolia").unwrap();
        let err = Secrets::resolve_from(chain, no_env).unwrap_err();
        assert!(matches!(err, AccountError::MissingPrivateKey(_)));
    }

    #[test]
    fn verifier_key_required_when_chain_has_verifier() {
        let chain = chain_config("arbitrumSepolia").unwrap();
        let err = Secrets::resolve_from(chain, |name| {
            (name == PRIVATE_KEY_ENV).then(|| LOCAL_DEV_PRIVATE_KEY.to_string())
        })
        .unwrap_err();
        assert!(matches!(err, AccountError::MissingVerifierKey(_)));
    }

    #[test]
    fn empty_env_values_count_as_missing() {
        let chain = chain_config("arbitrumSepolia").unwrap();
        let err = Secrets::resolve_from(chain, |_| Some(String::new())).unwrap_err();
        assert!(matches!(err, AccountError::MissingPrivateKey(_)));
    }

    #[test]
    fn dev_key_parses_to_the_anvil_account() {
        let chain = chain_config("local").unwrap();
        let secrets = Secrets::resolve_from(chain, no_env).unwrap();
        let signer = secrets.signer().unwrap();
        assert_eq!(
            signer.address(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }
}
