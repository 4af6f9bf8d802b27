// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! The keyless CREATE3 factory.
//!
//! The factory is a singleton with the same address on every chain. It is
//! deployed from a fixed one-shot account whose deployment transaction was
//! pre-signed once (the SKYBIT keyless flow, Solady CREATE3 underneath), so
//! same bytecode + same deployer + same nonce gives the same factory address
//! everywhere. The constants below must be reused byte-for-byte; re-signing
//! the transaction would move the factory.

use alloy::{
    network::TransactionBuilder,
    primitives::{
        address, b256, keccak256,
        utils::format_ether,
        Address, B256, U256,
    },
    providers::{Provider, WalletProvider},
    rpc::types::TransactionRequest,
    sol,
};
use hex_literal::hex;

use super::{wait_for_tx, DeploymentError};

sol! {
    #[sol(rpc)]
    interface Create3Factory {
        function deploy(bytes32 salt, bytes memory creationCode) external payable returns (address deployed);
        function getDeployed(address deployer, bytes32 salt) external view returns (address deployed);
    }
}

/// Address the factory lands on, on every chain.
pub const FACTORY_ADDRESS: Address = address!("24fCFA23F3b22c15070480766E3fE2fad3E813EA");

/// The one-shot account the pre-signed deployment transaction is signed by.
pub const DEPLOYER_ADDRESS: Address = address!("c7c0A9dc9c997438eE834bb155dF2AF7fDAe6073");

/// Gas limit baked into the pre-signed transaction.
pub const FACTORY_GAS_LIMIT: u64 = 360_000;

/// Gas price baked into the pre-signed transaction (100 gwei).
pub const FACTORY_GAS_PRICE: u128 = 100_000_000_000;

/// Creation code of the factory contract.
pub const FACTORY_BYTECODE: &[u8] = &hex!(
    "608060405234801561000f575f80fd5b506103868061001d5f395ff3fe608060405260043610610028575f3560e01c806350f1c4641461002c578063cdcb760a14610074575b5f80fd5b348015610037575f80fd5b5061004b61004636600461020e565b610087565b60405173ffffffffffffffffffffffffffffffffffffffff909116815260200160405180910390f35b61004b61008236600461027d565b6100ea565b6040517fffffffffffffffffffffffffffffffffffffffff000000000000000000000000606084901b166020820152603481018290525f906054016040516020818303038152906040528051906020012091506100e382610147565b9392505050565b6040517fffffffffffffffffffffffffffffffffffffffff0000000000000000000000003360601b166020820152603481018390525f906054016040516020818303038152906040528051906020012092506100e383833461019c565b5f604051305f5260ff600b53826020527f21c35dbe1b344a2488cf3321d6ce542f8e9f305544ff09e4993a62319a497c1f6040526055600b20601452806040525061d6945f52600160345350506017601e2090565b5f6f67363d3d37363d34f03d5260086018f35f52836010805ff5806101c85763301164255f526004601cfd5b8060145261d6945f5260016034536017601e2091505f8085516020870186855af16101fa576319b991a85f526004601cfd5b50803b6100e3576319b991a85f526004601cfd5b5f806040838503121561021f575f80fd5b823573ffffffffffffffffffffffffffffffffffffffff81168114610242575f80fd5b946020939093013593505050565b7f4e487b71000000000000000000000000000000000000000000000000000000005f52604160045260245ffd5b5f806040838503121561028e575f80fd5b82359150602083013567ffffffffffffffff808211156102ac575f80fd5b818501915085601f8301126102bf575f80fd5b8135818111156102d1576102d1610250565b604051601f82017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe0908116603f0116810190838211818310171561031757610317610250565b8160405282815288602084870101111561032f575f80fd5b826020860160208301375f602084830101528095505050505050925092905056fea2646970667358221220992118230e4c9ffed4926da567e9fee8d8a102c65d41aa5ee3579d36ca97124164736f6c63430008150033"
);

/// The pre-signed deployment transaction ([`DEPLOYER_ADDRESS`], nonce 0).
/// Broadcast as-is; treat as an opaque capability token.
pub const FACTORY_SIGNED_RAW_TX: &[u8] = &hex!(
    "f903f68085174876e800830557308080b903a3608060405234801561000f575f80fd5b506103868061001d5f395ff3fe608060405260043610610028575f3560e01c806350f1c4641461002c578063cdcb760a14610074575b5f80fd5b348015610037575f80fd5b5061004b61004636600461020e565b610087565b60405173ffffffffffffffffffffffffffffffffffffffff909116815260200160405180910390f35b61004b61008236600461027d565b6100ea565b6040517fffffffffffffffffffffffffffffffffffffffff000000000000000000000000606084901b166020820152603481018290525f906054016040516020818303038152906040528051906020012091506100e382610147565b9392505050565b6040517fffffffffffffffffffffffffffffffffffffffff0000000000000000000000003360601b166020820152603481018390525f906054016040516020818303038152906040528051906020012092506100e383833461019c565b5f604051305f5260ff600b53826020527f21c35dbe1b344a2488cf3321d6ce542f8e9f305544ff09e4993a62319a497c1f6040526055600b20601452806040525061d6945f52600160345350506017601e2090565b5f6f67363d3d37363d34f03d5260086018f35f52836010805ff5806101c85763301164255f526004601cfd5b8060145261d6945f5260016034536017601e2091505f8085516020870186855af16101fa576319b991a85f526004601cfd5b50803b6100e3576319b991a85f526004601cfd5b5f806040838503121561021f575f80fd5b823573ffffffffffffffffffffffffffffffffffffffff81168114610242575f80fd5b946020939093013593505050565b7f4e487b71000000000000000000000000000000000000000000000000000000005f52604160045260245ffd5b5f806040838503121561028e575f80fd5b82359150602083013567ffffffffffffffff808211156102ac575f80fd5b818501915085601f8301126102bf575f80fd5b8135818111156102d1576102d1610250565b604051601f82017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe0908116603f0116810190838211818310171561031757610317610250565b8160405282815288602084870101111561032f575f80fd5b826020860160208301375f602084830101528095505050505050925092905056fea2646970667358221220992118230e4c9ffed4926da567e9fee8d8a102c65d41aa5ee3579d36ca97124164736f6c634300081500331ba03333333333333333333333333333333333333333333333333333333333333333a03333333333333333333333333333333333333333333333333333333333333333"
);

/// Initcode of the CREATE2-deployed proxy the factory routes through.
pub const PROXY_INITCODE: &[u8] = &hex!("67363d3d37363d34f03d5260086018f3");

/// keccak256 of [`PROXY_INITCODE`], as embedded in the factory bytecode.
pub const PROXY_INITCODE_HASH: B256 =
    b256!("21c35dbe1b344a2488cf3321d6ce542f8e9f305544ff09e4993a62319a497c1f");

/// Native balance the deployer account needs for the raw tx to land.
pub fn required_deployer_balance() -> U256 {
    U256::from(FACTORY_GAS_LIMIT) * U256::from(FACTORY_GAS_PRICE)
}

/// Ensures the factory exists on this chain, deploying it keylessly if
/// absent. At most one funding transfer and one broadcast ever happen per
/// chain; re-runs see the code check and return immediately.
pub async fn ensure_factory<P: Provider + WalletProvider>(
    provider: &P,
) -> Result<Create3Factory::Create3FactoryInstance<&P>, DeploymentError> {
    let code = provider.get_code_at(FACTORY_ADDRESS).await?;
    if code.is_empty() {
        let balance = provider.get_balance(DEPLOYER_ADDRESS).await?;
        let required = required_deployer_balance();
        if balance < required {
            let shortfall = required - balance;
            info!(
                @grey,
                "funding factory deployer {DEPLOYER_ADDRESS} with {} ETH",
                format_ether(shortfall)
            );
            let tx = TransactionRequest::default()
                .with_from(provider.default_signer_address())
                .with_to(DEPLOYER_ADDRESS)
                .with_value(shortfall);
            wait_for_tx(provider.send_transaction(tx).await?).await?;
        }

        info!(@grey, "deploying CREATE3 factory to {FACTORY_ADDRESS} from pre-signed tx");
        wait_for_tx(provider.send_raw_transaction(FACTORY_SIGNED_RAW_TX).await?).await?;
    } else {
        debug!(@grey, "CREATE3 factory already deployed");
    }

    Ok(Create3Factory::new(FACTORY_ADDRESS, provider))
}

/// The address `deploy` lands a contract on for `(deployer, salt)`.
///
/// Offline mirror of the factory's `getDeployed` view: the factory
/// namespaces the salt by calling account, CREATE2-deploys the fixed proxy,
/// and the proxy CREATE-deploys the contract at nonce 1. The creation code
/// never enters the derivation, which is what lets dependents reference an
/// address before anything is deployed there.
pub fn deterministic_address(deployer: Address, salt: B256) -> Address {
    let mut packed = Vec::with_capacity(52);
    packed.extend_from_slice(deployer.as_slice());
    packed.extend_from_slice(salt.as_slice());
    let salt = keccak256(&packed);

    let mut create2 = Vec::with_capacity(85);
    create2.push(0xff);
    create2.extend_from_slice(FACTORY_ADDRESS.as_slice());
    create2.extend_from_slice(salt.as_slice());
    create2.extend_from_slice(PROXY_INITCODE_HASH.as_slice());
    let proxy = Address::from_word(keccak256(&create2));

    // rlp([proxy, 1])
    let mut rlp = Vec::with_capacity(23);
    rlp.push(0xd6);
    rlp.push(0x94);
    rlp.extend_from_slice(proxy.as_slice());
    rlp.push(0x01);
    Address::from_word(keccak256(&rlp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_initcode_hashes_to_the_embedded_constant() {
        assert_eq!(keccak256(PROXY_INITCODE), PROXY_INITCODE_HASH);
    }

    #[test]
    fn signed_raw_tx_carries_the_factory_bytecode() {
        assert!(FACTORY_SIGNED_RAW_TX
            .windows(FACTORY_BYTECODE.len())
            .any(|window| window == FACTORY_BYTECODE));
    }

    #[test]
    fn required_balance_is_gas_limit_times_gas_price() {
        assert_eq!(
            required_deployer_balance(),
            U256::from(36_000_000_000_000_000u128) // 0.036 ETH
        );
    }

    #[test]
    fn derivation_follows_the_documented_scheme() {
        let deployer = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let salt = keccak256(b"pixel8.contract.pixel8");

        // independent re-derivation of each step
        let inner = keccak256([deployer.as_slice(), salt.as_slice()].concat());
        let proxy = Address::from_word(keccak256(
            [
                &[0xff][..],
                FACTORY_ADDRESS.as_slice(),
                inner.as_slice(),
                PROXY_INITCODE_HASH.as_slice(),
            ]
            .concat(),
        ));
        let expected = Address::from_word(keccak256(
            [&[0xd6, 0x94][..], proxy.as_slice(), &[0x01]].concat(),
        ));

        assert_eq!(deterministic_address(deployer, salt), expected);
    }

    #[test]
    fn derivation_is_stable() {
        let deployer = address!("d50a0a15f448452710a5ce278d2dc723a368e663");
        let salt = keccak256(b"pixel8.contract.pool");
        assert_eq!(
            deterministic_address(deployer, salt),
            deterministic_address(deployer, salt)
        );
    }

    #[test]
    fn derivation_varies_with_salt_and_deployer() {
        let a = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let b = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
        let salt_a = keccak256(b"pixel8.contract.pixel8");
        let salt_b = keccak256(b"pixel8.contract.pool");

        assert_ne!(
            deterministic_address(a, salt_a),
            deterministic_address(a, salt_b)
        );
        assert_ne!(
            deterministic_address(a, salt_a),
            deterministic_address(b, salt_a)
        );
    }
}
