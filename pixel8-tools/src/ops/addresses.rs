// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

//! Offline deterministic-address report.

use alloy::primitives::Address;

use crate::core::{contracts, deployment::create3};

/// Prints the deterministic address of each contract for `sender`, without
/// touching any chain.
pub fn addresses(sender: Address) {
    greyln!("deterministic addresses for deployer {sender}:");
    for contract in contracts::CONTRACTS {
        let address = create3::deterministic_address(sender, contract.salt());
        println!("  {:<14} {address}", contract.name);
    }
}
