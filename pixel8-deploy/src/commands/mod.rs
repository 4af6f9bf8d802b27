// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

use crate::error::CliResult;

mod addresses;
mod codegen;
mod deploy;
mod verify;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the deterministic address of each contract
    #[clap(visible_alias = "a")]
    Addresses(addresses::Args),
    /// Generate contract type bindings from compiled artifacts
    Codegen(codegen::Args),
    /// Deploy the Pixel8 contract suite
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Verify deployed contract sources on the chain's block explorer
    #[clap(visible_alias = "v")]
    Verify(verify::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Addresses(args) => addresses::exec(args),
        Command::Codegen(args) => codegen::exec(args),
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Verify(args) => verify::exec(args),
    }
}
