// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

use pixel8_tools::{core::account::Secrets, ops};

use crate::{common_args::ChainArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    chain: ChainArgs,
}

pub fn exec(args: Args) -> CliResult {
    let chain = args.chain.config()?;
    let secrets = Secrets::resolve(chain)?;
    let sender = secrets.signer()?.address();
    ops::addresses(sender);
    Ok(())
}
