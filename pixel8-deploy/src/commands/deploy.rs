// Copyright 2026, Pixel8 Labs
// For licensing, see https://github.com/pixel8labs/pixel8-deploy/blob/main/LICENSE.md

use pixel8_tools::{core::account::Secrets, ops};

use crate::{
    common_args::{ArtifactArgs, ChainArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    chain: ChainArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let chain = args.chain.config()?;
    let secrets = Secrets::resolve(chain)?;
    let provider = crate::common_args::build_provider_with_wallet(chain, &secrets).await?;
    ops::deploy(chain, &secrets, &args.artifacts.artifacts, &provider).await?;
    Ok(())
}
