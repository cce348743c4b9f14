// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
use crate::{CommandLineHandler, GlobalArguments};

use clap::{Args, Subcommand};

use self::stats::{Stats, StatsArgs};

mod stats;

#[derive(Debug, Args)]
#[command(name = "blocks", about = "block production commands")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct BlocksCommandsArgs {
    #[command(subcommand)]
    command: Commands,
}

impl BlocksCommandsArgs {
    pub async fn handle(&self, global: &GlobalArguments) -> anyhow::Result<()> {
        match &self.command {
            Commands::Stats(args) => Stats::handle(global, args).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Stats(StatsArgs),
}
