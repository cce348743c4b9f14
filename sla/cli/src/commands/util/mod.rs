// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
use crate::{CommandLineHandler, GlobalArguments};

use clap::{Args, Subcommand};

use self::decode_extra_data::{DecodeExtraData, DecodeExtraDataArgs};

mod decode_extra_data;

#[derive(Debug, Args)]
#[command(name = "util", about = "util commands")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct UtilCommandsArgs {
    #[command(subcommand)]
    command: Commands,
}

impl UtilCommandsArgs {
    pub async fn handle(&self, global: &GlobalArguments) -> anyhow::Result<()> {
        match &self.command {
            Commands::DecodeExtraData(args) => DecodeExtraData::handle(global, args).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    DecodeExtraData(DecodeExtraDataArgs),
}
