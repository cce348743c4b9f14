// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
//! This mod contains the different command line implementations.

mod blocks;
mod sla;
mod util;

use crate::commands::blocks::BlocksCommandsArgs;
use crate::commands::sla::SlaCommandsArgs;
use crate::commands::util::UtilCommandsArgs;
use crate::GlobalArguments;
use anyhow::Context;

use clap::{Parser, Subcommand};

/// The collection of all subcommands to be called, see clap's documentation for usage. Internal
/// to the current mode. Register a new command accordingly.
#[derive(Debug, Subcommand)]
enum Commands {
    Sla(SlaCommandsArgs),
    Blocks(BlocksCommandsArgs),
    Util(UtilCommandsArgs),
}

#[derive(Debug, Parser)]
#[command(
    name = "sla-cli",
    about = "Validator SLA and block production reporting tool",
    version = "v0.1.0"
)]
#[command(propagate_version = true, arg_required_else_help = true)]
struct SlaCliCommands {
    #[clap(flatten)]
    global_params: GlobalArguments,
    #[command(subcommand)]
    command: Commands,
}

/// The `cli` method exposed to handle all the cli commands, ideally from main.
pub async fn cli() -> anyhow::Result<()> {
    let args = SlaCliCommands::parse();

    let global = &args.global_params;
    let r = match &args.command {
        Commands::Sla(args) => args.handle(global).await,
        Commands::Blocks(args) => args.handle(global).await,
        Commands::Util(args) => args.handle(global).await,
    };

    r.with_context(|| format!("error processing command {:?}", args.command))
}
