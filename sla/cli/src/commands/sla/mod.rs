// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
use crate::{CommandLineHandler, GlobalArguments};

use clap::{Args, Subcommand};

use self::analyze::{Analyze, AnalyzeArgs};

mod analyze;

#[derive(Debug, Args)]
#[command(name = "sla", about = "validator SLA commands")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct SlaCommandsArgs {
    #[command(subcommand)]
    command: Commands,
}

impl SlaCommandsArgs {
    pub async fn handle(&self, global: &GlobalArguments) -> anyhow::Result<()> {
        match &self.command {
            Commands::Analyze(args) => Analyze::handle(global, args).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Analyze(AnalyzeArgs),
}
