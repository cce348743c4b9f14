// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;

mod commands;
mod loader;
mod writer;

pub use commands::*;

/// The trait that represents the abstraction of a command line handler. To implement a new command
/// line operation, implement this trait and register it.
///
/// Note that this trait does not support a stateful implementation as we assume CLI commands are all
/// constructed from scratch.
#[async_trait]
pub trait CommandLineHandler {
    /// Abstraction for command line operations arguments.
    type Arguments: std::fmt::Debug + Args;

    /// Handles the request with the provided arguments. Dev should handle the content to print and how
    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()>;
}

/// The global arguments that will be shared by all cli commands.
#[derive(Debug, Args, Clone, Default)]
pub struct GlobalArguments {
    #[arg(
        long,
        help = "The directory report files are written to, defaults to the current directory",
        env = "SLA_CLI_OUTPUT_DIR"
    )]
    output_dir: Option<PathBuf>,
}

impl GlobalArguments {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
