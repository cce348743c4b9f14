// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
//! Extra data inspection util

use async_trait::async_trait;
use clap::Args;

use sla_engine::extract::extract_validators;

use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct DecodeExtraData;

#[async_trait]
impl CommandLineHandler for DecodeExtraData {
    type Arguments = DecodeExtraDataArgs;

    async fn handle(_global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        let validators = extract_validators(&arguments.extra_data)?;

        log::info!("validators detected: {}", validators.len());
        for validator in &validators {
            log::info!("{validator}");
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Decode the validator set from a block extra data blob")]
pub(crate) struct DecodeExtraDataArgs {
    #[arg(help = "The 0x prefixed extra data hex blob")]
    pub extra_data: String,
}
