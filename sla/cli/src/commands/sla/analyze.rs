// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
//! Validator downtime reconstruction over a block ledger CSV.

use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;

use sla_engine::analysis::{analyze, PolicyConfig};
use sla_engine::report::build_report;

use crate::{loader, writer, CommandLineHandler, GlobalArguments};

pub(crate) struct Analyze;

#[async_trait]
impl CommandLineHandler for Analyze {
    type Arguments = AnalyzeArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("analyze validator downtime with args: {:?}", arguments);

        let blocks = loader::load_blocks(&arguments.blocks_csv)?;

        let config = PolicyConfig {
            derive_per_cycle_validator_set: arguments.per_cycle_validators,
            enable_quorum_guard: arguments.quorum_guard,
        };
        let analysis = analyze(&blocks, config)?;

        log::info!(
            "validators detected ({}): {:?}",
            analysis.validators.len(),
            analysis.validators
        );
        log::info!(
            "cycles processed: {}, downtime events: {}",
            analysis.cycles_processed,
            analysis.events.len()
        );
        if analysis.stalled_cycles > 0 {
            log::info!("network-wide stalls: {} cycles", analysis.stalled_cycles);
        }
        if analysis.skipped_cycles > 0 {
            log::info!(
                "cycles without a decodable validator set: {}",
                analysis.skipped_cycles
            );
        }

        let report = build_report(&analysis);
        let written = writer::write_report(&report, &global.output_dir(), &arguments.blocks_csv)?;
        for path in written {
            log::info!("report written: {}", path.display());
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Reconstruct validator downtime from a block ledger CSV")]
pub(crate) struct AnalyzeArgs {
    #[arg(
        help = "Path to the block ledger CSV",
        default_value = "./blocks.csv"
    )]
    pub blocks_csv: PathBuf,
    #[arg(
        long,
        help = "Re-derive the validator set from the first block of every cycle"
    )]
    pub per_cycle_validators: bool,
    #[arg(
        long,
        help = "Classify cycles where the BFT quorum was lost as network-wide stalls"
    )]
    pub quorum_guard: bool,
}
