// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
//! Block production interval statistics.

use anyhow::anyhow;
use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;

use sla_types::Block;

use crate::{loader, CommandLineHandler, GlobalArguments};

pub(crate) struct Stats;

#[async_trait]
impl CommandLineHandler for Stats {
    type Arguments = StatsArgs;

    async fn handle(_global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("block production stats with args: {:?}", arguments);

        let blocks = loader::load_blocks(&arguments.blocks_csv)?;
        let stats = production_stats(&blocks)
            .ok_or_else(|| anyhow!("at least two blocks are needed to compute intervals"))?;

        log::info!("blocks produced: {}", blocks.len());
        log::info!("min interval: {}s", stats.min);
        log::info!("mean interval: {:.3}s", stats.mean);
        log::info!("max interval: {}s", stats.max);
        log::info!("median: {}s", stats.median);
        log::info!("standard deviation: {:.3}s", stats.std_dev);
        log::info!("99th percentile: {}s", stats.p99);

        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Production interval statistics over a block ledger CSV")]
pub(crate) struct StatsArgs {
    #[arg(
        help = "Path to the block ledger CSV",
        default_value = "./blocks.csv"
    )]
    pub blocks_csv: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProductionStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub p99: f64,
}

/// Distribution of the time between consecutive blocks of the sorted
/// ledger. None when there are fewer than two blocks.
pub(crate) fn production_stats(blocks: &[Block]) -> Option<ProductionStats> {
    if blocks.len() < 2 {
        return None;
    }

    let mut intervals: Vec<f64> = blocks
        .windows(2)
        .map(|pair| pair[1].timestamp as f64 - pair[0].timestamp as f64)
        .collect();
    intervals.sort_by(|a, b| a.total_cmp(b));

    let n = intervals.len() as f64;
    let mean = intervals.iter().sum::<f64>() / n;
    let variance = intervals.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    Some(ProductionStats {
        min: intervals[0],
        max: intervals[intervals.len() - 1],
        mean,
        median: quantile(&intervals, 0.5),
        std_dev: variance.sqrt(),
        p99: quantile(&intervals, 0.99),
    })
}

/// Linear-interpolated quantile of an already sorted sample.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let fraction = position - lower as f64;
    if lower + 1 < sorted.len() {
        sorted[lower] + (sorted[lower + 1] - sorted[lower]) * fraction
    } else {
        sorted[lower]
    }
}
