// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
//! Loading of the block ledger CSV.

use std::path::Path;

use anyhow::{bail, Context};
use sla_types::Block;

/// Read the ledger, sort it by block number and warn about gaps.
/// Gaps do not abort the run; the engine tolerates them.
pub(crate) fn load_blocks(path: &Path) -> anyhow::Result<Vec<Block>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot open block ledger at {}", path.display()))?;

    let mut blocks = Vec::new();
    for record in reader.deserialize() {
        let block: Block =
            record.with_context(|| format!("malformed block row in {}", path.display()))?;
        blocks.push(block);
    }
    if blocks.is_empty() {
        bail!("no blocks found in {}", path.display());
    }

    blocks.sort_by_key(|b| b.number);
    log::info!("blocks loaded: {}", blocks.len());

    for pair in blocks.windows(2) {
        if pair[1].number != pair[0].number + 1 {
            log::warn!(
                "ledger discontinuity: block {} -> {}",
                pair[0].number,
                pair[1].number
            );
        }
    }

    Ok(blocks)
}
