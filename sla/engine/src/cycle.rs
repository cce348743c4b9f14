// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
//! Positional partitioning of the ledger into rotation cycles.

use std::collections::BTreeSet;

use sla_types::{Block, ValidatorAddress};

/// A contiguous window of exactly `N` blocks, one full round-robin
/// rotation. Boundaries are block-aligned, never timestamp-aligned.
#[derive(Debug, Clone, Copy)]
pub struct Cycle<'a> {
    pub index: usize,
    blocks: &'a [Block],
}

impl<'a> Cycle<'a> {
    pub fn blocks(&self) -> &'a [Block] {
        self.blocks
    }

    /// The block carrying the cycle-local validator set, when there is one.
    pub fn first(&self) -> &'a Block {
        &self.blocks[0]
    }

    pub fn last(&self) -> &'a Block {
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn start_block(&self) -> u64 {
        self.first().number
    }

    pub fn end_block(&self) -> u64 {
        self.last().number
    }

    pub fn start_timestamp(&self) -> u64 {
        self.first().timestamp
    }

    pub fn end_timestamp(&self) -> u64 {
        self.last().timestamp
    }

    /// Wall clock span of the cycle in seconds. Zero when all blocks
    /// share a timestamp.
    pub fn duration_secs(&self) -> u64 {
        self.end_timestamp().saturating_sub(self.start_timestamp())
    }

    /// The distinct addresses that sealed at least one block in this cycle.
    pub fn miners(&self) -> BTreeSet<ValidatorAddress> {
        self.blocks.iter().map(|b| b.miner).collect()
    }
}

/// Partition the sorted ledger strictly by position into cycles of
/// `cycle_len` blocks. The trailing partial cycle is dropped.
///
/// `cycle_len` must be nonzero; callers derive it from a non-empty
/// validator set.
pub fn cycles(blocks: &[Block], cycle_len: usize) -> impl Iterator<Item = Cycle<'_>> {
    blocks
        .chunks_exact(cycle_len)
        .enumerate()
        .map(|(index, blocks)| Cycle { index, blocks })
}

#[cfg(test)]
mod tests {
    use sla_types::{Block, ValidatorAddress};

    use super::cycles;

    fn block(number: u64, timestamp: u64, miner: u8) -> Block {
        Block::new(number, timestamp, ValidatorAddress([miner; 20]))
    }

    #[test]
    fn partitions_by_position_and_drops_the_tail() {
        let blocks: Vec<_> = (0..11).map(|i| block(i, 100 + i * 10, 1)).collect();
        let cycles: Vec<_> = cycles(&blocks, 3).collect();

        // floor(11 / 3) cycles, the last two blocks are never part of one.
        assert_eq!(cycles.len(), 3);
        assert_eq!(cycles[0].start_block(), 0);
        assert_eq!(cycles[0].end_block(), 2);
        assert_eq!(cycles[2].start_block(), 6);
        assert_eq!(cycles[2].end_block(), 8);
    }

    #[test]
    fn duration_spans_first_to_last_block() {
        let blocks = vec![block(1, 100, 1), block(2, 105, 2), block(3, 120, 3)];
        let cycle = cycles(&blocks, 3).next().unwrap();
        assert_eq!(cycle.duration_secs(), 20);
    }

    #[test]
    fn duration_is_zero_for_shared_timestamps() {
        let blocks = vec![block(1, 100, 1), block(2, 100, 2)];
        let cycle = cycles(&blocks, 2).next().unwrap();
        assert_eq!(cycle.duration_secs(), 0);
    }

    #[test]
    fn miners_are_distinct() {
        let blocks = vec![block(1, 100, 1), block(2, 110, 1), block(3, 120, 2)];
        let cycle = cycles(&blocks, 3).next().unwrap();
        let miners = cycle.miners();
        assert_eq!(miners.len(), 2);
        assert!(miners.contains(&ValidatorAddress([1; 20])));
        assert!(miners.contains(&ValidatorAddress([2; 20])));
    }
}
