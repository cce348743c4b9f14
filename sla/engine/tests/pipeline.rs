// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
//! End to end run over a synthetic ledger: set extraction, attribution,
//! outage merging and report assembly.

use ethers_core::utils::rlp::RlpStream;
use sla_engine::analysis::{analyze, PolicyConfig};
use sla_engine::report::build_report;
use sla_types::{Block, ValidatorAddress};

fn addr(byte: u8) -> ValidatorAddress {
    ValidatorAddress([byte; 20])
}

fn encode_extra_data(validators: &[ValidatorAddress]) -> String {
    let mut stream = RlpStream::new_list(2);
    stream.append(&vec![0u8; 32]);
    stream.begin_list(validators.len());
    for v in validators {
        stream.append(&v.as_ref().to_vec());
    }
    format!("0x{}", hex::encode(stream.out()))
}

/// Four validators, 10s block spacing. B misses cycles 1 and 2 and
/// returns in cycle 3; D misses cycle 4 and never returns.
fn ledger() -> Vec<Block> {
    let (a, b, c, d) = (addr(0xaa), addr(0xbb), addr(0xcc), addr(0xdd));
    let rotation = [
        // Cycle 0: everyone seals.
        [a, b, c, d],
        // Cycles 1 and 2: A covers for B.
        [a, a, c, d],
        [a, a, c, d],
        // Cycle 3: B is back.
        [a, b, c, d],
        // Cycle 4: C covers for D, end of data.
        [a, b, c, c],
    ];

    let mut blocks = Vec::new();
    for (cycle, miners) in rotation.iter().enumerate() {
        for (slot, miner) in miners.iter().enumerate() {
            let i = (cycle * miners.len() + slot) as u64;
            blocks.push(Block::new(i + 1, 1_700_000_000 + i * 10, *miner));
        }
    }
    blocks[0].extra_data = Some(encode_extra_data(&[a, b, c, d]));
    blocks
}

#[test]
fn full_pipeline_produces_the_three_tables() {
    let (b, d) = (addr(0xbb), addr(0xdd));
    let blocks = ledger();

    let analysis = analyze(&blocks, PolicyConfig::default()).unwrap();
    assert_eq!(analysis.cycles_processed, 5);

    // Each cycle spans 3 gaps of 10s.
    let half = 15.0;
    let full = 30.0;

    // B: offline (half), remained (full), returned (half). D: offline.
    assert_eq!(analysis.events.len(), 4);
    assert_eq!(analysis.states[&b].cumulative_downtime_secs, half + full + half);
    assert_eq!(analysis.states[&b].event_count, 3);
    assert_eq!(analysis.states[&d].cumulative_downtime_secs, half);

    let report = build_report(&analysis);

    assert_eq!(report.totals.len(), 4);
    let totals_b = report
        .totals
        .iter()
        .find(|r| r.validator == b)
        .unwrap();
    assert_eq!(totals_b.total_secs, "60.00");
    assert_eq!(totals_b.total_formatted, "00:01:00");
    assert_eq!(totals_b.event_count, 3);

    assert_eq!(report.detail.len(), 4);
    assert_eq!(report.detail[0].status, "offline");
    assert_eq!(report.detail[1].status, "permaneceu offline");
    assert_eq!(report.detail[2].status, "retornou");

    // B's outage closed; D's was cut off by the end of the data.
    assert_eq!(report.outages.len(), 2);
    let outage_b = report.outages.iter().find(|r| r.validator == b).unwrap();
    let outage_d = report.outages.iter().find(|r| r.validator == d).unwrap();
    assert_eq!(outage_b.closed, "sim");
    assert_eq!(outage_b.downtime, "00:01:00");
    assert_eq!(outage_d.closed, "não");
}

#[test]
fn repeated_runs_are_identical() {
    let blocks = ledger();

    let first = analyze(&blocks, PolicyConfig::default()).unwrap();
    let second = analyze(&blocks, PolicyConfig::default()).unwrap();

    assert_eq!(first.events, second.events);
    assert_eq!(first.states, second.states);
}

#[test]
fn trailing_partial_cycle_is_never_attributed() {
    let (a, b) = (addr(0xaa), addr(0xbb));
    let mut blocks = vec![
        Block::new(1, 100, a),
        Block::new(2, 110, b),
        // Partial cycle: B would look absent if it were counted.
        Block::new(3, 120, a),
    ];
    blocks[0].extra_data = Some(encode_extra_data(&[a, b]));

    let analysis = analyze(&blocks, PolicyConfig::default()).unwrap();

    assert_eq!(analysis.cycles_processed, 1);
    assert!(analysis.events.is_empty());
}
