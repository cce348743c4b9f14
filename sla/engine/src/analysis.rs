// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
//! The downtime attribution state machine.
//!
//! Blocks are partitioned into rotation cycles and each expected
//! validator is charged downtime from its presence in the cycle:
//! half a cycle when absence is first observed, the full cycle while
//! it is known to be down, and half a cycle on recovery. The halves
//! account for detection lag; this is an approximation policy over
//! block arrival, not a measured clock.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use sla_types::{Block, ValidatorAddress};

use crate::cycle::cycles;
use crate::extract::extract_validators;
use crate::Error;

/// Selects one of the historical attribution policy variants. The
/// default (all flags off) trusts the seed validator set for the whole
/// run and attributes downtime for every cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Re-derive the expected validator set from the first block of
    /// every cycle instead of trusting the seed set throughout.
    pub derive_per_cycle_validator_set: bool,
    /// Classify cycles where fewer than `ceil(2N/3)` validators sealed
    /// a block as a network-wide stall instead of individual downtime.
    pub enable_quorum_guard: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Online,
    Offline,
}

/// What a nonzero attribution meant for the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Offline,
    RemainedOffline,
    Returned,
}

impl EventKind {
    /// The status label used in the reports.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Offline => "offline",
            EventKind::RemainedOffline => "permaneceu offline",
            EventKind::Returned => "retornou",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-validator accumulator, carried across cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorRuntimeState {
    pub status: Status,
    pub cumulative_downtime_secs: f64,
    pub event_count: u64,
}

impl Default for ValidatorRuntimeState {
    fn default() -> Self {
        Self {
            status: Status::Online,
            cumulative_downtime_secs: 0.0,
            event_count: 0,
        }
    }
}

/// Emitted for every cycle in which a validator accrued downtime.
/// Block and timestamp bounds are the cycle's, not the validator's.
#[derive(Debug, Clone, PartialEq)]
pub struct DowntimeEvent {
    pub validator: ValidatorAddress,
    pub start_block: u64,
    pub end_block: u64,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub downtime_secs: f64,
    pub kind: EventKind,
}

/// The outcome of one run over the ledger.
#[derive(Debug, Clone)]
pub struct DowntimeAnalysis {
    /// The seed validator set, in rotation order.
    pub validators: Vec<ValidatorAddress>,
    pub states: BTreeMap<ValidatorAddress, ValidatorRuntimeState>,
    pub events: Vec<DowntimeEvent>,
    pub cycles_processed: usize,
    /// Cycles classified as a network-wide stall by the quorum guard.
    pub stalled_cycles: usize,
    /// Cycles skipped because their validator set could not be re-derived.
    pub skipped_cycles: usize,
}

impl DowntimeAnalysis {
    /// Validators in report order: rotation order of the seed set, then
    /// any validator that only ever appeared in a cycle-local set.
    pub fn report_order(&self) -> Vec<ValidatorAddress> {
        let seed: BTreeSet<_> = self.validators.iter().copied().collect();
        let mut order = self.validators.clone();
        order.extend(self.states.keys().filter(|v| !seed.contains(v)).copied());
        order
    }
}

/// Minimum count of live validators for the network to be considered
/// live rather than stalled.
pub fn quorum(n: usize) -> usize {
    (2 * n).div_ceil(3)
}

/// Reconstruct the downtime timeline of every validator from a ledger
/// sorted by block number.
///
/// Cycles are processed strictly in increasing order; transitions are
/// defined relative to the previous cycle's status, so there is no
/// parallelism here by construction.
pub fn analyze(blocks: &[Block], config: PolicyConfig) -> Result<DowntimeAnalysis, Error> {
    if blocks.is_empty() {
        return Err(Error::EmptyLedger);
    }

    let seed = blocks[0]
        .extra_data
        .as_deref()
        .ok_or_else(|| Error::NoValidatorSet("first block carries no extra data".to_string()))?;
    let validators = extract_validators(seed)?;
    if validators.is_empty() {
        return Err(Error::EmptyValidatorSet);
    }

    tracing::info!(count = validators.len(), "validator set detected");

    let cycle_len = validators.len();
    let quorum = quorum(cycle_len);
    let expected: BTreeSet<_> = validators.iter().copied().collect();

    let mut states: BTreeMap<_, _> = validators
        .iter()
        .map(|v| (*v, ValidatorRuntimeState::default()))
        .collect();
    let mut events = Vec::new();
    let mut cycles_processed = 0;
    let mut stalled_cycles = 0;
    let mut skipped_cycles = 0;

    for cycle in cycles(blocks, cycle_len) {
        cycles_processed += 1;

        let cycle_validators = if config.derive_per_cycle_validator_set {
            match cycle.first().extra_data.as_deref().map(extract_validators) {
                Some(Ok(vs)) if !vs.is_empty() => vs,
                _ => {
                    tracing::warn!(
                        cycle = cycle.index,
                        block = cycle.start_block(),
                        "cycle without a decodable validator set, skipping"
                    );
                    skipped_cycles += 1;
                    continue;
                }
            }
        } else {
            validators.clone()
        };

        let miners = cycle.miners();

        // A lost quorum means the whole network stalled; an absence
        // clock that spans a total outage must not charge individual
        // validators. Hard branch, taken before any attribution.
        if config.enable_quorum_guard {
            let present = miners.intersection(&expected).count();
            if present < quorum {
                tracing::warn!(
                    cycle = cycle.index,
                    block = cycle.start_block(),
                    present,
                    quorum,
                    "quorum lost, treating cycle as a network-wide stall"
                );
                stalled_cycles += 1;
                for state in states.values_mut() {
                    state.status = Status::Online;
                }
                continue;
            }
        }

        let duration = cycle.duration_secs() as f64;
        for validator in &cycle_validators {
            let present = miners.contains(validator);
            let state = states.entry(*validator).or_default();

            let (status, downtime, kind) = match (state.status, present) {
                (Status::Online, false) => (Status::Offline, duration / 2.0, Some(EventKind::Offline)),
                (Status::Offline, false) => (Status::Offline, duration, Some(EventKind::RemainedOffline)),
                (Status::Offline, true) => (Status::Online, duration / 2.0, Some(EventKind::Returned)),
                (Status::Online, true) => (Status::Online, 0.0, None),
            };

            state.status = status;

            // Zero-downtime cycles update the status silently.
            if let Some(kind) = kind {
                if downtime > 0.0 {
                    state.cumulative_downtime_secs += downtime;
                    state.event_count += 1;
                    events.push(DowntimeEvent {
                        validator: *validator,
                        start_block: cycle.start_block(),
                        end_block: cycle.end_block(),
                        start_timestamp: cycle.start_timestamp(),
                        end_timestamp: cycle.end_timestamp(),
                        downtime_secs: downtime,
                        kind,
                    });
                }
            }
        }
    }

    Ok(DowntimeAnalysis {
        validators,
        states,
        events,
        cycles_processed,
        stalled_cycles,
        skipped_cycles,
    })
}
