// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
//! Merging of per-cycle downtime events into continuous outages.

use std::collections::BTreeMap;

use sla_types::ValidatorAddress;

use crate::analysis::{DowntimeEvent, EventKind};

/// A maximal run of consecutive downtime events for one validator,
/// from detection to recovery. `closed` is false when the data ended
/// before the validator returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousOutageSegment {
    pub validator: ValidatorAddress,
    pub start_block: u64,
    pub end_block: u64,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub downtime_secs: f64,
    pub closed: bool,
}

impl ContinuousOutageSegment {
    fn open(event: &DowntimeEvent) -> Self {
        Self {
            validator: event.validator,
            start_block: event.start_block,
            end_block: event.end_block,
            start_timestamp: event.start_timestamp,
            end_timestamp: event.end_timestamp,
            downtime_secs: event.downtime_secs,
            closed: false,
        }
    }

    fn extend(&mut self, event: &DowntimeEvent) {
        self.end_block = event.end_block;
        self.end_timestamp = event.end_timestamp;
        self.downtime_secs += event.downtime_secs;
    }
}

/// Scan the event log and merge each validator's consecutive events
/// into outage segments: opened by an `offline` event, extended by any
/// subsequent event, closed (inclusive) by a `retornou` event.
///
/// Segments are returned grouped by validator, in block order within
/// each group.
pub fn continuous_outages(events: &[DowntimeEvent]) -> Vec<ContinuousOutageSegment> {
    let mut by_validator: BTreeMap<ValidatorAddress, Vec<&DowntimeEvent>> = BTreeMap::new();
    for event in events {
        by_validator.entry(event.validator).or_default().push(event);
    }

    let mut segments = Vec::new();
    for (_, mut events) in by_validator {
        events.sort_by_key(|e| e.start_block);

        let mut open: Option<ContinuousOutageSegment> = None;
        for event in events {
            match open.take() {
                None => {
                    if event.kind == EventKind::Offline {
                        open = Some(ContinuousOutageSegment::open(event));
                    }
                }
                Some(mut segment) => {
                    segment.extend(event);
                    if event.kind == EventKind::Returned {
                        segment.closed = true;
                        segments.push(segment);
                    } else {
                        open = Some(segment);
                    }
                }
            }
        }
        // The validator never returned by the end of the data: emit the
        // truncated segment, distinguishable by `closed`.
        if let Some(segment) = open {
            segments.push(segment);
        }
    }
    segments
}
