// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: Apache-2.0, MIT
//! The three logical report tables and their display formatting.

use chrono::DateTime;
use serde::Serialize;
use sla_types::ValidatorAddress;

use crate::analysis::DowntimeAnalysis;
use crate::outage::continuous_outages;

/// Reports render timestamps at this fixed offset (UTC-3), the
/// operations team convention.
const REPORT_UTC_OFFSET_SECS: i64 = -3 * 3600;

/// Render a Unix timestamp as `DD/MM/YYYY HH:MM:SS` at UTC-3.
pub fn format_timestamp(timestamp: u64) -> String {
    match DateTime::from_timestamp(timestamp as i64 + REPORT_UTC_OFFSET_SECS, 0) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

/// Render a duration as `HH:MM:SS`, truncated to whole seconds.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsRow {
    #[serde(rename = "Validador")]
    pub validator: ValidatorAddress,
    #[serde(rename = "Tempo Offline Total (s)")]
    pub total_secs: String,
    #[serde(rename = "Tempo Offline Total")]
    pub total_formatted: String,
    #[serde(rename = "Total de Eventos")]
    pub event_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailRow {
    #[serde(rename = "Validador")]
    pub validator: ValidatorAddress,
    #[serde(rename = "Bloco Inicial")]
    pub start_block: u64,
    #[serde(rename = "Bloco Final")]
    pub end_block: u64,
    #[serde(rename = "Data Inicial")]
    pub start_time: String,
    #[serde(rename = "Data Final")]
    pub end_time: String,
    #[serde(rename = "DowntimeSegundos")]
    pub downtime_secs: f64,
    #[serde(rename = "Status")]
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutageRow {
    #[serde(rename = "Validador")]
    pub validator: ValidatorAddress,
    #[serde(rename = "Bloco Inicial")]
    pub start_block: u64,
    #[serde(rename = "Bloco Final")]
    pub end_block: u64,
    #[serde(rename = "Data Inicial")]
    pub start_time: String,
    #[serde(rename = "Data Final")]
    pub end_time: String,
    #[serde(rename = "Downtime")]
    pub downtime: String,
    #[serde(rename = "Encerrado")]
    pub closed: &'static str,
}

/// The serializable view of a finished analysis: one record list per
/// output sheet. The writer is only responsible for serialization.
#[derive(Debug, Clone)]
pub struct DowntimeReport {
    pub totals: Vec<TotalsRow>,
    pub detail: Vec<DetailRow>,
    pub outages: Vec<OutageRow>,
}

pub fn build_report(analysis: &DowntimeAnalysis) -> DowntimeReport {
    let totals = analysis
        .report_order()
        .into_iter()
        .map(|validator| {
            let state = analysis.states.get(&validator).cloned().unwrap_or_default();
            TotalsRow {
                validator,
                total_secs: format!("{:.2}", state.cumulative_downtime_secs),
                total_formatted: format_duration(state.cumulative_downtime_secs),
                event_count: state.event_count,
            }
        })
        .collect();

    let detail = analysis
        .events
        .iter()
        .map(|event| DetailRow {
            validator: event.validator,
            start_block: event.start_block,
            end_block: event.end_block,
            start_time: format_timestamp(event.start_timestamp),
            end_time: format_timestamp(event.end_timestamp),
            downtime_secs: event.downtime_secs,
            status: event.kind.label(),
        })
        .collect();

    let outages = continuous_outages(&analysis.events)
        .into_iter()
        .map(|segment| OutageRow {
            validator: segment.validator,
            start_block: segment.start_block,
            end_block: segment.end_block,
            start_time: format_timestamp(segment.start_timestamp),
            end_time: format_timestamp(segment.end_timestamp),
            downtime: format_duration(segment.downtime_secs),
            closed: if segment.closed { "sim" } else { "não" },
        })
        .collect();

    DowntimeReport {
        totals,
        detail,
        outages,
    }
}
