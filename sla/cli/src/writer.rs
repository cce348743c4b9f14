// Copyright 2022-2024 Protocol Labs
// SPDX-License-Identifier: MIT
//! Serialization of the report tables, one CSV file per logical sheet.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use sla_engine::report::DowntimeReport;

/// Derive the report base name from the input file name.
fn report_base(blocks_csv: &Path) -> String {
    let base = blocks_csv
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "blocks".to_string());
    format!("validadores_{base}")
}

fn write_sheet<T: Serialize>(path: &Path, rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create report file at {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the totals, detail and continuous-outage sheets. Returns the
/// paths written, in that order.
pub(crate) fn write_report(
    report: &DowntimeReport,
    output_dir: &Path,
    blocks_csv: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let base = report_base(blocks_csv);
    let totals = output_dir.join(format!("{base}_totais.csv"));
    let detail = output_dir.join(format!("{base}_detalhado.csv"));
    let outages = output_dir.join(format!("{base}_quedas.csv"));

    write_sheet(&totals, &report.totals)?;
    write_sheet(&detail, &report.detail)?;
    write_sheet(&outages, &report.outages)?;

    Ok(vec![totals, detail, outages])
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::str::FromStr;

    use sla_engine::report::{DetailRow, DowntimeReport, OutageRow, TotalsRow};
    use sla_types::ValidatorAddress;

    use super::{report_base, write_report};

    fn report() -> DowntimeReport {
        let validator =
            ValidatorAddress::from_str("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
        DowntimeReport {
            totals: vec![TotalsRow {
                validator,
                total_secs: "30.00".to_string(),
                total_formatted: "00:00:30".to_string(),
                event_count: 2,
            }],
            detail: vec![DetailRow {
                validator,
                start_block: 4,
                end_block: 6,
                start_time: "01/01/2024 00:00:00".to_string(),
                end_time: "01/01/2024 00:00:20".to_string(),
                downtime_secs: 10.0,
                status: "offline",
            }],
            outages: vec![OutageRow {
                validator,
                start_block: 4,
                end_block: 6,
                start_time: "01/01/2024 00:00:00".to_string(),
                end_time: "01/01/2024 00:00:20".to_string(),
                downtime: "00:00:30".to_string(),
                closed: "não",
            }],
        }
    }

    #[test]
    fn base_name_derives_from_the_input() {
        assert_eq!(report_base(Path::new("./data/march.csv")), "validadores_march");
    }

    #[test]
    fn writes_the_three_sheets_with_headers() {
        let dir = tempfile::tempdir().unwrap();

        let written = write_report(&report(), dir.path(), Path::new("blocks.csv")).unwrap();

        assert_eq!(written.len(), 3);
        assert!(written[0].ends_with("validadores_blocks_totais.csv"));

        let totals = std::fs::read_to_string(&written[0]).unwrap();
        assert!(totals.starts_with(
            "Validador,Tempo Offline Total (s),Tempo Offline Total,Total de Eventos"
        ));
        assert!(totals.contains("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa,30.00,00:00:30,2"));

        let detail = std::fs::read_to_string(&written[1]).unwrap();
        assert!(detail
            .starts_with("Validador,Bloco Inicial,Bloco Final,Data Inicial,Data Final,DowntimeSegundos,Status"));
        assert!(detail.contains("offline"));

        let outages = std::fs::read_to_string(&written[2]).unwrap();
        assert!(outages
            .starts_with("Validador,Bloco Inicial,Bloco Final,Data Inicial,Data Final,Downtime,Encerrado"));
        assert!(outages.contains("não"));
    }
}
