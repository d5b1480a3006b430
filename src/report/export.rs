//! File exports.
//!
//! CSV of the comparison table and a JSON summary of every loaded run.
//! CSV float columns use the policy's CSV precision and unmeasured cells are
//! written as `0` so the file stays purely numeric; the JSON summary keeps
//! them as `null`.

use super::sections::{self, BranchRow, ScalingRow};
use super::table::{Column, GroupBy, GroupMean};
use super::Report;
use crate::common::{AnalysisError, Result};
use crate::sim::ExperimentResults;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header row of the CSV export. The `configuration` column is only
/// present when some run sits below a configuration directory.
pub fn csv_header(with_configuration: bool) -> Vec<&'static str> {
    let mut header = vec!["experiment", "workload"];
    if with_configuration {
        header.push("configuration");
    }
    header.extend(Column::ALL.iter().map(|c| c.metric()));
    header
}

/// Writes the comparison table as CSV to any writer.
pub fn write_csv<W: Write>(report: &Report<'_>, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    let swept = report.table.has_configurations();
    writer.write_record(csv_header(swept))?;

    for row in report.table.rows() {
        let mut record = vec![row.experiment.clone(), row.workload.clone()];
        if swept {
            record.push(row.configuration.clone().unwrap_or_default());
        }
        for col in Column::ALL {
            let value = row.value(col);
            record.push(if col.is_integer() {
                format!("{:.0}", value)
            } else {
                report.policy.csv(value)
            });
        }
        writer.write_record(&record)?;
    }

    writer.flush().map_err(|e| AnalysisError::Csv(e.into()))
}

#[derive(Serialize)]
struct JsonRow<'a> {
    experiment: &'a str,
    workload: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration: Option<&'a str>,
    #[serde(flatten)]
    values: BTreeMap<&'static str, Option<f64>>,
}

#[derive(Serialize)]
struct Summary<'a> {
    experiments: &'a [ExperimentResults],
    comparison: Vec<JsonRow<'a>>,
    mean_ipc_by_experiment: Vec<GroupMean>,
    mean_ipc_by_workload: Vec<GroupMean>,
    branch_prediction: Option<Vec<BranchRow>>,
    superscalar: Option<Vec<ScalingRow>>,
}

/// Writes the JSON summary to any writer.
pub fn write_json<W: Write>(report: &Report<'_>, out: W) -> Result<()> {
    let comparison = report
        .table
        .rows()
        .iter()
        .map(|row| JsonRow {
            experiment: &row.experiment,
            workload: &row.workload,
            configuration: row.configuration.as_deref(),
            values: Column::ALL
                .iter()
                .map(|c| (c.metric(), row.measured(*c)))
                .collect(),
        })
        .collect();

    let summary = Summary {
        experiments: report.experiments,
        comparison,
        mean_ipc_by_experiment: report.table.mean_by(GroupBy::Experiment, Column::Ipc),
        mean_ipc_by_workload: report.table.mean_by(GroupBy::Workload, Column::Ipc),
        branch_prediction: sections::branch_prediction(report.experiments),
        superscalar: sections::superscalar(report.experiments),
    };

    let mut out = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut out, &summary)?;
    writeln!(out)
        .and_then(|_| out.flush())
        .map_err(|e| AnalysisError::Json(serde_json::Error::io(e)))
}

/// Creates `path` and hands the file to `write`.
pub fn to_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> Result<()>,
{
    let file = File::create(path).map_err(|e| AnalysisError::io(path, e))?;
    write(file)
}
