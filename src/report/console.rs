//! Console report.
//!
//! Plain-text rendering of the comparison table, the per-experiment sections
//! and the summary insights, in the same banner layout the simulator uses for
//! its own statistics dump.

use super::sections::{self, BranchRow, ScalingRow};
use super::table::{Column, ComparisonRow, GroupBy};
use super::Report;
use crate::config::FormatPolicy;
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Marker appended to cells that gem5 did not report.
pub const UNMEASURED_MARK: &str = "*";

/// Formats one numeric cell under the given policy.
pub fn cell(row: &ComparisonRow, col: Column, policy: &FormatPolicy) -> String {
    let value = row.value(col);
    let mut text = if col.is_integer() {
        format!("{:.0}", value)
    } else {
        policy.display(value)
    };
    if !row.is_measured(col) {
        text.push_str(UNMEASURED_MARK);
    }
    text
}

/// Display adapter producing the full console report.
pub struct ConsoleReport<'a>(pub &'a Report<'a>);

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "           GEM5 ILP EXPERIMENT SUMMARY REPORT")?;
        writeln!(f, "{}", rule)?;

        write_comparison(f, report)?;

        writeln!(f, "\n=== Branch Prediction Analysis ===")?;
        match sections::branch_prediction(report.experiments) {
            Some(rows) => write_branch(f, &rows, &report.policy)?,
            None => writeln!(f, "Branch prediction experiment data not found")?,
        }

        writeln!(f, "\n=== Superscalar Scaling Analysis ===")?;
        match sections::superscalar(report.experiments) {
            Some(rows) => write_scaling(f, &rows, &report.policy)?,
            None => writeln!(f, "Superscalar experiment data not found")?,
        }

        write_insights(f, report)?;
        writeln!(f, "\n{}", rule)
    }
}

fn write_comparison(f: &mut fmt::Formatter<'_>, report: &Report<'_>) -> fmt::Result {
    writeln!(f, "\n=== Performance Comparison Analysis ===")?;
    let table = report.table;
    if table.is_empty() {
        return writeln!(f, "No experiment data found!");
    }

    let swept = table.has_configurations();
    let mut header = vec!["experiment".to_string(), "workload".to_string()];
    if swept {
        header.push("configuration".to_string());
    }
    header.extend(Column::ALL.iter().map(|c| c.metric().to_string()));

    let body: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            let mut cells = vec![row.experiment.clone(), row.workload.clone()];
            if swept {
                cells.push(row.configuration.clone().unwrap_or_default());
            }
            cells.extend(Column::ALL.iter().map(|c| cell(row, *c, &report.policy)));
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            body.iter()
                .map(|r| r[i].len())
                .chain(std::iter::once(header[i].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    writeln!(f, "\nPerformance Summary:")?;
    for line in std::iter::once(&header).chain(body.iter()) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:>width$}", c, width = w))
            .collect();
        writeln!(f, "{}", cells.join("  "))?;
    }

    if table.rows().iter().any(|r| r.unmeasured().next().is_some()) {
        writeln!(f, "{} not reported by gem5, counted as 0", UNMEASURED_MARK)?;
    }
    Ok(())
}

fn heading(workload: &str, configuration: Option<&str>) -> String {
    match configuration {
        Some(config) => format!("{} ({})", workload.to_uppercase(), config),
        None => workload.to_uppercase(),
    }
}

fn write_branch(f: &mut fmt::Formatter<'_>, rows: &[BranchRow], policy: &FormatPolicy) -> fmt::Result {
    for row in rows {
        writeln!(f, "\n{}:", heading(&row.workload, row.configuration.as_deref()))?;
        if let Some(predictor) = &row.predictor {
            writeln!(f, "  Predictor: {}", predictor)?;
        }
        writeln!(f, "  IPC: {}", policy.display(row.ipc))?;
        writeln!(f, "  Branch Accuracy: {}", policy.display(row.accuracy))?;
        writeln!(f, "  Branch Lookups: {}", row.lookups)?;
        writeln!(f, "  Branch Mispredictions: {}", row.mispredictions)?;
        if let Some(improvement) = row.improvement {
            writeln!(f, "  IPC vs no prediction: {:+.2}%", improvement)?;
        }
    }
    Ok(())
}

fn write_scaling(f: &mut fmt::Formatter<'_>, rows: &[ScalingRow], policy: &FormatPolicy) -> fmt::Result {
    for row in rows {
        writeln!(f, "\n{}:", heading(&row.workload, row.configuration.as_deref()))?;
        if let Some(width) = row.issue_width {
            writeln!(f, "  Issue Width: {}", width)?;
        }
        writeln!(f, "  IPC: {}", policy.display(row.ipc))?;
        writeln!(f, "  Fetch Rate: {}", policy.display(row.fetch_rate))?;
        writeln!(f, "  Decode Rate: {}", policy.display(row.decode_rate))?;
        writeln!(f, "  Commit Rate: {}", policy.display(row.commit_rate))?;
        if let Some(eff) = row.efficiency {
            writeln!(f, "  Issue Efficiency: {}", policy.percent(eff))?;
        }
        if let Some(scaling) = row.scaling {
            writeln!(f, "  Scaling vs 1-wide: {:.2}x", scaling)?;
        }
    }
    Ok(())
}

fn write_insights(f: &mut fmt::Formatter<'_>, report: &Report<'_>) -> fmt::Result {
    writeln!(f, "\n=== Key Insights ===")?;
    let table = report.table;
    let Some(best) = table.best_by(Column::Ipc) else {
        return writeln!(f, "No experiment data found!");
    };
    let policy = &report.policy;

    writeln!(
        f,
        "Best IPC: {} ({} - {})",
        policy.display(best.value(Column::Ipc)),
        best.experiment,
        best.workload
    )?;

    for (title, group) in [
        ("workload", GroupBy::Workload),
        ("experiment", GroupBy::Experiment),
    ] {
        writeln!(f, "\nAverage IPC by {}:", title)?;
        for mean in table.mean_by(group, Column::Ipc) {
            let mark = if mean.unmeasured > 0 { UNMEASURED_MARK } else { "" };
            writeln!(f, "  {}: {}{}", mean.label, policy.display(mean.mean), mark)?;
        }
    }
    Ok(())
}
