//! Comparison table.
//!
//! Flattens per-run metric reports into one row per experiment×workload
//! pair and computes per-label means over those rows.

use crate::sim::ExperimentResults;
use crate::stats::catalog::{COMMITTED_INSTS, IPC, SIM_SECONDS};
use crate::stats::derived::{BRANCH_ACCURACY, DCACHE, L2CACHE};
use crate::stats::MetricReport;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

const COLUMN_COUNT: usize = 6;

/// Numeric columns of the comparison table, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Column {
    Ipc,
    SimSeconds,
    CommittedInsts,
    BranchAccuracy,
    DcacheHitRate,
    L2cacheHitRate,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Ipc,
        Column::SimSeconds,
        Column::CommittedInsts,
        Column::BranchAccuracy,
        Column::DcacheHitRate,
        Column::L2cacheHitRate,
    ];

    /// Metric key the column is projected from. Also used as its header.
    pub fn metric(&self) -> &'static str {
        match self {
            Column::Ipc => IPC,
            Column::SimSeconds => SIM_SECONDS,
            Column::CommittedInsts => COMMITTED_INSTS,
            Column::BranchAccuracy => BRANCH_ACCURACY,
            Column::DcacheHitRate => DCACHE.hit_rate,
            Column::L2cacheHitRate => L2CACHE.hit_rate,
        }
    }

    /// Counter columns are written without a fractional part.
    pub fn is_integer(&self) -> bool {
        matches!(self, Column::CommittedInsts)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// One experiment×workload row.
///
/// Columns whose metric was absent from the report hold `0` and are listed
/// in the row's unmeasured set, so renderers can tell a measured zero from a
/// value gem5 never reported.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub experiment: String,
    pub workload: String,
    /// Sweep configuration the run belongs to, if the experiment has one.
    pub configuration: Option<String>,
    values: [f64; COLUMN_COUNT],
    unmeasured: BTreeSet<Column>,
}

impl ComparisonRow {
    /// Projects a metric report onto the table columns.
    pub fn project(experiment: &str, workload: &str, report: &MetricReport) -> Self {
        let mut values = [0.0; COLUMN_COUNT];
        let mut unmeasured = BTreeSet::new();
        for col in Column::ALL {
            match report.get_f64(col.metric()) {
                Some(v) => values[col.index()] = v,
                None => {
                    unmeasured.insert(col);
                }
            }
        }
        Self {
            experiment: experiment.to_string(),
            workload: workload.to_string(),
            configuration: None,
            values,
            unmeasured,
        }
    }

    pub fn with_configuration(mut self, configuration: Option<String>) -> Self {
        self.configuration = configuration;
        self
    }

    /// Chart series the row belongs to: `experiment` or
    /// `experiment/configuration`.
    pub fn series(&self) -> String {
        match &self.configuration {
            Some(c) => format!("{}/{}", self.experiment, c),
            None => self.experiment.clone(),
        }
    }

    /// Column value, `0` when unmeasured.
    pub fn value(&self, col: Column) -> f64 {
        self.values[col.index()]
    }

    /// Column value, `None` when unmeasured.
    pub fn measured(&self, col: Column) -> Option<f64> {
        if self.is_measured(col) {
            Some(self.value(col))
        } else {
            None
        }
    }

    pub fn is_measured(&self, col: Column) -> bool {
        !self.unmeasured.contains(&col)
    }

    pub fn unmeasured(&self) -> impl Iterator<Item = Column> + '_ {
        self.unmeasured.iter().copied()
    }
}

/// Row label used for grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupBy {
    Experiment,
    Workload,
}

impl GroupBy {
    fn label<'a>(&self, row: &'a ComparisonRow) -> &'a str {
        match self {
            GroupBy::Experiment => &row.experiment,
            GroupBy::Workload => &row.workload,
        }
    }
}

/// Arithmetic mean of one column over all rows sharing a label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupMean {
    pub label: String,
    pub mean: f64,
    /// Rows averaged.
    pub rows: usize,
    /// Rows that contributed a substituted `0`.
    pub unmeasured: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// One row per run, experiments in load order.
    pub fn from_results(experiments: &[ExperimentResults]) -> Self {
        let rows = experiments
            .iter()
            .flat_map(|exp| {
                exp.runs.iter().map(move |run| {
                    ComparisonRow::project(&exp.name, &run.workload, &run.stats)
                        .with_configuration(run.configuration.clone())
                })
            })
            .collect();
        Self { rows }
    }

    pub fn from_rows(rows: Vec<ComparisonRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct experiment labels in first-seen order.
    pub fn experiments(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.experiment.as_str()))
    }

    /// Distinct workload labels in first-seen order.
    pub fn workloads(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.workload.as_str()))
    }

    /// Distinct chart series in first-seen order.
    pub fn series(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            let series = row.series();
            if !seen.contains(&series) {
                seen.push(series);
            }
        }
        seen
    }

    /// Returns true when any row belongs to a sweep configuration.
    pub fn has_configurations(&self) -> bool {
        self.rows.iter().any(|r| r.configuration.is_some())
    }

    /// First row of a chart series for a workload.
    pub fn find_series(&self, series: &str, workload: &str) -> Option<&ComparisonRow> {
        self.rows
            .iter()
            .find(|r| r.workload == workload && r.series() == series)
    }

    pub fn find(&self, experiment: &str, workload: &str) -> Option<&ComparisonRow> {
        self.rows
            .iter()
            .find(|r| r.experiment == experiment && r.workload == workload)
    }

    /// Mean of `col` per label, labels sorted.
    ///
    /// Unmeasured cells take part as `0`, matching the CSV export.
    pub fn mean_by(&self, group: GroupBy, col: Column) -> Vec<GroupMean> {
        let mut acc: BTreeMap<&str, (f64, usize, usize)> = BTreeMap::new();
        for row in &self.rows {
            let entry = acc.entry(group.label(row)).or_insert((0.0, 0, 0));
            entry.0 += row.value(col);
            entry.1 += 1;
            if !row.is_measured(col) {
                entry.2 += 1;
            }
        }
        acc.into_iter()
            .map(|(label, (sum, rows, unmeasured))| GroupMean {
                label: label.to_string(),
                mean: sum / rows as f64,
                rows,
                unmeasured,
            })
            .collect()
    }

    /// Row with the highest value of `col`; the first one on ties.
    pub fn best_by(&self, col: Column) -> Option<&ComparisonRow> {
        let mut best: Option<&ComparisonRow> = None;
        for row in &self.rows {
            match best {
                Some(b) if b.value(col) >= row.value(col) => {}
                _ => best = Some(row),
            }
        }
        best
    }
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}
