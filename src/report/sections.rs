//! Per-experiment analysis sections.
//!
//! Views over the loaded results that focus on one experiment: the branch
//! predictor comparison and the superscalar scaling study. When an
//! experiment sweeps predictors or issue widths, each run is compared with
//! the baseline run of the same workload: no prediction (`none`) for
//! branches, a 1-wide core for superscalar scaling.

use crate::sim::{ExperimentResults, RunResult};
use crate::stats::catalog::{
    BRANCH_COND_INCORRECT, BRANCH_LOOKUPS, COMMIT_RATE, DECODE_RATE, FETCH_RATE, IPC,
};
use crate::stats::BRANCH_ACCURACY;
use serde::Serialize;

pub const BRANCH_PREDICTION_EXPERIMENT: &str = "branch_prediction";
pub const SUPERSCALAR_EXPERIMENT: &str = "superscalar";

/// Configuration name of the no-prediction baseline.
pub const NO_PREDICTOR: &str = "none";

/// Issue width of the scaling baseline.
pub const BASELINE_WIDTH: u32 = 1;

/// Branch predictor behaviour on one workload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BranchRow {
    pub workload: String,
    pub configuration: Option<String>,
    pub predictor: Option<String>,
    pub ipc: f64,
    pub accuracy: f64,
    pub lookups: u64,
    pub mispredictions: u64,
    /// IPC change over the `none` run of the same workload, in percent.
    pub improvement: Option<f64>,
}

/// Front-end and commit throughput of one superscalar run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalingRow {
    pub workload: String,
    pub configuration: Option<String>,
    pub issue_width: Option<u32>,
    pub ipc: f64,
    pub fetch_rate: f64,
    pub decode_rate: f64,
    pub commit_rate: f64,
    /// `ipc / issue_width`, when the width is known.
    pub efficiency: Option<f64>,
    /// IPC relative to the 1-wide run of the same workload.
    pub scaling: Option<f64>,
}

fn find<'a>(experiments: &'a [ExperimentResults], name: &str) -> Option<&'a ExperimentResults> {
    experiments.iter().find(|e| e.name == name)
}

fn metric(run: &RunResult, name: &str) -> f64 {
    run.stats.get_f64(name).unwrap_or(0.0)
}

fn counter(run: &RunResult, name: &str) -> u64 {
    metric(run, name).max(0.0) as u64
}

/// Predictor label: the sweep directory name, else the gem5 predictor type.
fn predictor_key(run: &RunResult) -> Option<&str> {
    run.configuration
        .as_deref()
        .or(run.run_config.branch_predictor.as_deref())
}

/// Issue width from `config.ini`, else from a `<N>way` configuration name.
pub fn issue_width(run: &RunResult) -> Option<u32> {
    run.run_config.issue_width.or_else(|| {
        let name = run.configuration.as_deref()?;
        let end = name
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(name.len());
        name[..end].parse().ok()
    })
}

fn baseline_ipc<'a, F>(exp: &'a ExperimentResults, workload: &str, is_baseline: F) -> Option<f64>
where
    F: Fn(&'a RunResult) -> bool,
{
    exp.runs
        .iter()
        .find(|r| r.workload == workload && is_baseline(*r))
        .map(|r| metric(r, IPC))
        .filter(|ipc| *ipc > 0.0)
}

/// Branch predictor section, `None` when the experiment was not run.
pub fn branch_prediction(experiments: &[ExperimentResults]) -> Option<Vec<BranchRow>> {
    let exp = find(experiments, BRANCH_PREDICTION_EXPERIMENT)?;
    Some(
        exp.runs
            .iter()
            .map(|run| {
                let ipc = metric(run, IPC);
                let baseline = baseline_ipc(exp, &run.workload, |r| {
                    predictor_key(r).is_some_and(|k| k.eq_ignore_ascii_case(NO_PREDICTOR))
                });
                BranchRow {
                    workload: run.workload.clone(),
                    configuration: run.configuration.clone(),
                    predictor: run.run_config.branch_predictor.clone(),
                    ipc,
                    accuracy: metric(run, BRANCH_ACCURACY),
                    lookups: counter(run, BRANCH_LOOKUPS),
                    mispredictions: counter(run, BRANCH_COND_INCORRECT),
                    improvement: baseline.map(|base| (ipc - base) / base * 100.0),
                }
            })
            .collect(),
    )
}

/// Superscalar section, `None` when the experiment was not run.
pub fn superscalar(experiments: &[ExperimentResults]) -> Option<Vec<ScalingRow>> {
    let exp = find(experiments, SUPERSCALAR_EXPERIMENT)?;
    Some(
        exp.runs
            .iter()
            .map(|run| {
                let ipc = metric(run, IPC);
                let width = issue_width(run);
                let baseline = baseline_ipc(exp, &run.workload, |r| {
                    issue_width(r) == Some(BASELINE_WIDTH)
                });
                ScalingRow {
                    workload: run.workload.clone(),
                    configuration: run.configuration.clone(),
                    issue_width: width,
                    ipc,
                    fetch_rate: metric(run, FETCH_RATE),
                    decode_rate: metric(run, DECODE_RATE),
                    commit_rate: metric(run, COMMIT_RATE),
                    efficiency: width.filter(|w| *w > 0).map(|w| ipc / w as f64),
                    scaling: baseline.map(|base| ipc / base),
                }
            })
            .collect(),
    )
}
