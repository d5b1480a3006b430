//! Results Directory Loader.
//!
//! This module walks a results root laid out as
//! `<root>/<experiment>/<workload>/{stats.txt,config.ini}` and loads the
//! statistics and CPU configuration of every run it finds. An experiment
//! that sweeps a parameter may add one level,
//! `<root>/<experiment>/<configuration>/<workload>/`, e.g.
//! `branch_prediction/tournament/simple_loop`.

use crate::common::{AnalysisError, Result};
use crate::config::InputConfig;
use crate::sim::ini::RunConfig;
use crate::stats::{self, MetricReport};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Outputs of one gem5 run (one workload under one experiment).
#[derive(Clone, Debug, Serialize)]
pub struct RunResult {
    pub workload: String,
    /// Configuration directory name, for experiments with a sweep level.
    pub configuration: Option<String>,
    pub stats: MetricReport,
    /// Path of `config.ini`, when gem5 wrote one.
    pub config_path: Option<PathBuf>,
    pub run_config: RunConfig,
}

/// All runs of one experiment, sorted by configuration then workload name.
#[derive(Clone, Debug, Serialize)]
pub struct ExperimentResults {
    pub name: String,
    pub runs: Vec<RunResult>,
}

impl ExperimentResults {
    /// Finds the run for a workload.
    pub fn run(&self, workload: &str) -> Option<&RunResult> {
        self.runs.iter().find(|r| r.workload == workload)
    }
}

/// Checks that the results root exists and is a directory.
///
/// Only file metadata is inspected.
pub fn check_results_dir(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(AnalysisError::MissingResultsDir(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(AnalysisError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Loads every configured experiment present under `root`.
///
/// Experiments are returned in the order they are listed in the
/// configuration; missing experiment directories are skipped. A missing
/// root is an error and nothing is read.
pub fn load_results(root: &Path, config: &InputConfig) -> Result<Vec<ExperimentResults>> {
    check_results_dir(root)?;

    let mut experiments = Vec::new();
    for name in &config.experiments {
        let path = root.join(name);
        if path.is_dir() {
            experiments.push(load_experiment(&path, name, config)?);
        } else {
            debug!("Experiment '{}' not present under {}", name, root.display());
        }
    }
    Ok(experiments)
}

fn subdirs(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path).map_err(|e| AnalysisError::io(path, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AnalysisError::io(path, e))?;
        let entry_path = entry.path();
        if entry_path.is_dir() {
            dirs.push(entry_path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Loads every workload subdirectory of one experiment directory.
///
/// A subdirectory without a stats file that itself holds subdirectories is
/// a configuration level; each of its subdirectories is a workload run
/// under that configuration.
pub fn load_experiment(path: &Path, name: &str, config: &InputConfig) -> Result<ExperimentResults> {
    let mut runs = Vec::new();
    for dir in subdirs(path)? {
        let nested = if dir.join(&config.stats_file).exists() {
            Vec::new()
        } else {
            subdirs(&dir)?
        };

        if nested.is_empty() {
            runs.push(load_run(&dir, config)?);
            continue;
        }

        let configuration = dir_name(&dir);
        debug!("{}: configuration '{}'", name, configuration);
        for workload_dir in nested {
            let mut run = load_run(&workload_dir, config)?;
            run.configuration = Some(configuration.clone());
            runs.push(run);
        }
    }

    info!("[Loader] {}: {} workloads", name, runs.len());
    Ok(ExperimentResults {
        name: name.to_string(),
        runs,
    })
}

/// Loads the statistics and CPU configuration of one run directory.
pub fn load_run(dir: &Path, config: &InputConfig) -> Result<RunResult> {
    let workload = dir_name(dir);

    let stats = stats::extract_file(&dir.join(&config.stats_file))?;

    let ini_path = dir.join(&config.config_file);
    let (config_path, run_config) = if ini_path.is_file() {
        let text = fs::read_to_string(&ini_path).map_err(|e| AnalysisError::io(&ini_path, e))?;
        (Some(ini_path), RunConfig::parse(&text))
    } else {
        (None, RunConfig::default())
    };

    Ok(RunResult {
        workload,
        configuration: None,
        stats,
        config_path,
        run_config,
    })
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
