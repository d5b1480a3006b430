//! Integration tests for results directory discovery.

use ilp_analyzer::common::{AnalysisError, MetricValue};
use ilp_analyzer::config::InputConfig;
use ilp_analyzer::sim::{check_results_dir, load_experiment, load_results, load_run};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_run(root: &Path, experiment: &str, workload: &str, stats: Option<&str>, ini: Option<&str>) {
    let dir = root.join(experiment).join(workload);
    fs::create_dir_all(&dir).unwrap();
    if let Some(stats) = stats {
        fs::write(dir.join("stats.txt"), stats).unwrap();
    }
    if let Some(ini) = ini {
        fs::write(dir.join("config.ini"), ini).unwrap();
    }
}

/// Tests loading configured experiments in configuration order.
#[test]
fn test_load_results_order() {
    let tmp = TempDir::new().unwrap();
    write_run(tmp.path(), "superscalar", "simple_loop", Some("system.cpu.ipc 1.5\n"), None);
    write_run(tmp.path(), "basic_pipeline", "simple_loop", Some("system.cpu.ipc 0.7\n"), None);
    write_run(tmp.path(), "unlisted", "simple_loop", Some("system.cpu.ipc 9.9\n"), None);

    let results = load_results(tmp.path(), &InputConfig::default()).unwrap();
    let names: Vec<&str> = results.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["basic_pipeline", "superscalar"]);
}

/// Tests that workloads are sorted and plain files are skipped.
#[test]
fn test_load_experiment_sorted_dirs_only() {
    let tmp = TempDir::new().unwrap();
    write_run(tmp.path(), "smt", "zeta", Some("sim_insts 1\n"), None);
    write_run(tmp.path(), "smt", "alpha", Some("sim_insts 2\n"), None);
    fs::write(tmp.path().join("smt").join("notes.txt"), "ignored").unwrap();

    let exp = load_experiment(&tmp.path().join("smt"), "smt", &InputConfig::default()).unwrap();
    let workloads: Vec<&str> = exp.runs.iter().map(|r| r.workload.as_str()).collect();
    assert_eq!(workloads, vec!["alpha", "zeta"]);
    assert_eq!(
        exp.run("alpha").unwrap().stats.get("sim_insts"),
        Some(&MetricValue::Int(2))
    );
}

/// Tests that a missing stats file yields an empty report.
#[test]
fn test_load_run_missing_stats() {
    let tmp = TempDir::new().unwrap();
    write_run(tmp.path(), "basic_pipeline", "empty", None, None);

    let run = load_run(
        &tmp.path().join("basic_pipeline").join("empty"),
        &InputConfig::default(),
    )
    .unwrap();
    assert_eq!(run.workload, "empty");
    assert!(run.stats.is_empty());
    assert!(run.config_path.is_none());
}

/// Tests that config.ini is recorded and parsed.
#[test]
fn test_load_run_with_config_ini() {
    let tmp = TempDir::new().unwrap();
    let ini = "[system.cpu]\ntype=DerivO3CPU\nissueWidth=8\n\n[system.cpu.branchPred]\ntype=BiModeBP\n";
    write_run(tmp.path(), "superscalar", "parallel_workload", Some("system.cpu.ipc 2.1\n"), Some(ini));

    let dir = tmp.path().join("superscalar").join("parallel_workload");
    let run = load_run(&dir, &InputConfig::default()).unwrap();
    assert_eq!(run.config_path, Some(dir.join("config.ini")));
    assert_eq!(run.run_config.issue_width, Some(8));
    assert_eq!(run.run_config.branch_predictor.as_deref(), Some("BiModeBP"));
}

/// Tests custom stats file names.
#[test]
fn test_load_run_custom_file_name() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("w");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("m5stats.txt"), "system.cpu.ipc 0.4\n").unwrap();

    let config = InputConfig {
        stats_file: "m5stats.txt".to_string(),
        ..InputConfig::default()
    };
    let run = load_run(&dir, &config).unwrap();
    assert_eq!(run.stats.get_f64("ipc"), Some(0.4));
}

/// Tests that a missing results root is an error.
#[test]
fn test_load_results_missing_root() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    match load_results(&missing, &InputConfig::default()) {
        Err(AnalysisError::MissingResultsDir(p)) => assert_eq!(p, missing),
        other => panic!("unexpected result: {:?}", other.map(|r| r.len())),
    }
}

/// Tests that an empty root loads no experiments.
#[test]
fn test_load_results_empty_root() {
    let tmp = TempDir::new().unwrap();
    let results = load_results(tmp.path(), &InputConfig::default()).unwrap();
    assert!(results.is_empty());
}

/// Tests that a results path naming a file is reported as not a directory.
#[test]
fn test_load_results_root_is_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("results.txt");
    fs::write(&file, "not a directory").unwrap();

    let err = check_results_dir(&file).unwrap_err();
    assert!(matches!(&err, AnalysisError::NotADirectory(p) if p == &file));
    assert!(err.to_string().contains("not a directory"));
    assert!(!err.to_string().contains("not found"));

    assert!(matches!(
        load_results(&file, &InputConfig::default()),
        Err(AnalysisError::NotADirectory(_))
    ));
    assert!(matches!(
        check_results_dir(&tmp.path().join("nope")),
        Err(AnalysisError::MissingResultsDir(_))
    ));
}

/// Tests the configuration level between experiment and workload.
#[test]
fn test_load_experiment_configuration_level() {
    let tmp = TempDir::new().unwrap();
    let exp_dir = tmp.path().join("branch_prediction");
    for (config, ipc) in [("none", "0.5"), ("tournament", "0.6")] {
        write_run(
            &exp_dir,
            config,
            "branch_intensive",
            Some(&format!("system.cpu.ipc {}\n", ipc)),
            None,
        );
    }
    write_run(tmp.path(), "branch_prediction", "simple_loop", Some("system.cpu.ipc 1.0\n"), None);

    let exp = load_experiment(&exp_dir, "branch_prediction", &InputConfig::default()).unwrap();
    let runs: Vec<(Option<&str>, &str)> = exp
        .runs
        .iter()
        .map(|r| (r.configuration.as_deref(), r.workload.as_str()))
        .collect();
    assert_eq!(
        runs,
        vec![
            (Some("none"), "branch_intensive"),
            (None, "simple_loop"),
            (Some("tournament"), "branch_intensive"),
        ]
    );
    assert_eq!(exp.runs[2].stats.get_f64("ipc"), Some(0.6));
}
