//! Integration tests for analysis configuration.

use ilp_analyzer::common::AnalysisError;
use ilp_analyzer::config::{AnalysisConfig, FormatPolicy};
use std::fs;
use tempfile::TempDir;

/// Tests the built-in defaults.
#[test]
fn test_default_config() {
    let config = AnalysisConfig::default();
    assert_eq!(
        config.input.experiments,
        vec!["basic_pipeline", "branch_prediction", "superscalar", "smt"]
    );
    assert_eq!(config.input.stats_file, "stats.txt");
    assert_eq!(config.input.config_file, "config.ini");
    assert_eq!(config.output.csv_file, "performance_comparison.csv");
    assert!(config.output.write_chart);
    assert_eq!(config.format.console_decimals, 4);
    assert_eq!(config.format.csv_decimals, 6);
}

/// Tests that an empty document yields the defaults.
#[test]
fn test_empty_toml_uses_defaults() {
    let config = AnalysisConfig::from_toml("").unwrap();
    assert_eq!(config.input.experiments.len(), 4);
    assert_eq!(config.format, FormatPolicy::default());
}

/// Tests partial overrides.
#[test]
fn test_partial_toml() {
    let config = AnalysisConfig::from_toml(
        r#"
[input]
experiments = ["superscalar"]

[output]
write_chart = false

[format]
csv_decimals = 3
"#,
    )
    .unwrap();
    assert_eq!(config.input.experiments, vec!["superscalar"]);
    assert_eq!(config.input.stats_file, "stats.txt");
    assert!(!config.output.write_chart);
    assert!(config.output.write_json);
    assert_eq!(config.format.csv_decimals, 3);
    assert_eq!(config.format.console_decimals, 4);
}

/// Tests that malformed TOML is reported as a configuration error.
#[test]
fn test_invalid_toml() {
    let err = AnalysisConfig::from_toml("[input\nexperiments = 3").unwrap_err();
    assert!(matches!(err, AnalysisError::Config(_)));
}

/// Tests loading from a file and a missing file.
#[test]
fn test_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("analysis.toml");
    fs::write(&path, "[format]\nconsole_decimals = 2\n").unwrap();
    assert_eq!(AnalysisConfig::from_file(&path).unwrap().format.console_decimals, 2);

    let err = AnalysisConfig::from_file(&tmp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, AnalysisError::Io { .. }));
}

/// Tests the number formatting policy.
#[test]
fn test_format_policy() {
    let policy = FormatPolicy::default();
    assert_eq!(policy.display(1.23456), "1.2346");
    assert_eq!(policy.csv(0.8), "0.800000");
    assert_eq!(policy.percent(0.873), "87.300%");
}
