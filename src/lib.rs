//! gem5 ILP Experiment Analyzer Library.
//!
//! This crate turns the statistics gem5 writes for each simulation run of an
//! instruction-level-parallelism study into comparison tables, charts and
//! reports.
//!
//! # Pipeline
//!
//! * **Extraction**: a fixed catalog of `stats.txt` fields is matched line by
//!   line and parsed into a [`stats::MetricReport`], together with branch
//!   accuracy and cache hit rates derived from it.
//! * **Loading**: the results root is walked as
//!   `<experiment>/<workload>/{stats.txt,config.ini}`.
//! * **Reporting**: runs are flattened into a comparison table, averaged per
//!   experiment and per workload, and rendered to the console, CSV, JSON,
//!   HTML and an SVG chart.
//!
//! # Modules
//!
//! * `analysis`: Top-level driver used by the CLI.
//! * `common`: Metric values and error handling.
//! * `config`: TOML analysis configuration.
//! * `report`: Comparison table, aggregation and renderers.
//! * `sim`: gem5 output discovery and `config.ini` reading.
//! * `stats`: Statistics extraction and derived metrics.

/// Analysis driver tying loading, aggregation and rendering together.
///
/// Validates the results root, runs the pipeline once and writes the
/// requested outputs next to the results.
pub mod analysis;

/// Shared metric value type and error handling.
///
/// Provides the integer/float/raw value representation used by every report
/// and the crate-wide error enum.
pub mod common;

/// Analysis configuration.
///
/// Loads and parses TOML files selecting the experiments to read, the output
/// file names and the number formatting policy.
pub mod config;

/// Comparison table, aggregates and renderers.
pub mod report;

/// gem5 run output discovery.
///
/// Walks the results root and reads the files gem5 leaves in each run
/// directory.
pub mod sim;

/// Statistics extraction.
///
/// Matches the metric catalog against `stats.txt` text and computes branch
/// accuracy and cache hit rates.
pub mod stats;
