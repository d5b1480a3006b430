//! gem5 run outputs.
//!
//! Discovery of experiment and workload directories under a results root,
//! and readers for the files gem5 leaves in each run directory.

/// `config.ini` reader.
pub mod ini;

/// Results directory walker.
pub mod loader;

pub use ini::RunConfig;
pub use loader::{
    check_results_dir, load_experiment, load_results, load_run, ExperimentResults, RunResult,
};
