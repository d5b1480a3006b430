//! gem5 ILP Experiment Analyzer CLI.
//!
//! Reads every run under a results directory, prints a comparison report
//! and writes CSV, JSON, SVG and (optionally) HTML outputs next to the
//! results.
//!
//! # Usage
//!
//! ```text
//! ilp-analyze <results_dir> [--output-format console|html|pdf] [--config analysis.toml]
//! ```
//!
//! Set `RUST_LOG=info` to see discovery progress.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use ilp_analyzer::analysis::{self, OutputFormat};
use ilp_analyzer::config::AnalysisConfig;
use ilp_analyzer::sim;

/// Command-line arguments for the analyzer.
#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze gem5 ILP experiment results")]
struct Args {
    /// Base directory containing experiment results
    results_dir: PathBuf,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    output_format: OutputFormat,

    /// Analysis configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Err(e) = sim::check_results_dir(&args.results_dir) {
        eprintln!("[!] Error: {}", e);
        process::exit(1);
    }

    let config = match &args.config {
        Some(path) => AnalysisConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("[!] Error: {}", e);
            process::exit(1);
        }),
        None => AnalysisConfig::default(),
    };

    let options = analysis::Options {
        results_dir: args.results_dir,
        output_format: args.output_format,
        config,
    };

    process::exit(analysis::execute(&options));
}
