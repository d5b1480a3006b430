//! Analysis driver.
//!
//! Runs the whole pipeline for one results root: load every run, build the
//! comparison table, print the console report and write the requested
//! output files.

use crate::common::{AnalysisError, Result};
use crate::config::AnalysisConfig;
use crate::report::{chart, export, ComparisonTable, ConsoleReport, HtmlReport, Report};
use crate::sim::{self, ExperimentResults};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Output format selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Console,
    Html,
    Pdf,
}

/// Everything one analysis run needs.
#[derive(Debug, Clone)]
pub struct Options {
    pub results_dir: PathBuf,
    pub output_format: OutputFormat,
    pub config: AnalysisConfig,
}

/// Results of a completed analysis run.
#[derive(Debug)]
pub struct Outcome {
    pub experiments: Vec<ExperimentResults>,
    pub table: ComparisonTable,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Runs the analysis and returns the process exit code.
///
/// Errors are printed to stderr; a missing results root is reported before
/// anything is read, and callers loading a configuration file should run
/// [`sim::check_results_dir`] first.
pub fn execute(options: &Options) -> i32 {
    match run(options) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("[!] Error: {}", e);
            1
        }
    }
}

/// Runs the analysis.
pub fn run(options: &Options) -> Result<Outcome> {
    let root = &options.results_dir;
    sim::check_results_dir(root)?;

    let config = &options.config;
    let experiments = sim::load_results(root, &config.input)?;
    let table = ComparisonTable::from_results(&experiments);
    let report = Report::new(&experiments, &table, config.format);
    info!(
        "[*] {} experiments, {} runs",
        experiments.len(),
        table.len()
    );

    print!("{}", ConsoleReport(&report));

    let mut written = Vec::new();
    if table.is_empty() {
        return Ok(Outcome {
            experiments,
            table,
            written,
        });
    }

    let csv_path = root.join(&config.output.csv_file);
    export::to_file(&csv_path, |f| export::write_csv(&report, f))?;
    println!("\nDetailed results saved to: {}", csv_path.display());
    written.push(csv_path);

    if config.output.write_chart {
        let chart_path = root.join(&config.output.chart_file);
        chart::render_ipc_chart(&table, &chart_path)?;
        println!("IPC comparison plot saved to: {}", chart_path.display());
        written.push(chart_path);
    }

    if config.output.write_json {
        let json_path = root.join(&config.output.json_file);
        export::to_file(&json_path, |f| export::write_json(&report, f))?;
        println!("Summary saved to: {}", json_path.display());
        written.push(json_path);
    }

    match options.output_format {
        OutputFormat::Console => {}
        OutputFormat::Html | OutputFormat::Pdf => {
            if options.output_format == OutputFormat::Pdf {
                warn!("PDF rendering is not built in; writing the HTML report for external conversion");
            }
            let chart_name = config
                .output
                .write_chart
                .then_some(config.output.chart_file.as_str());
            let html_path = root.join(&config.output.html_file);
            write_html(&report, chart_name, &html_path)?;
            println!("HTML report saved to: {}", html_path.display());
            written.push(html_path);
        }
    }

    println!("\nAnalysis complete! Check the results directory for detailed outputs.");
    Ok(Outcome {
        experiments,
        table,
        written,
    })
}

fn write_html(report: &Report<'_>, chart: Option<&str>, path: &Path) -> Result<()> {
    let page = HtmlReport { report, chart };
    fs::write(path, page.to_string()).map_err(|e| AnalysisError::io(path, e))
}
