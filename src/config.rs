use crate::common::{AnalysisError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const STATS_FILE: &str = "stats.txt";
const CONFIG_FILE: &str = "config.ini";

const CSV_FILE: &str = "performance_comparison.csv";
const CHART_FILE: &str = "ipc_comparison.svg";
const HTML_FILE: &str = "performance_report.html";
const JSON_FILE: &str = "summary.json";

const CONSOLE_DECIMALS: usize = 4;
const CSV_DECIMALS: usize = 6;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub format: FormatPolicy,
}

impl AnalysisConfig {
    /// Loads a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// Experiment directories looked up under the results root, in report order.
    #[serde(default = "default_experiments")]
    pub experiments: Vec<String>,

    #[serde(default = "default_stats_file")]
    pub stats_file: String,

    #[serde(default = "default_config_file")]
    pub config_file: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            experiments: default_experiments(),
            stats_file: default_stats_file(),
            config_file: default_config_file(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    #[serde(default = "default_chart_file")]
    pub chart_file: String,

    #[serde(default = "default_html_file")]
    pub html_file: String,

    #[serde(default = "default_json_file")]
    pub json_file: String,

    #[serde(default = "default_true")]
    pub write_chart: bool,

    #[serde(default = "default_true")]
    pub write_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_file: default_csv_file(),
            chart_file: default_chart_file(),
            html_file: default_html_file(),
            json_file: default_json_file(),
            write_chart: true,
            write_json: true,
        }
    }
}

/// Number formatting applied by the renderers, and only there.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FormatPolicy {
    #[serde(default = "default_console_decimals")]
    pub console_decimals: usize,

    #[serde(default = "default_csv_decimals")]
    pub csv_decimals: usize,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            console_decimals: CONSOLE_DECIMALS,
            csv_decimals: CSV_DECIMALS,
        }
    }
}

impl FormatPolicy {
    /// Formats a value for the console and HTML report.
    pub fn display(&self, value: f64) -> String {
        format!("{:.*}", self.console_decimals, value)
    }

    /// Formats a value for the CSV export.
    pub fn csv(&self, value: f64) -> String {
        format!("{:.*}", self.csv_decimals, value)
    }

    /// Formats a ratio as a percentage with one decimal less than `display`.
    pub fn percent(&self, ratio: f64) -> String {
        format!(
            "{:.*}%",
            self.console_decimals.saturating_sub(1),
            ratio * 100.0
        )
    }
}

fn default_experiments() -> Vec<String> {
    ["basic_pipeline", "branch_prediction", "superscalar", "smt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_stats_file() -> String {
    STATS_FILE.to_string()
}

fn default_config_file() -> String {
    CONFIG_FILE.to_string()
}

fn default_csv_file() -> String {
    CSV_FILE.to_string()
}

fn default_chart_file() -> String {
    CHART_FILE.to_string()
}

fn default_html_file() -> String {
    HTML_FILE.to_string()
}

fn default_json_file() -> String {
    JSON_FILE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_console_decimals() -> usize {
    CONSOLE_DECIMALS
}

fn default_csv_decimals() -> usize {
    CSV_DECIMALS
}
