//! gem5 `config.ini` reader.
//!
//! gem5 records the instantiated object graph of a run as an INI file with
//! one section per SimObject (`[system.cpu]`, `[system.cpu.branchPred]`,
//! ...). Only the handful of CPU parameters the reports need are read.

use serde::Serialize;

/// CPU parameters of a single run, as recorded by gem5.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    /// SimObject type of `system.cpu` (`DerivO3CPU`, `MinorCPU`, ...).
    pub cpu_type: Option<String>,
    /// `issueWidth` of an out-of-order core.
    pub issue_width: Option<u32>,
    /// `numROBEntries` of an out-of-order core.
    pub rob_entries: Option<u32>,
    /// SimObject type of `system.cpu.branchPred`.
    pub branch_predictor: Option<String>,
}

const CPU_SECTION: &str = "system.cpu";
const BP_SECTION: &str = "system.cpu.branchPred";

impl RunConfig {
    /// Parses the relevant keys out of a `config.ini` body.
    ///
    /// Unknown sections and keys are ignored, as are numbers that fail to
    /// parse.
    pub fn parse(text: &str) -> Self {
        let mut config = RunConfig::default();
        let mut section = "";

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                section = name.trim();
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match (section, key) {
                (CPU_SECTION, "type") => config.cpu_type = Some(value.to_string()),
                (CPU_SECTION, "issueWidth") => config.issue_width = value.parse().ok(),
                (CPU_SECTION, "numROBEntries") => config.rob_entries = value.parse().ok(),
                (BP_SECTION, "type") => config.branch_predictor = Some(value.to_string()),
                _ => {}
            }
        }

        config
    }
}
