//! gem5 statistics extraction.
//!
//! Turns the text of one `stats.txt` dump into a [`MetricReport`]: a map
//! from metric name to value for every catalog entry that matched, plus the
//! ratios derived from them.
//!
//! Lines are split once into `(field, value)` pairs; each catalog entry then
//! takes the first pair whose field equals its gem5 name and whose value
//! starts with a token of the expected shape. gem5 may append several dump
//! blocks to the same file, so the first block wins.

/// Declarative table of extracted metrics.
pub mod catalog;

/// Branch accuracy and cache hit-rate computation.
pub mod derived;

use crate::common::{AnalysisError, MetricValue, Result};
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

pub use catalog::{MetricDef, Shape, CATALOG};
pub use derived::{CacheTier, BRANCH_ACCURACY, CACHE_TIERS};

/// Metrics extracted from a single simulation run.
///
/// Only matched metrics are present. A report is built once by [`extract`]
/// and not modified afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricReport {
    metrics: BTreeMap<&'static str, MetricValue>,
}

impl MetricReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.get(name)
    }

    /// Numeric value of a metric; `None` when absent or unparsed.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(MetricValue::as_f64)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub(crate) fn insert(&mut self, name: &'static str, value: MetricValue) {
        self.metrics.insert(name, value);
    }
}

impl FromIterator<(&'static str, MetricValue)> for MetricReport {
    /// Builds a report from primary metrics and derives the ratios.
    fn from_iter<I: IntoIterator<Item = (&'static str, MetricValue)>>(iter: I) -> Self {
        let mut report = MetricReport {
            metrics: iter.into_iter().collect(),
        };
        derived::apply(&mut report);
        report
    }
}

/// Extracts every catalog metric from the text of a `stats.txt` dump.
///
/// Never fails: unmatched metrics are omitted and unparseable tokens are
/// kept as [`MetricValue::Raw`].
pub fn extract(text: &str) -> MetricReport {
    let lines: Vec<(&str, &str)> = text
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            Some((fields.next()?, fields.next()?))
        })
        .collect();

    let mut report = MetricReport::new();
    for def in CATALOG {
        let token = lines
            .iter()
            .filter(|(field, _)| *field == def.field)
            .find_map(|(_, value)| def.shape.leading_token(value));
        if let Some(token) = token {
            report.insert(def.name, MetricValue::parse(token));
        }
    }

    derived::apply(&mut report);
    report
}

/// Reads and extracts a `stats.txt` file.
///
/// A missing file is logged and yields an empty report so one failed run
/// does not abort the whole analysis. Other read errors are returned.
pub fn extract_file(path: &Path) -> Result<MetricReport> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let report = extract(&text);
            debug!("{}: {} metrics", path.display(), report.len());
            Ok(report)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Stats file not found: {}", path.display());
            Ok(MetricReport::new())
        }
        Err(e) => Err(AnalysisError::io(path, e)),
    }
}
