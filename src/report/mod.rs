//! Comparison reports.
//!
//! Everything downstream of extraction: the comparison table and its
//! aggregates, the per-experiment sections, and the renderers. Number
//! formatting happens only in the renderers, under one [`FormatPolicy`].

/// IPC bar chart.
pub mod chart;

/// Console rendering.
pub mod console;

/// CSV and JSON exports.
pub mod export;

/// HTML rendering.
pub mod html;

/// Branch prediction and superscalar sections.
pub mod sections;

/// Comparison rows, grouping and means.
pub mod table;

use crate::config::FormatPolicy;
use crate::sim::ExperimentResults;

pub use console::ConsoleReport;
pub use html::HtmlReport;
pub use table::{Column, ComparisonRow, ComparisonTable, GroupBy, GroupMean};

/// Inputs shared by all renderers.
pub struct Report<'a> {
    pub experiments: &'a [ExperimentResults],
    pub table: &'a ComparisonTable,
    pub policy: FormatPolicy,
}

impl<'a> Report<'a> {
    pub fn new(
        experiments: &'a [ExperimentResults],
        table: &'a ComparisonTable,
        policy: FormatPolicy,
    ) -> Self {
        Self {
            experiments,
            table,
            policy,
        }
    }
}
