//! Common types shared by the extractor, loader and report renderers.
//!
//! This module provides the metric value representation and the crate
//! error type.

/// Metric value definitions.
pub mod data;

/// Error types and the crate `Result` alias.
pub mod error;

pub use data::MetricValue;
pub use error::{AnalysisError, Result};
