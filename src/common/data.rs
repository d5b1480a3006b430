//! Metric Value Types.
//!
//! This module defines the value stored for every metric pulled out of a
//! gem5 statistics dump. The textual form of the matched token decides the
//! variant, so integer counters stay exact while rates and ratios keep their
//! fractional part.

use serde::Serialize;
use std::fmt;

/// Value of a single extracted or derived metric.
///
/// Serialized untagged, so a report renders in JSON as plain numbers
/// (or the original token, for values that could not be parsed).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Integer counter.
    ///
    /// Selected when the token carries neither a decimal point nor an
    /// exponent marker (`system.cpu.numCycles  12345`).
    Int(i64),

    /// Floating-point quantity.
    ///
    /// Selected when the token contains `.`, `e` or `E`
    /// (`system.cpu.ipc  1.234`, `sim_seconds  5.1e-05`).
    Float(f64),

    /// Token that matched the line shape but did not parse as a number.
    ///
    /// Kept verbatim instead of failing the extraction.
    Raw(String),
}

impl MetricValue {
    /// Parses a numeric token.
    ///
    /// A token containing `.`, `e` or `E` parses as `f64`, anything else as
    /// `i64`; digit strings too large for `i64` become `f64`. Tokens that
    /// fail to parse come back as [`MetricValue::Raw`].
    pub fn parse(token: &str) -> Self {
        let is_float = token.contains('.') || token.contains('e') || token.contains('E');
        if is_float {
            match token.parse::<f64>() {
                Ok(v) => MetricValue::Float(v),
                Err(_) => MetricValue::Raw(token.to_string()),
            }
        } else {
            match token.parse::<i64>() {
                Ok(v) => MetricValue::Int(v),
                // Counters past i64::MAX keep their magnitude as floats.
                Err(_) if is_integer_literal(token) => match token.parse::<f64>() {
                    Ok(v) => MetricValue::Float(v),
                    Err(_) => MetricValue::Raw(token.to_string()),
                },
                Err(_) => MetricValue::Raw(token.to_string()),
            }
        }
    }

    /// Numeric view of the value. `Raw` tokens have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Int(v) => Some(*v as f64),
            MetricValue::Float(v) => Some(*v),
            MetricValue::Raw(_) => None,
        }
    }
}

fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{}", v),
            MetricValue::Raw(s) => write!(f, "{}", s),
        }
    }
}
