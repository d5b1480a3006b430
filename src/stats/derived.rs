//! Derived metrics.
//!
//! Ratios computed from primary metrics already present in a report:
//! conditional branch accuracy and per-tier cache hit rates. Inputs stored
//! as unparsed text count as missing, and every ratio is `0` when its
//! denominator is zero.

use super::catalog::{BRANCH_COND_INCORRECT, BRANCH_COND_PREDICTED};
use super::MetricReport;
use crate::common::MetricValue;

pub const BRANCH_ACCURACY: &str = "branch_accuracy";

/// Cache level whose hit rate is derived from overall hits and misses.
#[derive(Clone, Copy, Debug)]
pub struct CacheTier {
    pub hits: &'static str,
    pub misses: &'static str,
    pub hit_rate: &'static str,
}

pub const ICACHE: CacheTier = CacheTier {
    hits: "icache_overall_hits",
    misses: "icache_overall_misses",
    hit_rate: "icache_hit_rate",
};

pub const DCACHE: CacheTier = CacheTier {
    hits: "dcache_overall_hits",
    misses: "dcache_overall_misses",
    hit_rate: "dcache_hit_rate",
};

pub const L2CACHE: CacheTier = CacheTier {
    hits: "l2cache_overall_hits",
    misses: "l2cache_overall_misses",
    hit_rate: "l2cache_hit_rate",
};

pub const CACHE_TIERS: [CacheTier; 3] = [ICACHE, DCACHE, L2CACHE];

/// `1 - condIncorrect / condPredicted`.
///
/// `None` unless both counters are present; `0` when nothing was predicted.
pub fn branch_accuracy(report: &MetricReport) -> Option<f64> {
    let predicted = report.get_f64(BRANCH_COND_PREDICTED)?;
    let incorrect = report.get_f64(BRANCH_COND_INCORRECT)?;
    if predicted > 0.0 {
        Some(1.0 - incorrect / predicted)
    } else {
        Some(0.0)
    }
}

/// `hits / (hits + misses)` for one tier.
///
/// `None` unless both counters are present; `0` when there were no accesses.
pub fn hit_rate(report: &MetricReport, tier: &CacheTier) -> Option<f64> {
    let hits = report.get_f64(tier.hits)?;
    let misses = report.get_f64(tier.misses)?;
    let total = hits + misses;
    if total > 0.0 {
        Some(hits / total)
    } else {
        Some(0.0)
    }
}

/// Merges every derivable ratio into the report.
pub(crate) fn apply(report: &mut MetricReport) {
    if let Some(acc) = branch_accuracy(report) {
        report.insert(BRANCH_ACCURACY, MetricValue::Float(acc));
    }
    for tier in &CACHE_TIERS {
        if let Some(rate) = hit_rate(report, tier) {
            report.insert(tier.hit_rate, MetricValue::Float(rate));
        }
    }
}
