//! Integration tests for derived metrics.

use ilp_analyzer::common::MetricValue;
use ilp_analyzer::stats::derived::{branch_accuracy, hit_rate, DCACHE, ICACHE, L2CACHE};
use ilp_analyzer::stats::{extract, MetricReport};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Tests branch accuracy from predicted and incorrect counts.
#[test]
fn test_branch_accuracy() {
    let report = extract(
        "system.cpu.branchPred.condPredicted 100\n\
         system.cpu.branchPred.condIncorrect 13\n",
    );
    let acc = report.get_f64("branch_accuracy").unwrap();
    assert!(approx(acc, 0.87));
}

/// Tests that zero predictions give zero accuracy.
#[test]
fn test_branch_accuracy_zero_predicted() {
    for incorrect in [0, 5, 1000] {
        let text = format!(
            "system.cpu.branchPred.condPredicted 0\nsystem.cpu.branchPred.condIncorrect {}\n",
            incorrect
        );
        let report = extract(&text);
        assert_eq!(report.get("branch_accuracy"), Some(&MetricValue::Float(0.0)));
    }
}

/// Tests that accuracy needs both counters.
#[test]
fn test_branch_accuracy_missing_input() {
    let report = extract("system.cpu.branchPred.condPredicted 100\n");
    assert!(!report.contains("branch_accuracy"));
    assert_eq!(branch_accuracy(&report), None);
}

/// Tests a cache hit rate of 80 hits and 20 misses.
#[test]
fn test_hit_rate() {
    let report = extract(
        "system.l2cache.overall_hits::total 80\n\
         system.l2cache.overall_misses::total 20\n",
    );
    assert!(approx(report.get_f64("l2cache_hit_rate").unwrap(), 0.8));
    assert!(approx(hit_rate(&report, &L2CACHE).unwrap(), 0.8));
}

/// Tests that a tier with no accesses has a zero hit rate.
#[test]
fn test_hit_rate_no_accesses() {
    let report = extract(
        "system.cpu.dcache.overall_hits::total 0\n\
         system.cpu.dcache.overall_misses::total 0\n",
    );
    assert_eq!(report.get("dcache_hit_rate"), Some(&MetricValue::Float(0.0)));
}

/// Tests that a tier missing both counters has no hit rate.
#[test]
fn test_hit_rate_absent_tier() {
    let report = extract(
        "system.cpu.dcache.overall_hits::total 10\n\
         system.cpu.dcache.overall_misses::total 10\n",
    );
    assert!(!report.contains("icache_hit_rate"));
    assert!(!report.contains("l2cache_hit_rate"));
    assert!(approx(report.get_f64("dcache_hit_rate").unwrap(), 0.5));
}

/// Tests that a tier missing one counter has no hit rate.
#[test]
fn test_hit_rate_half_present() {
    let report = extract("system.cpu.icache.overall_hits::total 10\n");
    assert_eq!(hit_rate(&report, &ICACHE), None);
    assert!(!report.contains("icache_hit_rate"));
}

/// Tests that raw tokens do not feed derived metrics.
#[test]
fn test_raw_inputs_are_ignored() {
    let report: MetricReport = [
        ("dcache_overall_hits", MetricValue::Raw("1.2.3".to_string())),
        ("dcache_overall_misses", MetricValue::Int(4)),
    ]
    .into_iter()
    .collect();
    assert_eq!(hit_rate(&report, &DCACHE), None);
    assert!(!report.contains("dcache_hit_rate"));
}

/// Tests that each tier is computed independently of the others.
#[test]
fn test_tiers_independent() {
    let all = extract(
        "system.cpu.icache.overall_hits::total 3\n\
         system.cpu.icache.overall_misses::total 1\n\
         system.cpu.dcache.overall_hits::total 1\n\
         system.cpu.dcache.overall_misses::total 1\n",
    );
    let only_icache = extract(
        "system.cpu.icache.overall_hits::total 3\n\
         system.cpu.icache.overall_misses::total 1\n",
    );
    assert_eq!(all.get("icache_hit_rate"), only_icache.get("icache_hit_rate"));
    assert!(approx(all.get_f64("icache_hit_rate").unwrap(), 0.75));
}

/// Tests that building a report from primary metrics derives the ratios.
#[test]
fn test_from_iter_derives() {
    let report: MetricReport = [
        ("branch_condPredicted", MetricValue::Int(200)),
        ("branch_condIncorrect", MetricValue::Int(50)),
    ]
    .into_iter()
    .collect();
    assert!(approx(report.get_f64("branch_accuracy").unwrap(), 0.75));
}
