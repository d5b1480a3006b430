//! Metric catalog.
//!
//! Declarative table of every statistic pulled out of a gem5 `stats.txt`.
//! Each entry names the metric, the exact gem5 field it comes from and the
//! shape of the numeric token expected after it. The scanner in
//! [`crate::stats`] evaluates this table; nothing here knows how lines are
//! split.

/// Shape of the numeric token that must follow a field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Run of decimal digits (`12345`).
    Integer,
    /// Digits with optional sign, decimal point and exponent (`1.5e-03`).
    Real,
}

impl Shape {
    /// Returns the leading part of `field` that fits this shape, if any.
    pub fn leading_token<'a>(&self, field: &'a str) -> Option<&'a str> {
        let end = match self {
            Shape::Integer => field
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(field.len()),
            Shape::Real => field
                .find(|c: char| !matches!(c, '0'..='9' | '.' | 'e' | 'E' | '+' | '-'))
                .unwrap_or(field.len()),
        };
        if end == 0 {
            None
        } else {
            Some(&field[..end])
        }
    }
}

/// One catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct MetricDef {
    /// Key under which the value is stored in a report.
    pub name: &'static str,
    /// gem5 statistic name, matched against the first field of a line.
    pub field: &'static str,
    /// Expected token shape.
    pub shape: Shape,
}

const fn def(name: &'static str, field: &'static str, shape: Shape) -> MetricDef {
    MetricDef { name, field, shape }
}

pub const SIM_SECONDS: &str = "sim_seconds";
pub const SIM_INSTS: &str = "sim_insts";
pub const COMMITTED_INSTS: &str = "committedInsts";
pub const NUM_CYCLES: &str = "numCycles";
pub const IPC: &str = "ipc";
pub const BRANCH_LOOKUPS: &str = "branch_lookups";
pub const BRANCH_COND_PREDICTED: &str = "branch_condPredicted";
pub const BRANCH_COND_INCORRECT: &str = "branch_condIncorrect";
pub const FETCH_RATE: &str = "fetch_rate";
pub const DECODE_RATE: &str = "decode_rate";
pub const COMMIT_RATE: &str = "commit_rate";

/// Every primary metric, in gem5 dump order.
pub const CATALOG: &[MetricDef] = &[
    def(SIM_SECONDS, "sim_seconds", Shape::Real),
    def(SIM_INSTS, "sim_insts", Shape::Integer),
    def("host_inst_rate", "host_inst_rate", Shape::Real),
    def(COMMITTED_INSTS, "system.cpu.committedInsts", Shape::Integer),
    def(NUM_CYCLES, "system.cpu.numCycles", Shape::Integer),
    def(IPC, "system.cpu.ipc", Shape::Real),
    // Branch predictor
    def(BRANCH_LOOKUPS, "system.cpu.branchPred.lookups", Shape::Integer),
    def(
        BRANCH_COND_PREDICTED,
        "system.cpu.branchPred.condPredicted",
        Shape::Integer,
    ),
    def(
        BRANCH_COND_INCORRECT,
        "system.cpu.branchPred.condIncorrect",
        Shape::Integer,
    ),
    // Caches
    def(
        "icache_overall_hits",
        "system.cpu.icache.overall_hits::total",
        Shape::Integer,
    ),
    def(
        "icache_overall_misses",
        "system.cpu.icache.overall_misses::total",
        Shape::Integer,
    ),
    def(
        "dcache_overall_hits",
        "system.cpu.dcache.overall_hits::total",
        Shape::Integer,
    ),
    def(
        "dcache_overall_misses",
        "system.cpu.dcache.overall_misses::total",
        Shape::Integer,
    ),
    def(
        "l2cache_overall_hits",
        "system.l2cache.overall_hits::total",
        Shape::Integer,
    ),
    def(
        "l2cache_overall_misses",
        "system.l2cache.overall_misses::total",
        Shape::Integer,
    ),
    // O3 stage rates
    def(FETCH_RATE, "system.cpu.fetch.rate", Shape::Real),
    def(DECODE_RATE, "system.cpu.decode.rate", Shape::Real),
    def("rename_rate", "system.cpu.rename.rate", Shape::Real),
    def("iew_rate", "system.cpu.iew.rate", Shape::Real),
    def(COMMIT_RATE, "system.cpu.commit.rate", Shape::Real),
    // ROB and issue queue
    def("rob_reads", "system.cpu.rob.reads", Shape::Integer),
    def("rob_writes", "system.cpu.rob.writes", Shape::Integer),
    def("iq_reads", "system.cpu.iq.reads", Shape::Integer),
    def("iq_writes", "system.cpu.iq.writes", Shape::Integer),
];
