//! Ratios derived from aggregated results.
//!
//! Divisions are plain `f64` divisions: a zero denominator yields `inf` or
//! `NaN`, and callers printing these values have to cope with that.

use itertools::Itertools;

use crate::{BenchmarkRun, CaseResult, SizeReport};

/// Sequential time over binary time.
pub fn time_speedup(sequential: &CaseResult, binary: &CaseResult) -> f64 {
    sequential.execution_time_ns as f64 / binary.execution_time_ns as f64
}

/// Sequential positions over binary positions.
pub fn position_efficiency(sequential: &CaseResult, binary: &CaseResult) -> f64 {
    sequential.positions_visited as f64 / binary.positions_visited as f64
}

/// Reference comparison count for bisecting `n` elements.
pub fn theoretical_log2(n: usize) -> f64 {
    (n as f64).log2()
}

/// How many times more positions sequential search visits in the worst case.
pub fn worst_case_ratio(r: &SizeReport) -> f64 {
    position_efficiency(&r.sequential_worst, &r.binary_worst)
}

/// Same-case comparison of the two schemes for one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub time_speedup_avg: f64,
    pub time_speedup_worst: f64,
    pub position_efficiency_avg: f64,
    pub position_efficiency_worst: f64,
    pub theoretical_log2: f64,
}

impl Comparison {
    pub fn of(r: &SizeReport) -> Self {
        Comparison {
            time_speedup_avg: time_speedup(&r.sequential_avg, &r.binary_avg),
            time_speedup_worst: time_speedup(&r.sequential_worst, &r.binary_worst),
            position_efficiency_avg: position_efficiency(&r.sequential_avg, &r.binary_avg),
            position_efficiency_worst: position_efficiency(&r.sequential_worst, &r.binary_worst),
            theoretical_log2: theoretical_log2(r.n),
        }
    }
}

/// Worst-case growth from one size to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    pub prev: usize,
    pub curr: usize,
    pub size: f64,
    pub seq_time: f64,
    pub bin_time: f64,
    pub seq_positions: f64,
    pub bin_positions: f64,
}

impl Growth {
    pub fn between(prev: &SizeReport, curr: &SizeReport) -> Self {
        Growth {
            prev: prev.n,
            curr: curr.n,
            size: curr.n as f64 / prev.n as f64,
            seq_time: curr.sequential_worst.execution_time_ns as f64
                / prev.sequential_worst.execution_time_ns as f64,
            bin_time: curr.binary_worst.execution_time_ns as f64
                / prev.binary_worst.execution_time_ns as f64,
            seq_positions: curr.sequential_worst.positions_visited as f64
                / prev.sequential_worst.positions_visited as f64,
            bin_positions: curr.binary_worst.positions_visited as f64
                / prev.binary_worst.positions_visited as f64,
        }
    }
}

/// Growth between each pair of adjacent reports. Empty for runs with fewer than two sizes.
pub fn growth(run: &BenchmarkRun) -> Vec<Growth> {
    run.reports()
        .iter()
        .tuple_windows()
        .map(|(prev, curr)| Growth::between(prev, curr))
        .collect()
}
