use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::{
    search::SCHEMES, BenchmarkRun, CaseResult, Measurement, SearchScheme, SizeReport,
};

/// Fixture sizes benchmarked by a full run, smallest first.
pub const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
/// Trials per (algorithm, case) pair. No warm-up trials are discarded.
pub const REPETITIONS: usize = 1000;
/// The worst-case query is this far past the largest fixture value.
pub const WORST_CASE_OFFSET: u32 = 1000;

/// The dense sorted fixture `1..=n`.
pub fn fixture(n: usize) -> Vec<u32> {
    (1..=n as u32).collect()
}

/// Queries used for one fixture size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    /// A value present in the fixture, drawn once per size.
    pub average: u32,
    /// A value larger than every element of the fixture.
    pub worst: u32,
}

impl Targets {
    pub fn pick(vals: &[u32], rng: &mut impl Rng) -> Self {
        assert!(!vals.is_empty(), "fixture must be non-empty");
        let average = vals[rng.gen_range(0..vals.len())];
        let worst = vals.len() as u32 + WORST_CASE_OFFSET;
        Targets { average, worst }
    }
}

/// Fold a sequence of trials into their floored mean.
pub fn aggregate(trials: impl IntoIterator<Item = Measurement>) -> CaseResult {
    let (count, positions, time) = trials
        .into_iter()
        .fold((0usize, 0usize, 0u64), |(c, p, t), m| {
            (c + 1, p + m.positions_visited, t + m.execution_time_ns)
        });
    if count == 0 {
        return CaseResult::default();
    }
    CaseResult {
        positions_visited: positions / count,
        execution_time_ns: time / count as u64,
    }
}

/// Run `REPETITIONS` sequential trials of `scheme` for query `q`.
pub fn bench_case(scheme: &dyn SearchScheme, vals: &[u32], q: u32) -> CaseResult {
    debug!("Benching {} for q = {q}", scheme.name());
    aggregate((0..REPETITIONS).map(|_| scheme.measure(vals, q)))
}

/// Benchmark both schemes on both cases for a fixture of size `n`.
pub fn run_size(n: usize, rng: &mut impl Rng) -> SizeReport {
    let start = Instant::now();
    let vals = fixture(n);
    let targets = Targets::pick(&vals, rng);

    let sz = size::Size::from_bytes(std::mem::size_of_val(vals.as_slice()));
    info!("Testing {n} elements ({sz}), targets {targets:?}");

    let [sequential, binary] = SCHEMES;
    let sequential_avg = bench_case(sequential, &vals, targets.average);
    let sequential_worst = bench_case(sequential, &vals, targets.worst);
    let binary_avg = bench_case(binary, &vals, targets.average);
    let binary_worst = bench_case(binary, &vals, targets.worst);

    debug!("Size {n} took {:.2?}", start.elapsed());
    SizeReport {
        n,
        sequential_avg,
        sequential_worst,
        binary_avg,
        binary_worst,
    }
}

/// Benchmark each size in order, calling `on_report` after each one completes.
pub fn run(
    sizes: &[usize],
    rng: &mut impl Rng,
    mut on_report: impl FnMut(&SizeReport),
) -> BenchmarkRun {
    let mut results = BenchmarkRun::new();
    for &n in sizes {
        let report = run_size(n, rng);
        on_report(&report);
        results.push(report);
    }
    results
}
