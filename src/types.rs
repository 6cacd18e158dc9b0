use serde::Serialize;

/// Outcome of a single search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Number of elements compared against the query.
    pub positions_visited: usize,
    /// Wall-clock duration of the search body, in nanoseconds.
    pub execution_time_ns: u64,
}

/// Mean over repeated trials of one (algorithm, case) pair.
/// Both fields are floored sums over the trial count.
pub type CaseResult = Measurement;

/// The four aggregated results for one fixture size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub n: usize,
    pub sequential_avg: CaseResult,
    pub sequential_worst: CaseResult,
    pub binary_avg: CaseResult,
    pub binary_worst: CaseResult,
}

/// Size reports in the order they were benchmarked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BenchmarkRun {
    reports: Vec<SizeReport>,
}

impl BenchmarkRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: SizeReport) {
        self.reports.push(report);
    }

    pub fn reports(&self) -> &[SizeReport] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl FromIterator<SizeReport> for BenchmarkRun {
    fn from_iter<T: IntoIterator<Item = SizeReport>>(iter: T) -> Self {
        BenchmarkRun {
            reports: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BenchmarkRun {
    type Item = &'a SizeReport;
    type IntoIter = std::slice::Iter<'a, SizeReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
