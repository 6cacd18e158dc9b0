use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use crate::Measurement;

/// Raw result of a search: where the query was found, and how many
/// elements were compared to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub index: Option<usize>,
    pub positions_visited: usize,
}

/// Whole nanoseconds in `d`, saturating at `u64::MAX`.
pub fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// A search over a sorted slice that counts the positions it visits.
pub trait SearchScheme: Sync + Send {
    fn probe(&self, vals: &[u32], q: u32) -> Probe;

    /// Time a single `probe`. The clock only brackets the search itself.
    fn measure(&self, vals: &[u32], q: u32) -> Measurement {
        let vals = black_box(vals);
        let q = black_box(q);
        let start = Instant::now();
        let probe = black_box(self.probe(vals, q));
        let elapsed = start.elapsed();
        Measurement {
            positions_visited: probe.positions_visited,
            execution_time_ns: nanos(elapsed),
        }
    }

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Both schemes, in the order they are reported.
pub const SCHEMES: [&dyn SearchScheme; 2] = [&SequentialSearch, &BinarySearch];

/// Linear scan from the front.
pub struct SequentialSearch;

impl SearchScheme for SequentialSearch {
    fn probe(&self, vals: &[u32], q: u32) -> Probe {
        let mut cnt = 0;
        for (i, &v) in vals.iter().enumerate() {
            cnt += 1;
            if v == q {
                return Probe {
                    index: Some(i),
                    positions_visited: cnt,
                };
            }
        }
        Probe {
            index: None,
            positions_visited: cnt,
        }
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// Branchy binary search on `[l, r)` that returns as soon as it hits the query.
/// `vals` must be sorted ascending.
pub struct BinarySearch;

impl SearchScheme for BinarySearch {
    fn probe(&self, vals: &[u32], q: u32) -> Probe {
        let mut l = 0;
        let mut r = vals.len();
        let mut cnt = 0;
        while l < r {
            cnt += 1;
            let m = l + (r - l) / 2;
            let v = vals[m];
            if v == q {
                return Probe {
                    index: Some(m),
                    positions_visited: cnt,
                };
            } else if v < q {
                l = m + 1;
            } else {
                r = m;
            }
        }
        Probe {
            index: None,
            positions_visited: cnt,
        }
    }

    fn name(&self) -> &'static str {
        "binary"
    }
}
