use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;
use log::info;

use crate::{
    error::{ExportError, Result},
    metrics::Comparison,
    BenchmarkRun, SizeReport,
};

pub const DEFAULT_CSV_PATH: &str = "benchmark_results.csv";

pub const CSV_HEADER: [&str; 14] = [
    "Size",
    "Seq_Avg_Time_ns",
    "Seq_Worst_Time_ns",
    "Bin_Avg_Time_ns",
    "Bin_Worst_Time_ns",
    "Seq_Avg_Positions",
    "Seq_Worst_Positions",
    "Bin_Avg_Positions",
    "Bin_Worst_Positions",
    "Time_Speedup_Avg",
    "Time_Speedup_Worst",
    "Position_Efficiency_Avg",
    "Position_Efficiency_Worst",
    "Theoretical_Log2",
];

/// One CSV row: raw integers first, then the derived ratios with two decimals.
fn csv_row(r: &SizeReport) -> String {
    let c = Comparison::of(r);
    let ints = [
        r.n as u64,
        r.sequential_avg.execution_time_ns,
        r.sequential_worst.execution_time_ns,
        r.binary_avg.execution_time_ns,
        r.binary_worst.execution_time_ns,
        r.sequential_avg.positions_visited as u64,
        r.sequential_worst.positions_visited as u64,
        r.binary_avg.positions_visited as u64,
        r.binary_worst.positions_visited as u64,
    ];
    let floats = [
        c.time_speedup_avg,
        c.time_speedup_worst,
        c.position_efficiency_avg,
        c.position_efficiency_worst,
        c.theoretical_log2,
    ];
    ints.iter()
        .map(|x| x.to_string())
        .chain(floats.iter().map(|x| format!("{x:.2}")))
        .join(",")
}

/// Write the header and one row per size, in run order.
pub fn write_csv(run: &BenchmarkRun, w: &mut impl Write) -> std::io::Result<()> {
    writeln!(w, "{}", CSV_HEADER.join(","))?;
    for r in run {
        writeln!(w, "{}", csv_row(r))?;
    }
    w.flush()
}

pub fn export_csv(run: &BenchmarkRun, path: &Path) -> Result<()> {
    let io = |source| ExportError::Io {
        path: path.to_owned(),
        source,
    };
    let f = File::create(path).map_err(io)?;
    write_csv(run, &mut BufWriter::new(f)).map_err(io)?;
    info!("Exported {} rows to {}", run.len(), path.display());
    Ok(())
}

pub fn export_json(run: &BenchmarkRun, path: &Path) -> Result<()> {
    let io = |source| ExportError::Io {
        path: path.to_owned(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io)?);
    serde_json::to_writer_pretty(&mut w, run)?;
    w.flush().map_err(io)?;
    info!("Saved results to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::CaseResult;

    fn report() -> SizeReport {
        let case = |positions_visited, execution_time_ns| CaseResult {
            positions_visited,
            execution_time_ns,
        };
        SizeReport {
            n: 8,
            sequential_avg: case(5, 30),
            sequential_worst: case(8, 45),
            binary_avg: case(1, 20),
            binary_worst: case(4, 0),
        }
    }

    #[test]
    fn row_format() {
        let run: BenchmarkRun = [report()].into_iter().collect();
        let mut out = vec![];
        write_csv(&run, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect_vec();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(',').count(), 14);
        assert_eq!(lines[1], "8,30,45,20,0,5,8,1,4,1.50,inf,5.00,2.00,3.00");
    }

    #[test]
    fn unwritable_path_is_reported() {
        let run = BenchmarkRun::new();
        let path = Path::new("/nonexistent-dir/for/sure/results.csv");
        match export_csv(&run, path) {
            Err(ExportError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn unwritable_json_path_is_reported() {
        let path = Path::new("/nonexistent-dir/for/sure/results.json");
        match export_json(&BenchmarkRun::new(), path) {
            Err(ExportError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let mut run = BenchmarkRun::new();
        run.push(SizeReport { n: 16, ..report() });
        run.push(report());
        let path = std::env::temp_dir().join(format!("search-bench-{}.json", std::process::id()));
        export_json(&run, &path).unwrap();
        let v: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        let ns = v
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["n"].as_u64().unwrap())
            .collect_vec();
        assert_eq!(ns, vec![16, 8]);
        assert_eq!(v[1]["binary_worst"]["positions_visited"], 4);
    }
}
