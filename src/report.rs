//! Human-readable console output.

use std::{
    io::{Result, Write},
    path::Path,
};

use log::error;

use crate::{
    export::{export_csv, export_json},
    metrics::{growth, theoretical_log2, time_speedup, worst_case_ratio},
    BenchmarkRun, CaseResult, SizeReport,
};

fn table_row(w: &mut impl Write, name: &str, avg: &CaseResult, worst: &CaseResult) -> Result<()> {
    let avg_time = format!("{}ns", avg.execution_time_ns);
    let worst_time = format!("{}ns", worst.execution_time_ns);
    writeln!(
        w,
        "{name:<20} {:>12} {:>12} {avg_time:>12} {worst_time:>12}",
        avg.positions_visited, worst.positions_visited
    )
}

/// Table of positions and times for one size, followed by the speedups.
pub fn print_size_report(w: &mut impl Write, r: &SizeReport) -> Result<()> {
    writeln!(w, "\n=== RESULTS FOR {} ELEMENTS ===\n", r.n)?;
    writeln!(
        w,
        "{:<20} {:>12} {:>12} {:>12} {:>12}",
        "", "AVG POS", "WORST POS", "AVG TIME", "WORST TIME"
    )?;
    writeln!(w, "{}", "-".repeat(72))?;
    table_row(w, "Sequential search", &r.sequential_avg, &r.sequential_worst)?;
    table_row(w, "Binary search", &r.binary_avg, &r.binary_worst)?;

    let avg = time_speedup(&r.sequential_avg, &r.binary_avg);
    let worst = time_speedup(&r.sequential_worst, &r.binary_worst);
    writeln!(w, "\nSpeedup: {avg:.1}x (avg) | {worst:.1}x (worst)")
}

/// Observed binary search cost against log2(n), then growth between sizes.
pub fn print_analysis(w: &mut impl Write, run: &BenchmarkRun) -> Result<()> {
    writeln!(w, "\n=== ANALYSIS ===")?;

    writeln!(w, "\nObserved complexity:")?;
    for r in run {
        writeln!(
            w,
            "Size {n}: log2({n}) = {:.1} | observed: {:.1} (avg), {:.1} (worst)",
            theoretical_log2(r.n),
            r.binary_avg.positions_visited as f64,
            r.binary_worst.positions_visited as f64,
            n = r.n,
        )?;
    }

    writeln!(w, "\nRelative growth:")?;
    for g in growth(run) {
        writeln!(w, "{}x -> {}x elements:", g.prev, g.curr)?;
        writeln!(
            w,
            "  Growth: {:.1}x | Seq time: {:.1}x | Bin time: {:.1}x",
            g.size, g.seq_time, g.bin_time
        )?;
        writeln!(
            w,
            "  Seq positions: {:.1}x | Bin positions: {:.1}x",
            g.seq_positions, g.bin_positions
        )?;
    }
    Ok(())
}

/// Complexity classes and per-size worst-case position ratio.
pub fn print_final_summary(w: &mut impl Write, run: &BenchmarkRun) -> Result<()> {
    writeln!(w, "\n=== SUMMARY ===")?;
    writeln!(w, "Complexity: Sequential O(n) | Binary O(log n)")?;
    for r in run {
        writeln!(
            w,
            "{:>6} elements: binary {:.1}x more efficient",
            r.n,
            worst_case_ratio(r)
        )?;
    }
    Ok(())
}

/// Export the results, then print the analysis and summary.
/// A failed export is reported and does not stop the remaining output.
pub fn finish(
    w: &mut impl Write,
    run: &BenchmarkRun,
    csv: &Path,
    json: Option<&Path>,
) -> Result<()> {
    let mut written = vec![];
    match export_csv(run, csv) {
        Ok(()) => {
            writeln!(w, "\nExported results to {}", csv.display())?;
            written.push(csv);
        }
        Err(e) => {
            error!("{e}");
            writeln!(w, "\nFailed to export CSV: {e}")?;
        }
    }
    if let Some(path) = json {
        match export_json(run, path) {
            Ok(()) => written.push(path),
            Err(e) => {
                error!("{e}");
                writeln!(w, "Failed to export JSON: {e}")?;
            }
        }
    }

    print_analysis(w, run)?;
    print_final_summary(w, run)?;

    if !written.is_empty() {
        writeln!(w, "\nFiles written:")?;
        for path in written {
            writeln!(w, "  {}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn report(n: usize, seq_worst: usize, bin_worst: usize) -> SizeReport {
        let case = |positions_visited, execution_time_ns| CaseResult {
            positions_visited,
            execution_time_ns,
        };
        SizeReport {
            n,
            sequential_avg: case(n / 2, 1000),
            sequential_worst: case(seq_worst, 2000),
            binary_avg: case(9, 100),
            binary_worst: case(bin_worst, 0),
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = vec![];
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn size_table() {
        let s = render(|w| print_size_report(w, &report(1000, 1000, 10)));
        assert!(s.contains("=== RESULTS FOR 1000 ELEMENTS ==="));
        assert!(s.contains("Sequential search"));
        assert!(s.contains("1000ns"));
        // Zero worst-case time shows up as an infinite speedup.
        assert!(s.contains("Speedup: 10.0x (avg) | infx (worst)"));
    }

    #[test]
    fn analysis_without_growth_for_single_size() {
        let run: BenchmarkRun = [report(1000, 1000, 10)].into_iter().collect();
        let s = render(|w| print_analysis(w, &run));
        assert!(s.contains("Size 1000: log2(1000) = 10.0 | observed: 9.0 (avg), 10.0 (worst)"));
        assert!(!s.contains("elements:"));
    }

    #[test]
    fn analysis_and_summary_for_two_sizes() {
        let run: BenchmarkRun = [report(1000, 1000, 10), report(10_000, 10_000, 14)]
            .into_iter()
            .collect();
        let s = render(|w| print_analysis(w, &run));
        assert!(s.contains("1000x -> 10000x elements:"));
        assert!(s.contains("Seq positions: 10.0x | Bin positions: 1.4x"));

        let s = render(|w| print_final_summary(w, &run));
        assert!(s.contains("  1000 elements: binary 100.0x more efficient"));
        assert!(s.contains(" 10000 elements: binary 714.3x more efficient"));
    }

    #[test]
    fn failed_export_still_prints_summary() {
        let run: BenchmarkRun = [report(1000, 1000, 10), report(10_000, 10_000, 14)]
            .into_iter()
            .collect();
        let csv = Path::new("/nonexistent-dir/for/sure/results.csv");
        let json = Path::new("/nonexistent-dir/for/sure/results.json");
        let s = render(|w| finish(w, &run, csv, Some(json)));
        assert!(s.contains("Failed to export CSV: could not write /nonexistent-dir/for/sure/results.csv"));
        assert!(s.contains("Failed to export JSON"));
        assert!(s.contains("=== ANALYSIS ==="));
        assert!(s.contains("1000x -> 10000x elements:"));
        assert!(s.contains("=== SUMMARY ==="));
        assert!(s.contains("  1000 elements: binary 100.0x more efficient"));
        assert!(!s.contains("Files written:"));
    }

    #[test]
    fn successful_export_lists_files() {
        let run: BenchmarkRun = [report(1000, 1000, 10)].into_iter().collect();
        let csv = std::env::temp_dir().join(format!("search-bench-{}.csv", std::process::id()));
        let s = render(|w| finish(w, &run, &csv, None));
        let written = std::fs::read_to_string(&csv).unwrap();
        std::fs::remove_file(&csv).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(s.contains("Exported results to"));
        assert!(s.contains("Files written:"));
        assert!(s.contains("=== SUMMARY ==="));
    }
}
