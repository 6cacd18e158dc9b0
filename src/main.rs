use std::{io::stdout, path::PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use search_bench::{
    export::{self, DEFAULT_CSV_PATH},
    report, runner,
    util::{init_trace, time},
};

#[derive(Parser)]
struct Args {
    /// Seed for picking the average-case targets.
    #[clap(long)]
    seed: Option<u64>,

    /// Where to write the CSV results.
    #[clap(short, long, default_value = DEFAULT_CSV_PATH)]
    output: PathBuf,

    /// Also write the results as JSON.
    #[clap(long)]
    json: Option<PathBuf>,

    #[clap(short, default_value_t = 0, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_trace(args.verbose);

    let rng = &mut match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let out = &mut stdout();

    println!("BENCHMARK: sequential search vs binary search");
    println!("{} iterations per scenario\n", runner::REPETITIONS);

    let mut report_err = Ok(());
    let run = time("benchmark", || {
        runner::run(&runner::SIZES, rng, |r| {
            if report_err.is_ok() {
                report_err = report::print_size_report(out, r);
            }
        })
    });
    report_err?;

    report::finish(out, &run, &args.output, args.json.as_deref())?;
    Ok(())
}
