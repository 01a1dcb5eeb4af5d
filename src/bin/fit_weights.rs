//! Fits per-round evaluation weights and prints them as initializer-list
//! lines for the engine's weight table.
//!
//! Examples:
//! - Reference run (rounds 16..=30 from ./data):
//!   `cargo run --bin fit_weights --release`
//!
//! - Custom range and step size, with a JSON report:
//!   `cargo run --bin fit_weights --release -- --rounds 16 30 --learning-rate 0.001 --out-json report.json`

use std::fs;
use std::path::PathBuf;
use std::process;

use evalfit::output::{format_weights, RunReport};
use evalfit::training::{
    SgdParams, SgdTrainer, SquaredLoss, Verbosity, DEFAULT_LEARNING_RATE, DEFAULT_ROUNDS,
};

#[derive(Debug)]
struct Args {
    data_dir: PathBuf,
    first_round: u32,
    last_round: u32,
    learning_rate: f64,
    out_json: Option<PathBuf>,
    quiet: bool,
}

fn parse_args() -> Args {
    let mut data_dir = PathBuf::from("./data");
    let mut first_round = *DEFAULT_ROUNDS.start();
    let mut last_round = *DEFAULT_ROUNDS.end();
    let mut learning_rate = DEFAULT_LEARNING_RATE;
    let mut out_json: Option<PathBuf> = None;
    let mut quiet = false;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--data-dir" => {
                data_dir = PathBuf::from(it.next().expect("--data-dir requires a path"));
            }
            "--rounds" => {
                first_round = it
                    .next()
                    .expect("--rounds first")
                    .parse()
                    .expect("invalid first round");
                last_round = it
                    .next()
                    .expect("--rounds last")
                    .parse()
                    .expect("invalid last round");
                if first_round > last_round {
                    panic!("--rounds: first ({first_round}) must not exceed last ({last_round})");
                }
            }
            "--learning-rate" => {
                learning_rate = it
                    .next()
                    .expect("--learning-rate value")
                    .parse()
                    .expect("invalid learning rate");
            }
            "--out-json" => {
                out_json = Some(PathBuf::from(it.next().expect("--out-json path")));
            }
            "--quiet" => quiet = true,
            "--help" => print_help_and_exit(),
            other => panic!("unknown arg: {other}"),
        }
    }

    Args {
        data_dir,
        first_round,
        last_round,
        learning_rate,
        out_json,
        quiet,
    }
}

fn print_help_and_exit() -> ! {
    eprintln!(
        "fit_weights\n\n  Data:\n    --data-dir <path>        directory holding data_<round> files (default ./data)\n    --rounds <first> <last>  inclusive round range (default 16 30)\n\n  Training:\n    --learning-rate <f>      per-example step size (default 0.001)\n\n  Output:\n    --out-json <path>        also write a structured report\n    --quiet                  suppress progress output\n"
    );
    process::exit(0)
}

fn main() {
    let args = parse_args();

    let params = SgdParams {
        learning_rate: args.learning_rate,
        verbosity: if args.quiet {
            Verbosity::Silent
        } else {
            Verbosity::Info
        },
    };

    let trainer = SgdTrainer::new(SquaredLoss, params);
    let results = trainer
        .fit_range(&args.data_dir, args.first_round..=args.last_round)
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            process::exit(1);
        });

    for (_, model) in &results {
        println!("{}", format_weights(model));
    }

    if let Some(path) = &args.out_json {
        let report = RunReport::new(args.learning_rate, &results);
        let content = report.to_json().unwrap_or_else(|e| {
            eprintln!("error: failed to serialize report: {e}");
            process::exit(1);
        });
        fs::write(path, content).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {e}", path.display());
            process::exit(1);
        });
        eprintln!("wrote {}", path.display());
    }
}
