//! Batch simulation from the command line.
//!
//! Usage: cargo run --example simulate -- --rounds 100000 --base-bet 10

#![allow(clippy::missing_docs_in_private_items)]

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;

use bjcount::{
    AuditLog, BatchSummary, EventSink, GameOptions, NullSink, SessionError, SessionOptions,
    StrategyLadder, simulate,
};
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Simulate Hi-Lo counted blackjack over many rounds")]
struct Args {
    /// Number of rounds to play
    #[arg(short, long, default_value_t = 10_000)]
    rounds: usize,

    /// Decks in the shoe
    #[arg(short, long, default_value_t = 8)]
    decks: u8,

    /// Fraction of the shoe dealt before reshuffling
    #[arg(long, default_value_t = 0.75)]
    penetration: f64,

    /// Unit bet multiplied by the bet ramp
    #[arg(short, long, default_value_t = 1)]
    base_bet: usize,

    /// Starting bankroll
    #[arg(long, default_value_t = 1000)]
    bankroll: usize,

    /// Shoe seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Independent shoes played in parallel
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Append one audit line per round to this file
    #[arg(long)]
    audit: Option<PathBuf>,

    /// Log progress and reshuffles
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::INFO } else { Level::WARN })
        .init();

    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_penetration(args.penetration);
    let betting = SessionOptions::default()
        .with_base_bet(args.base_bet)
        .with_bankroll(args.bankroll);
    let ladder = StrategyLadder::illustrious();

    let result = match &args.audit {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => run(&args, &options, &betting, &ladder, &AuditLog::new(file)),
            Err(err) => {
                eprintln!("cannot open {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => run(&args, &options, &betting, &ladder, &NullSink),
    };

    match result {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("simulation failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    args: &Args,
    options: &GameOptions,
    betting: &SessionOptions,
    ladder: &StrategyLadder,
    sink: &dyn EventSink,
) -> Result<BatchSummary, SessionError> {
    #[cfg(feature = "parallel")]
    {
        if args.workers > 1 {
            return bjcount::simulate_parallel(
                options,
                betting,
                ladder,
                args.rounds,
                args.seed,
                args.workers,
                sink,
            );
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        if args.workers > 1 {
            tracing::warn!(workers = args.workers, "built without `parallel`, using one shoe");
        }
    }

    simulate(options, betting, ladder, args.rounds, args.seed, sink)
}
