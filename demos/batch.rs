//! Batch simulation example.
//!
//! Plays many games and prints `<wins>/<games>` per strategy.
//! Set `RUST_LOG=rbrs=debug` to watch attempts restart.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rbrs::batch::{estimate_win_rate, simulate_parallel};
use rbrs::{GameOptions, StrategyKind};
use tracing_subscriber::EnvFilter;

/// Simulate Red or Black games and report how often they are won.
#[derive(Debug, Parser)]
#[command(name = "rbrs-batch", version, about)]
struct Cli {
    /// Strategy to play with (random, sensible, optimised).
    #[arg(short, long, default_value_t = StrategyKind::Sensible)]
    strategy: StrategyKind,

    /// Play every strategy instead of just one.
    #[arg(long)]
    all: bool,

    /// Number of games to play.
    #[arg(short, long, default_value_t = 100)]
    games: usize,

    /// Seed for the first game; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Also average the win rate over this many batches of `--games` games.
    #[arg(short, long)]
    batches: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let strategies: &[StrategyKind] = if cli.all {
        &StrategyKind::ALL
    } else {
        core::slice::from_ref(&cli.strategy)
    };

    for &strategy in strategies {
        let options = GameOptions::default().with_strategy(strategy);
        let summary = simulate_parallel(&options, cli.games, seed, cli.threads);

        print!(
            "{strategy:>9}: {summary} ({:.1}% ± {:.1}%)",
            summary.win_rate() * 100.0,
            summary.standard_error() * 100.0
        );
        match summary.mean_cards_remaining_on_win() {
            Some(mean) => println!(", {mean:.1} cards left on average when won"),
            None => println!(),
        }

        if let Some(batches) = cli.batches {
            let estimate = estimate_win_rate(&options, batches, cli.games, seed);
            println!(
                "{:>9}  mean win rate over {batches} batches: {:.2}%",
                "",
                estimate * 100.0
            );
        }
    }
}
