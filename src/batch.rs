//! Batch simulation and aggregate statistics.
//!
//! Game `i` of a batch is seeded with `seed + i`, so a batch is
//! reproducible and gives the same totals however it is split across
//! threads.

use core::fmt;

use tracing::info;

use crate::card::DECK_SIZE;
use crate::game::Game;
use crate::options::GameOptions;
use crate::result::GameOutcome;

#[cfg(feature = "std")]
fn sqrt(value: f64) -> f64 {
    value.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn sqrt(value: f64) -> f64 {
    libm::sqrt(value)
}

/// Win counts and the distribution of cards left over on wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Games played.
    pub games: usize,
    /// Games won.
    pub wins: usize,
    /// `remaining_on_win[n]` counts wins that left `n` cards in the deck.
    pub remaining_on_win: [usize; DECK_SIZE + 1],
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games: 0,
            wins: 0,
            remaining_on_win: [0; DECK_SIZE + 1],
        }
    }

    /// Adds one game outcome.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        if outcome.won {
            self.wins += 1;
            self.remaining_on_win[outcome.cards_remaining.min(DECK_SIZE)] += 1;
        }
    }

    /// Folds another summary into this one.
    pub fn merge(&mut self, other: &Self) {
        self.games += other.games;
        self.wins += other.wins;
        for (total, count) in self.remaining_on_win.iter_mut().zip(other.remaining_on_win) {
            *total += count;
        }
    }

    /// Games lost.
    #[must_use]
    pub const fn losses(&self) -> usize {
        self.games - self.wins
    }

    /// Fraction of games won, or 0 for an empty summary.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for game counts"
    )]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }

    /// Binomial standard error of [`BatchSummary::win_rate`].
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for game counts"
    )]
    pub fn standard_error(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let p = self.win_rate();
        sqrt(p * (1.0 - p) / self.games as f64)
    }

    /// Mean number of cards left in the deck across won games.
    ///
    /// Returns `None` if no game was won.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn mean_cards_remaining_on_win(&self) -> Option<f64> {
        if self.wins == 0 {
            return None;
        }
        let total: usize = self
            .remaining_on_win
            .iter()
            .enumerate()
            .map(|(remaining, count)| remaining * count)
            .sum();
        Some(total as f64 / self.wins as f64)
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wins, self.games)
    }
}

fn play_range(options: &GameOptions, seed: u64, games: core::ops::Range<usize>) -> BatchSummary {
    let mut summary = BatchSummary::new();
    for index in games {
        let game = Game::new(*options, seed.wrapping_add(index as u64));
        summary.record(&game.play());
    }
    summary
}

/// Plays `games` independent games and aggregates the outcomes.
///
/// ```
/// use rbrs::GameOptions;
/// use rbrs::batch::simulate;
///
/// let summary = simulate(&GameOptions::default(), 20, 1);
/// assert_eq!(summary.games, 20);
/// ```
#[must_use]
pub fn simulate(options: &GameOptions, games: usize, seed: u64) -> BatchSummary {
    let summary = play_range(options, seed, 0..games);
    info!(
        strategy = %options.strategy,
        games = summary.games,
        wins = summary.wins,
        "batch finished"
    );
    summary
}

/// Like [`simulate`], but spreads the games over `threads` worker threads.
///
/// Each worker plays its own games with its own decks; only the summaries
/// are shared. The result equals `simulate(options, games, seed)`.
#[cfg(feature = "std")]
#[must_use]
pub fn simulate_parallel(
    options: &GameOptions,
    games: usize,
    seed: u64,
    threads: usize,
) -> BatchSummary {
    let threads = threads.clamp(1, games.max(1));
    let chunk = games.div_ceil(threads);
    let total = crate::sync::Mutex::new(BatchSummary::new());

    std::thread::scope(|scope| {
        for worker in 0..threads {
            let start = (worker * chunk).min(games);
            let end = (start + chunk).min(games);
            let total = &total;
            scope.spawn(move || {
                let local = play_range(options, seed, start..end);
                total.lock().merge(&local);
            });
        }
    });

    let summary = total.into_inner();
    info!(
        strategy = %options.strategy,
        games = summary.games,
        wins = summary.wins,
        threads,
        "parallel batch finished"
    );
    summary
}

/// Averages the win rate over `batches` batches of `games_per_batch` games.
///
/// Batches use consecutive, non-overlapping seed ranges.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for batch counts"
)]
pub fn estimate_win_rate(
    options: &GameOptions,
    batches: usize,
    games_per_batch: usize,
    seed: u64,
) -> f64 {
    if batches == 0 {
        return 0.0;
    }
    let total: f64 = (0..batches)
        .map(|batch| {
            let offset = (batch * games_per_batch) as u64;
            play_range(options, seed.wrapping_add(offset), 0..games_per_batch).win_rate()
        })
        .sum();
    let estimate = total / batches as f64;
    info!(strategy = %options.strategy, batches, games_per_batch, estimate, "win rate estimated");
    estimate
}
