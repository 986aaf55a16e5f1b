use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Color, Suit};
use crate::deck::Deck;
use crate::options::GameOptions;

use super::{Strategy, coin, random_color, random_suit};

/// Rank heuristics that look only at the revealed cards.
///
/// Stage two guesses away from the middle of the rank range, stage three
/// guesses "inside" only for wide spans. Colour and suit are random.
#[derive(Debug, Clone)]
pub struct SensibleStrategy {
    rng: ChaCha8Rng,
    pivot: u8,
    spread: u8,
}

impl SensibleStrategy {
    /// Creates the strategy with the thresholds of [`GameOptions::default`].
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let defaults = GameOptions::default();
        Self::with_thresholds(seed, defaults.sensible_pivot, defaults.sensible_spread)
    }

    /// Creates the strategy with explicit thresholds.
    #[must_use]
    pub fn with_thresholds(seed: u64, pivot: u8, spread: u8) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            pivot,
            spread,
        }
    }
}

impl Strategy for SensibleStrategy {
    fn guess_color(&mut self, _deck: &Deck) -> Color {
        random_color(&mut self.rng)
    }

    fn guess_higher(&mut self, first: Card, _deck: &Deck) -> bool {
        if first.rank < self.pivot {
            true
        } else if first.rank > self.pivot {
            false
        } else {
            coin(&mut self.rng)
        }
    }

    fn guess_inside(&mut self, first: Card, second: Card, _deck: &Deck) -> bool {
        first.rank.abs_diff(second.rank) > self.spread
    }

    fn guess_suit(&mut self, _deck: &Deck) -> Suit {
        random_suit(&mut self.rng)
    }
}
