use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Color, Suit};
use crate::deck::Deck;

use super::{Strategy, coin, random_color, random_suit};

/// Guesses uniformly at random, ignoring the game state.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates the strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn guess_color(&mut self, _deck: &Deck) -> Color {
        random_color(&mut self.rng)
    }

    fn guess_higher(&mut self, _first: Card, _deck: &Deck) -> bool {
        coin(&mut self.rng)
    }

    fn guess_inside(&mut self, _first: Card, _second: Card, _deck: &Deck) -> bool {
        coin(&mut self.rng)
    }

    fn guess_suit(&mut self, _deck: &Deck) -> Suit {
        random_suit(&mut self.rng)
    }
}
