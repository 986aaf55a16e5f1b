use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Color, Suit};
use crate::deck::Deck;
use crate::rules::Span;

use super::{Strategy, majority};

/// Counts the undrawn cards and guesses the outcome with the most cards.
///
/// Equal counts are broken with a coin flip, except in stage four where
/// the first suit in [`Suit::ALL`] order wins.
#[derive(Debug, Clone)]
pub struct OptimisedStrategy {
    rng: ChaCha8Rng,
}

impl OptimisedStrategy {
    /// Creates the strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for OptimisedStrategy {
    fn guess_color(&mut self, deck: &Deck) -> Color {
        let red = deck.count(|card| card.color() == Color::Red);
        let black = deck.remaining() - red;
        if majority(red, black, &mut self.rng) {
            Color::Red
        } else {
            Color::Black
        }
    }

    fn guess_higher(&mut self, first: Card, deck: &Deck) -> bool {
        let higher = deck.count(|card| card.rank > first.rank);
        let lower = deck.count(|card| card.rank < first.rank);
        majority(higher, lower, &mut self.rng)
    }

    fn guess_inside(&mut self, first: Card, second: Card, deck: &Deck) -> bool {
        let span = Span::new(first.rank, second.rank);
        let inside = deck.count(|card| span.contains_open(card.rank));
        let outside = deck.count(|card| span.is_outside(card.rank));
        majority(inside, outside, &mut self.rng)
    }

    fn guess_suit(&mut self, deck: &Deck) -> Suit {
        let mut counts = [0_usize; 4];
        for card in deck.peek_remaining() {
            counts[card.suit.index()] += 1;
        }

        let mut best = Suit::ALL[0];
        for suit in Suit::ALL {
            if counts[suit.index()] > counts[best.index()] {
                best = suit;
            }
        }
        best
    }
}
