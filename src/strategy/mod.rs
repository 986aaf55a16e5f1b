//! Decision strategies.
//!
//! A strategy produces each stage's guess before the stage's card is drawn.
//! It sees the cards already revealed in the current attempt and a read-only
//! view of the undrawn deck.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Color, Suit};
use crate::deck::Deck;
use crate::error::ParseStrategyError;
use crate::options::GameOptions;

mod optimised;
mod random;
mod sensible;

pub use optimised::OptimisedStrategy;
pub use random::RandomStrategy;
pub use sensible::SensibleStrategy;

/// A decision policy for the four stages.
pub trait Strategy {
    /// Stage one: guess the colour of the next card.
    fn guess_color(&mut self, deck: &Deck) -> Color;

    /// Stage two: guess whether the next card ranks higher than `first`.
    fn guess_higher(&mut self, first: Card, deck: &Deck) -> bool;

    /// Stage three: guess whether the next card ranks strictly between
    /// `first` and `second`.
    fn guess_inside(&mut self, first: Card, second: Card, deck: &Deck) -> bool;

    /// Stage four: guess the suit of the next card.
    fn guess_suit(&mut self, deck: &Deck) -> Suit;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn guess_color(&mut self, deck: &Deck) -> Color {
        (**self).guess_color(deck)
    }

    fn guess_higher(&mut self, first: Card, deck: &Deck) -> bool {
        (**self).guess_higher(first, deck)
    }

    fn guess_inside(&mut self, first: Card, second: Card, deck: &Deck) -> bool {
        (**self).guess_inside(first, second, deck)
    }

    fn guess_suit(&mut self, deck: &Deck) -> Suit {
        (**self).guess_suit(deck)
    }
}

/// A strategy chosen at runtime.
pub type BoxedStrategy = Box<dyn Strategy + Send>;

/// The built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Every guess is uniformly random.
    Random,
    /// Simple rank heuristics using only the revealed cards.
    #[default]
    Sensible,
    /// Counts the undrawn cards and picks the more likely outcome.
    Optimised,
}

impl StrategyKind {
    /// All built-in strategies.
    pub const ALL: [Self; 3] = [Self::Random, Self::Sensible, Self::Optimised];

    /// Builds the strategy with its own random source seeded from `seed`.
    #[must_use]
    pub fn build(self, seed: u64, options: &GameOptions) -> BoxedStrategy {
        match self {
            Self::Random => Box::new(RandomStrategy::new(seed)),
            Self::Sensible => Box::new(SensibleStrategy::with_thresholds(
                seed,
                options.sensible_pivot,
                options.sensible_spread,
            )),
            Self::Optimised => Box::new(OptimisedStrategy::new(seed)),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sensible => "sensible",
            Self::Optimised => "optimised",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else if s.eq_ignore_ascii_case("sensible") {
            Ok(Self::Sensible)
        } else if s.eq_ignore_ascii_case("optimised") || s.eq_ignore_ascii_case("optimized") {
            Ok(Self::Optimised)
        } else {
            Err(ParseStrategyError)
        }
    }
}

fn coin(rng: &mut ChaCha8Rng) -> bool {
    rng.random_bool(0.5)
}

fn random_color(rng: &mut ChaCha8Rng) -> Color {
    Color::ALL[rng.random_range(0..Color::ALL.len())]
}

fn random_suit(rng: &mut ChaCha8Rng) -> Suit {
    Suit::ALL[rng.random_range(0..Suit::ALL.len())]
}

/// `true` if `yes` outnumbers `no`, `false` if `no` outnumbers `yes`,
/// a coin flip otherwise.
fn majority(yes: usize, no: usize, rng: &mut ChaCha8Rng) -> bool {
    match yes.cmp(&no) {
        core::cmp::Ordering::Greater => true,
        core::cmp::Ordering::Less => false,
        core::cmp::Ordering::Equal => coin(rng),
    }
}
