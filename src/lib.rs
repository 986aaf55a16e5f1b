//! A "Red or Black" card-guessing game engine with optional `no_std` support.
//!
//! A player tries to make four correct guesses in a row about cards drawn
//! from a single shrinking deck: the colour of the first card, whether the
//! second ranks higher than the first, whether the third falls between the
//! first two, and the suit of the fourth. A wrong guess restarts the four
//! stages with the next cards of the same deck. The game is won after four
//! consecutive successes and lost when the deck runs out first.
//!
//! # Example
//!
//! ```
//! use rbrs::{Game, GameOptions, StrategyKind};
//!
//! let options = GameOptions::default().with_strategy(StrategyKind::Optimised);
//! let game = Game::new(options, 42);
//! let outcome = game.play();
//! assert!(outcome.won || outcome.cards_remaining == 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod batch;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod rules;
pub mod strategy;
mod sync;

// Re-export main types
pub use batch::BatchSummary;
pub use card::{Card, Color, DECK_SIZE, RANKS, Suit};
pub use deck::Deck;
pub use error::{DrawError, ParseStrategyError};
pub use game::{Game, GameState, Stage, new_game, run_game};
pub use options::GameOptions;
pub use result::{GameOutcome, StageResult};
pub use strategy::{
    BoxedStrategy, OptimisedStrategy, RandomStrategy, SensibleStrategy, Strategy, StrategyKind,
};
