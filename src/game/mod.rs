//! Game engine and attempt state machine.

use core::sync::atomic::{AtomicUsize, Ordering};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::sync::Mutex;

use crate::card::{Card, Color, Suit};
use crate::deck::Deck;
use crate::error::DrawError;
use crate::options::GameOptions;
use crate::result::{GameOutcome, StageResult};
use crate::rules;
use crate::strategy::{BoxedStrategy, Strategy, StrategyKind};

pub mod state;

pub use state::{GameState, Stage};

/// A single game: one shuffled deck played until a win or until it runs out.
///
/// The game owns the deck, the strategy, and the shuffle RNG. A failed stage
/// never reshuffles or returns cards; the next attempt continues with
/// whatever is left.
pub struct Game<S = BoxedStrategy> {
    /// Cards not yet drawn.
    deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: Mutex<GameState>,
    /// Strategy producing every guess.
    strategy: Mutex<S>,
    /// Random number generator used for shuffling.
    rng: Mutex<ChaCha8Rng>,
    /// Attempts started since the last deal.
    attempts: AtomicUsize,
    /// Cards drawn since the last deal.
    drawn: AtomicUsize,
}

impl Game {
    /// Creates a new game with the given seed, using the strategy named in
    /// `options`. The deck is reset and shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use rbrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let outcome = game.play();
    /// assert!(outcome.won || outcome.cards_remaining == 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let strategy = options.strategy.build(rng.next_u64(), &options);
        Self::from_parts(options, strategy, rng)
    }
}

impl<S: Strategy> Game<S> {
    /// Creates a new game driven by a caller-supplied strategy.
    ///
    /// `options.strategy` is ignored.
    #[must_use]
    pub fn with_strategy(options: GameOptions, strategy: S, seed: u64) -> Self {
        Self::from_parts(options, strategy, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_parts(options: GameOptions, strategy: S, rng: ChaCha8Rng) -> Self {
        let game = Self {
            deck: Mutex::new(Deck::new()),
            options,
            state: Mutex::new(GameState::Running),
            strategy: Mutex::new(strategy),
            rng: Mutex::new(rng),
            attempts: AtomicUsize::new(0),
            drawn: AtomicUsize::new(0),
        };
        game.deal_new_deck();
        game
    }

    /// Resets and shuffles the deck and starts the game over.
    pub fn deal_new_deck(&self) {
        let mut deck = Deck::new();
        deck.shuffle(&mut *self.rng.lock());
        self.set_deck(deck);
    }

    /// Replaces the deck and starts the game over without shuffling.
    ///
    /// Useful for controlled setups where the draw order matters.
    pub fn set_deck(&self, deck: Deck) {
        *self.deck.lock() = deck;
        *self.state.lock() = GameState::Running;
        self.attempts.store(0, Ordering::Relaxed);
        self.drawn.store(0, Ordering::Relaxed);
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns a copy of the undrawn cards.
    pub fn deck(&self) -> Deck {
        self.deck.lock().clone()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Returns the number of attempts started since the last deal.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Returns the number of cards drawn since the last deal.
    pub fn cards_drawn(&self) -> usize {
        self.drawn.load(Ordering::Relaxed)
    }

    /// Draws a card from the deck.
    fn draw(&self) -> Result<Card, DrawError> {
        let card = self.deck.lock().draw()?;
        self.drawn.fetch_add(1, Ordering::Relaxed);
        Ok(card)
    }

    /// Stage one: guess the colour, then draw.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck is empty.
    pub fn play_color(&self) -> Result<StageResult<Color>, DrawError> {
        let guess = self.strategy.lock().guess_color(&self.deck.lock());
        let card = self.draw()?;
        let success = rules::judge_color(guess, card);
        trace!(stage = ?Stage::Color, card = %card.short(), guess = %guess, success);
        Ok(StageResult {
            card,
            guess,
            success,
        })
    }

    /// Stage two: guess whether the next card is higher than `first`, then draw.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck is empty.
    pub fn play_higher_lower(&self, first: Card) -> Result<StageResult<bool>, DrawError> {
        let guess = self.strategy.lock().guess_higher(first, &self.deck.lock());
        let card = self.draw()?;
        let success = rules::judge_higher(guess, first, card);
        trace!(stage = ?Stage::HigherLower, card = %card.short(), higher = guess, success);
        Ok(StageResult {
            card,
            guess,
            success,
        })
    }

    /// Stage three: guess whether the next card falls strictly between
    /// `first` and `second`, then draw.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck is empty.
    pub fn play_inside_outside(
        &self,
        first: Card,
        second: Card,
    ) -> Result<StageResult<bool>, DrawError> {
        let guess = self.strategy.lock().guess_inside(first, second, &self.deck.lock());
        let card = self.draw()?;
        let success = rules::judge_inside(guess, first, second, card);
        trace!(stage = ?Stage::InsideOutside, card = %card.short(), inside = guess, success);
        Ok(StageResult {
            card,
            guess,
            success,
        })
    }

    /// Stage four: guess the suit, then draw.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck is empty.
    pub fn play_suit(&self) -> Result<StageResult<Suit>, DrawError> {
        let guess = self.strategy.lock().guess_suit(&self.deck.lock());
        let card = self.draw()?;
        let success = rules::judge_suit(guess, card);
        trace!(stage = ?Stage::Suit, card = %card.short(), guess = %guess, success);
        Ok(StageResult {
            card,
            guess,
            success,
        })
    }

    /// Plays the stages in order, stopping at the first failure.
    ///
    /// Returns `Ok(true)` when all four stages succeed.
    fn attempt(&self) -> Result<bool, DrawError> {
        let first = self.play_color()?;
        if !first.success {
            return Ok(false);
        }

        let second = self.play_higher_lower(first.card)?;
        if !second.success {
            return Ok(false);
        }

        let third = self.play_inside_outside(first.card, second.card)?;
        if !third.success {
            return Ok(false);
        }

        Ok(self.play_suit()?.success)
    }

    /// Runs one attempt and returns the resulting state.
    ///
    /// Returns [`GameState::Running`] if a stage failed and the next attempt
    /// should start from stage one. Calling this on a finished game does
    /// nothing and returns the terminal state.
    pub fn run_attempt(&self) -> GameState {
        let state = self.state();
        if state.is_terminal() {
            return state;
        }

        let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        let next = match self.attempt() {
            Ok(true) => GameState::Won,
            Ok(false) => GameState::Running,
            Err(DrawError::DeckExhausted) => GameState::Lost,
        };

        match next {
            GameState::Running => {
                debug!(
                    attempt,
                    remaining = self.cards_remaining(),
                    "attempt failed, restarting"
                );
            }
            GameState::Won | GameState::Lost => {
                debug!(attempt, state = ?next, remaining = self.cards_remaining(), "game over");
            }
        }

        *self.state.lock() = next;
        next
    }

    /// Plays attempts until the game is won or the deck runs out.
    pub fn play(&self) -> GameOutcome {
        while !self.run_attempt().is_terminal() {}
        self.outcome()
    }

    /// Summarizes the game so far.
    pub fn outcome(&self) -> GameOutcome {
        let state = self.state();
        GameOutcome {
            won: state == GameState::Won,
            cards_remaining: if state == GameState::Lost {
                0
            } else {
                self.cards_remaining()
            },
            attempts: self.attempts(),
            cards_drawn: self.cards_drawn(),
        }
    }
}

/// Creates a freshly shuffled game using one of the built-in strategies.
///
/// ```
/// use rbrs::{StrategyKind, new_game, run_game};
///
/// let outcome = run_game(&new_game(StrategyKind::Optimised, 7));
/// assert_eq!(outcome.cards_remaining + outcome.cards_drawn, rbrs::DECK_SIZE);
/// ```
#[must_use]
pub fn new_game(strategy: StrategyKind, seed: u64) -> Game {
    Game::new(GameOptions::default().with_strategy(strategy), seed)
}

/// Runs a game to completion and returns its outcome.
pub fn run_game<S: Strategy>(game: &Game<S>) -> GameOutcome {
    game.play()
}
