//! Game configuration options.

use crate::strategy::StrategyKind;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use rbrs::{GameOptions, StrategyKind};
///
/// let options = GameOptions::default()
///     .with_strategy(StrategyKind::Optimised)
///     .with_sensible_pivot(8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Decision strategy used for every stage of every attempt.
    pub strategy: StrategyKind,
    /// Rank the sensible strategy compares the first card against.
    /// Below it guesses "higher", above it "lower", on it a coin flip.
    pub sensible_pivot: u8,
    /// The sensible strategy guesses "inside" only when the first two ranks
    /// differ by more than this.
    pub sensible_spread: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Sensible,
            sensible_pivot: 7,
            sensible_spread: 6,
        }
    }
}

impl GameOptions {
    /// Sets the decision strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use rbrs::{GameOptions, StrategyKind};
    ///
    /// let options = GameOptions::default().with_strategy(StrategyKind::Random);
    /// assert_eq!(options.strategy, StrategyKind::Random);
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the sensible strategy's stage-two pivot rank.
    ///
    /// # Example
    ///
    /// ```
    /// use rbrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_sensible_pivot(6);
    /// assert_eq!(options.sensible_pivot, 6);
    /// ```
    #[must_use]
    pub const fn with_sensible_pivot(mut self, pivot: u8) -> Self {
        self.sensible_pivot = pivot;
        self
    }

    /// Sets the sensible strategy's stage-three spread threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use rbrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_sensible_spread(5);
    /// assert_eq!(options.sensible_spread, 5);
    /// ```
    #[must_use]
    pub const fn with_sensible_spread(mut self, spread: u8) -> Self {
        self.sensible_spread = spread;
        self
    }
}
