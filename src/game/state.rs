//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Attempts are still being played.
    Running,
    /// Four consecutive stages succeeded.
    Won,
    /// The deck ran out first.
    Lost,
}

impl GameState {
    /// Returns `true` for [`GameState::Won`] and [`GameState::Lost`].
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// The four stages of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Guess the colour.
    Color,
    /// Guess higher or lower than the first card.
    HigherLower,
    /// Guess inside or outside the span of the first two cards.
    InsideOutside,
    /// Guess the suit.
    Suit,
}
