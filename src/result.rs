//! Stage and game result types.

/// Result of a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageResult<G> {
    /// The card drawn for the stage.
    pub card: crate::card::Card,
    /// The guess made before the draw.
    pub guess: G,
    /// Whether the guess was right.
    pub success: bool,
}

/// Terminal result of a full game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// Whether four consecutive stages succeeded before the deck ran out.
    pub won: bool,
    /// Cards left in the deck when the game ended (always 0 on a loss).
    pub cards_remaining: usize,
    /// Number of attempts started, including the final one.
    pub attempts: usize,
    /// Cards drawn across all attempts.
    pub cards_drawn: usize,
}
