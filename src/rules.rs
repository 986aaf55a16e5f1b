//! Stage evaluation rules.
//!
//! Each stage compares a guess made before the draw against the card that
//! was drawn. Stage two and three have a third, tie-like outcome:
//!
//! - a rank tie in stage two is never "higher", so a "higher" guess fails
//!   while a "lower" guess is judged against `false` and passes;
//! - a stage-three card on either reference rank is on the [`SpanPosition::Edge`]
//!   and fails whatever was guessed.

use crate::card::{Card, Color, Suit};

/// How a drawn rank compares to a reference rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// The drawn rank is greater.
    Higher,
    /// The drawn rank is smaller.
    Lower,
    /// The ranks are equal.
    Tie,
}

impl RankOrder {
    /// Compares `drawn` against `reference`.
    #[must_use]
    pub const fn of(reference: u8, drawn: u8) -> Self {
        if drawn > reference {
            Self::Higher
        } else if drawn < reference {
            Self::Lower
        } else {
            Self::Tie
        }
    }
}

/// Where a drawn rank falls relative to a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanPosition {
    /// Strictly between the two reference ranks.
    Inside,
    /// Below the lower or above the higher reference rank.
    Outside,
    /// On a reference rank, or any rank when the span is degenerate.
    Edge,
}

/// The rank interval spanned by the first two cards of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// The lower reference rank.
    pub lo: u8,
    /// The higher reference rank.
    pub hi: u8,
}

impl Span {
    /// Creates a span from two ranks in either order.
    ///
    /// ```
    /// use rbrs::rules::Span;
    ///
    /// assert_eq!(Span::new(9, 3), Span::new(3, 9));
    /// ```
    #[must_use]
    pub const fn new(a: u8, b: u8) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Returns `true` if both reference ranks are equal.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns `true` if `rank` lies strictly between the reference ranks.
    #[must_use]
    pub const fn contains_open(&self, rank: u8) -> bool {
        self.lo < rank && rank < self.hi
    }

    /// Returns `true` if `rank` equals either reference rank.
    #[must_use]
    pub const fn is_edge(&self, rank: u8) -> bool {
        rank == self.lo || rank == self.hi
    }

    /// Returns `true` if `rank` lies outside the closed span.
    #[must_use]
    pub const fn is_outside(&self, rank: u8) -> bool {
        rank < self.lo || rank > self.hi
    }

    /// Classifies `rank` against the span.
    ///
    /// A degenerate span has no inside, and every rank is treated as edge.
    #[must_use]
    pub const fn classify(&self, rank: u8) -> SpanPosition {
        if self.is_degenerate() || self.is_edge(rank) {
            SpanPosition::Edge
        } else if self.contains_open(rank) {
            SpanPosition::Inside
        } else {
            SpanPosition::Outside
        }
    }
}

/// Stage one: the guessed colour must match the drawn card.
#[must_use]
pub fn judge_color(guess: Color, drawn: Card) -> bool {
    guess == drawn.color()
}

/// Stage two: `guess` is `true` for "higher than `first`".
///
/// ```
/// use rbrs::rules::judge_higher;
/// use rbrs::{Card, Suit};
///
/// let first = Card::new(Suit::Hearts, 5);
/// let tie = Card::new(Suit::Clubs, 5);
/// assert!(!judge_higher(true, first, tie));
/// assert!(judge_higher(false, first, tie));
/// ```
#[must_use]
pub const fn judge_higher(guess: bool, first: Card, drawn: Card) -> bool {
    guess == matches!(RankOrder::of(first.rank, drawn.rank), RankOrder::Higher)
}

/// Stage three: `guess` is `true` for "inside the span of `first` and `second`".
#[must_use]
pub const fn judge_inside(guess: bool, first: Card, second: Card, drawn: Card) -> bool {
    match Span::new(first.rank, second.rank).classify(drawn.rank) {
        SpanPosition::Inside => guess,
        SpanPosition::Outside => !guess,
        SpanPosition::Edge => false,
    }
}

/// Stage four: the guessed suit must match the drawn card.
#[must_use]
pub fn judge_suit(guess: Suit, drawn: Card) -> bool {
    guess == drawn.suit
}
