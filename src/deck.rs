//! The single 52-card deck a game draws from.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::DrawError;

/// An ordered deck. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a full deck in canonical order (suit-major, rank-minor).
    ///
    /// ```
    /// use rbrs::{DECK_SIZE, Deck};
    ///
    /// assert_eq!(Deck::new().remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: VecDeque::with_capacity(DECK_SIZE),
        };
        deck.reset();
        deck
    }

    /// Creates a deck that draws the given cards in order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Repopulates the deck with all 52 cards in canonical order.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in RANKS {
                self.cards.push_back(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards uniformly.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the first card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop_front().ok_or(DrawError::DeckExhausted)
    }

    /// Number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` once every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the undrawn cards in draw order.
    pub fn peek_remaining(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Counts undrawn cards matching `predicate`.
    pub fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&Card) -> bool,
    {
        self.cards.iter().filter(|card| predicate(card)).count()
    }
}
