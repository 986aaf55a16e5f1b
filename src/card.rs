//! Card types.

use core::fmt;

/// Card suit, in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in enumeration order. Suit tie-breaks follow this order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    /// Returns the colour of the suit.
    ///
    /// ```
    /// use rbrs::{Color, Suit};
    ///
    /// assert_eq!(Suit::Diamonds.color(), Color::Red);
    /// assert_eq!(Suit::Clubs.color(), Color::Black);
    /// ```
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Spades | Self::Clubs => Color::Black,
        }
    }

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unicode symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        };
        f.write_str(name)
    }
}

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

impl Color {
    /// Both colours.
    pub const ALL: [Self; 2] = [Self::Red, Self::Black];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "Red",
            Self::Black => "Black",
        })
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but never appear in a standard deck.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the colour of the card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Returns a short display form such as `K♥` or `10♦`.
    ///
    /// ```
    /// use rbrs::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Hearts, 13).short().to_string(), "K♥");
    /// assert_eq!(Card::new(Suit::Diamonds, 10).short().to_string(), "10♦");
    /// ```
    #[must_use]
    pub const fn short(self) -> ShortCard {
        ShortCard(self)
    }
}

const fn rank_name(rank: u8) -> &'static str {
    match rank {
        1 => "Ace",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => "Unknown",
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", rank_name(self.rank), self.suit)
    }
}

/// Short display adapter returned by [`Card::short`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortCard(Card);

impl fmt::Display for ShortCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Card { suit, rank } = self.0;
        match rank {
            1 => write!(f, "A{}", suit.symbol()),
            11 => write!(f, "J{}", suit.symbol()),
            12 => write!(f, "Q{}", suit.symbol()),
            13 => write!(f, "K{}", suit.symbol()),
            _ => write!(f, "{rank}{}", suit.symbol()),
        }
    }
}

/// Ranks present in a standard deck.
pub const RANKS: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
