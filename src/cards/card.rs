//! Card values: suits, ranks, and the card itself.
//!
//! ## Rank order
//!
//! ACE ranks cards by *weight*: the Ace is the heaviest card (weight 0)
//! and the Two the lightest (weight 12). Trick resolution always looks
//! for the heaviest card of the pool suit, i.e. the lowest weight.
//!
//! ## Identity
//!
//! A card is a plain `(suit, rank)` value with no identity beyond the
//! pair. A standard deck contains each pair exactly once; the engine
//! never creates duplicates.

use serde::{Deserialize, Serialize};

/// One of the four ACE suits.
///
/// The names are the game's own (`Clover` rather than Clubs).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Diamond,
    Clover,
    Hearts,
}

impl Suit {
    /// All suits, in deck-enumeration order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Clover, Suit::Hearts];

    /// Single-letter suit code used in card short codes.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Diamond => 'D',
            Suit::Clover => 'C',
            Suit::Hearts => 'H',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.initial())
    }
}

/// Card rank, declared in weight order: `Ace` is heaviest, `Two` lightest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
}

impl Rank {
    /// All ranks, heaviest first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Weight of this rank: 0 for the Ace (heaviest) through 12 for the
    /// Two (lightest). Lower weight beats higher weight.
    #[must_use]
    pub const fn weight(self) -> u8 {
        self as u8
    }

    /// Display symbol (`A`, `K`, .., `10`, .., `2`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
            Rank::Five => "5",
            Rank::Four => "4",
            Rank::Three => "3",
            Rank::Two => "2",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Weight of this card's rank (0 = heaviest).
    #[must_use]
    pub const fn weight(self) -> u8 {
        self.rank.weight()
    }
}

impl std::fmt::Display for Card {
    /// Short code of the form `AS`, `10H`, `7D`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
