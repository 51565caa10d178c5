//! Player identification and roster entries.
//!
//! ## PlayerId
//!
//! Type-safe 0-based seat index. The seat is a player's true identity:
//! names carry no uniqueness constraint.
//!
//! ## Player
//!
//! A roster entry: name, hand, and (once out of cards) the 1-based
//! position in the elimination order. Eliminated players stay in the
//! roster, inert; a player is *alive* iff their hand is non-empty.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Seat index identifying a player, supporting up to 255 seats.
///
/// Seats are 0-based: the first player added is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player in the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Duplicates are permitted; the seat is the identity.
    pub name: String,

    /// Cards currently held, in the order received.
    pub hand: Vector<Card>,

    /// 1-based position in the elimination order, once the hand first
    /// became empty. `None` while the player still holds cards (or
    /// before the game starts).
    pub elimination_order: Option<u32>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vector::new(),
            elimination_order: None,
        }
    }

    /// A player is alive iff their hand is non-empty.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Check whether the hand contains at least one card of `suit`.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.hand.iter().any(|c| c.suit == suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank};

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_new_player_is_not_alive() {
        let player = Player::new("ada");
        assert!(!player.is_alive());
        assert_eq!(player.elimination_order, None);
    }

    #[test]
    fn test_has_suit() {
        let mut player = Player::new("ada");
        player.hand.push_back(Card::new(Suit::Spade, Rank::Seven));
        player.hand.push_back(Card::new(Suit::Hearts, Rank::Two));

        assert!(player.has_suit(Suit::Spade));
        assert!(player.has_suit(Suit::Hearts));
        assert!(!player.has_suit(Suit::Diamond));
        assert!(!player.has_suit(Suit::Clover));
    }

    #[test]
    fn test_alive_tracks_hand() {
        let mut player = Player::new("ada");
        assert!(!player.is_alive());

        player.hand.push_back(Card::new(Suit::Clover, Rank::Nine));
        assert!(player.is_alive());

        player.hand.remove(0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new("grace");
        player.hand.push_back(Card::new(Suit::Diamond, Rank::Ace));

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();

        assert_eq!(player, deserialized);
    }
}
