//! The authoritative game state.
//!
//! ## GameState
//!
//! One value owns everything: roster, hands, the current trick's pool,
//! the turn pointer, elimination bookkeeping, and the RNG. All
//! transitions (see `rules`) take a snapshot and return a new one; the
//! `im` persistent vectors make those copies O(1) with structural
//! sharing, so no transition ever mutates a caller-visible snapshot.
//!
//! ## Invariants
//!
//! - `pool_suit` is `Some` iff `pool` is non-empty, and equals the suit
//!   of the trick's first card
//! - cards are only moved, never created or destroyed: hand lengths
//!   plus the pool never exceed 52 (normal trick resolution removes the
//!   pool from play, so the total may shrink)
//! - `current_player` indexes an alive player while `started` is true
//!   and more than one player is alive
//! - `elimination_order` holds each seat at most once, first out first
//! - once `started` flips back to false, plays are rejected

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

use super::player::{Player, PlayerId};
use super::rng::GameRng;

/// A card played into the current trick, tagged with its owner for
/// punishment/collection purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub player: PlayerId,
    pub card: Card,
}

/// Full state of one game instance.
///
/// This is the outbound snapshot of the engine boundary: serializable
/// as-is, persistable by an external store keyed by room id, and cheap
/// to clone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Roster in seat order. Players are never removed, only eliminated.
    pub players: Vector<Player>,

    /// True between a successful `start` and the game-end check.
    pub started: bool,

    /// Cards played in the current, unresolved trick.
    pub pool: Vector<PoolEntry>,

    /// Suit of the trick's first card; `None` between tricks.
    pub pool_suit: Option<Suit>,

    /// Seat whose turn it is.
    pub current_player: PlayerId,

    /// Plays made in the current trick.
    pub plays_this_trick: u32,

    /// Plays that complete the current trick, fixed when its first card
    /// is played. 0 between tricks.
    pub trick_size: u32,

    /// Seats in the order their hands first became empty.
    pub elimination_order: Vector<PlayerId>,

    /// Deterministic RNG; consumed by the deal, carried in the snapshot.
    pub rng: GameRng,
}

impl GameState {
    /// Create an empty lobby with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            players: Vector::new(),
            started: false,
            pool: Vector::new(),
            pool_suit: None,
            current_player: PlayerId::new(0),
            plays_this_trick: 0,
            trick_size: 0,
            elimination_order: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Number of seats in the roster, eliminated players included.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by seat.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// Check whether a seat currently holds cards.
    #[must_use]
    pub fn is_alive(&self, seat: PlayerId) -> bool {
        self.player(seat).is_some_and(Player::is_alive)
    }

    /// Count of players still holding cards.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// Seats still holding cards, in ascending order.
    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_alive())
            .map(|(i, _)| PlayerId::new(i as u8))
            .collect()
    }

    /// First alive seat strictly after `seat` in cyclic order.
    ///
    /// The scan may wrap the whole way back to `seat` itself; if nobody
    /// is alive at all it falls back to the seat directly after `seat`.
    #[must_use]
    pub fn next_alive_after(&self, seat: PlayerId) -> PlayerId {
        let n = self.players.len();
        if n == 0 {
            return PlayerId::new(0);
        }
        for step in 1..=n {
            let idx = (seat.index() + step) % n;
            if self.players[idx].is_alive() {
                return PlayerId::new(idx as u8);
            }
        }
        PlayerId::new(((seat.index() + 1) % n) as u8)
    }

    /// Total cards still in play: every hand plus the pool.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        in_hands + self.pool.len()
    }

    /// True once a started game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.started && !self.elimination_order.is_empty()
    }

    /// The last player still holding cards in a finished game.
    ///
    /// `None` while the game is running, and in the degenerate finish
    /// where every hand emptied on the final trick.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        if !self.is_over() {
            return None;
        }
        let mut alive = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_alive());
        match (alive.next(), alive.next()) {
            (Some((idx, _)), None) => Some(PlayerId::new(idx as u8)),
            _ => None,
        }
    }
}
