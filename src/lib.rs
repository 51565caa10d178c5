//! # ace-engine
//!
//! The game-state engine for ACE: a trick-taking card game for 2+
//! players with a punishment mechanic that can redirect a whole
//! trick's cards into one player's hand, and a last-player-standing
//! elimination condition.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: every command takes a snapshot and returns
//!    a new one. Persistent data structures (`im`) make the copies
//!    O(1); no transition mutates a caller-visible value.
//!
//! 2. **Silent Rejection**: an illegal command returns the unchanged
//!    state, never an error. Callers diff old vs. new to detect it.
//!
//! 3. **Deterministic**: the RNG travels inside the state, so a seed
//!    plus a command sequence replays to an identical snapshot, in
//!    memory or through the serialized form.
//!
//! The engine is single-threaded and does no I/O. Transport,
//! sessions, persistence, and rendering are the hosting layer's
//! business: it feeds [`Command`] values to [`GameState::apply`] and
//! stores the returned snapshot (see `core::snapshot` for the byte
//! codec).
//!
//! ## Example
//!
//! ```
//! use ace_engine::GameState;
//!
//! let lobby = GameState::new(42).add_player("ada").add_player("grace");
//! let game = lobby.start();
//! assert!(game.started);
//!
//! // the holder of the Ace of Spades leads, and may open with anything
//! let leader = game.current_player;
//! let after = game.play_card(leader, 0);
//! assert_eq!(after.pool.len(), 1);
//!
//! // the original snapshot is untouched
//! assert!(game.pool.is_empty());
//! ```
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, cards, deck construction and shuffling
//! - `core`: players, commands, state, RNG, snapshot codec
//! - `rules`: the state machine and the trick resolver

pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Rank, Suit};
pub use crate::core::{
    Command, GameRng, GameRngState, GameState, Player, PlayerId, PoolEntry,
};
