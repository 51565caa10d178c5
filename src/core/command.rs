//! Inbound commands: the engine's entire write surface.
//!
//! A session/transport layer turns whatever it receives (HTTP calls,
//! form posts, bot moves) into `Command` values and feeds them to
//! `GameState::apply`. Every command returns a full new snapshot, or
//! the unchanged snapshot on rejection. The engine does not report
//! *why* a command was rejected; callers diff old vs. new state.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A command against a single game instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Add a player to the lobby. Ignored once the game has started.
    AddPlayer { name: String },

    /// Deal and begin play. Ignored with fewer than two players.
    Start,

    /// Play the card at `card_index` of `player`'s hand.
    PlayCard { player: PlayerId, card_index: usize },

    /// Clear the room back to an empty lobby.
    Reset,
}
