//! Byte codec for state snapshots.
//!
//! The engine assumes some external key-value store keyed by room id;
//! it never reads or writes storage itself. These helpers produce and
//! consume the bytes such a store holds. Decoding untrusted or corrupt
//! bytes is the engine's only fallible boundary.

use crate::core::state::GameState;

/// Encode a snapshot to bytes for an external store.
pub fn encode(state: &GameState) -> Result<Vec<u8>, bincode::Error> {
    bincode::serialize(state)
}

/// Decode a snapshot previously produced by [`encode`].
///
/// The restored state carries the RNG position, so a game resumed from
/// storage behaves identically to one that never left memory.
pub fn decode(bytes: &[u8]) -> Result<GameState, bincode::Error> {
    bincode::deserialize(bytes)
}
