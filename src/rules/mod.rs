//! Rules layer: the state machine and the trick resolver.
//!
//! The command transitions (`apply`, `add_player`, `start`,
//! `play_card`, `reset`) are implemented as methods on `GameState` in
//! `machine`. `trick` resolves a completed trick (punishment vs.
//! normal resolution, the next leader, elimination bookkeeping, and
//! the game-end check) and is only ever called by the machine.

pub mod machine;
mod trick;

// Re-export the boundary types for convenience
pub use crate::core::{Command, GameState};
