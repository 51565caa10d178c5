//! Engine core: players, commands, state, RNG, and the snapshot codec.
//!
//! Everything here is data; the transitions that act on it live in
//! `rules`.

pub mod command;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use command::Command;
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PoolEntry};
