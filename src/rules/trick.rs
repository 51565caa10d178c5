//! Trick resolution.
//!
//! Invoked by the state machine once a trick has its full complement of
//! plays. Decides between the two outcomes:
//!
//! - **Punishment**: some player sloughed an off-suit card they were
//!   entitled to (void of the pool suit). The whole pool is dumped into
//!   the hand of whoever played the heaviest pool-suit card.
//! - **Normal resolution**: everyone followed suit; the heaviest
//!   pool-suit card wins the trick and the pool leaves play entirely.
//!
//! Either way the next leader is the first alive seat strictly after
//! the receiver, newly empty hands are recorded in elimination order,
//! and the game ends once at most one player still holds cards.

use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::player::PlayerId;
use crate::core::state::{GameState, PoolEntry};

/// Resolve a completed trick in place on the machine's working copy.
///
/// Total: an empty pool (never produced by the machine) resolves to a
/// no-op rather than a panic.
pub(crate) fn resolve(state: &mut GameState) {
    let Some(pool_suit) = state.pool_suit else {
        return;
    };
    let Some(first) = state.pool.front().map(|e| e.player) else {
        return;
    };

    let punished = state
        .pool
        .iter()
        .any(|entry| was_exempt(state, entry, pool_suit));

    // Heaviest pool-suit card picks the receiver in both branches;
    // a pool with no pool-suit card at all falls back to the opener.
    let receiver = heaviest_of_suit(state, pool_suit).unwrap_or(first);

    if punished {
        let collected: SmallVec<[Card; 8]> = state.pool.iter().map(|e| e.card).collect();
        if let Some(victim) = state.players.get_mut(receiver.index()) {
            for card in collected {
                victim.hand.push_back(card);
            }
        }
    }
    // Normal resolution: the pool is discarded, not returned to anyone.

    state.pool.clear();
    state.pool_suit = None;
    state.plays_this_trick = 0;
    state.trick_size = 0;

    state.current_player = state.next_alive_after(receiver);

    sweep_eliminations(state);

    if state.alive_count() <= 1 {
        state.started = false;
    }
}

/// An entry arms the punishment if it is off-suit and its player held
/// no pool-suit card at the time of play. Hands only shrink mid-trick
/// and the played card is off-suit here, so the current hand alone
/// decides voidness.
fn was_exempt(state: &GameState, entry: &PoolEntry, pool_suit: Suit) -> bool {
    entry.card.suit != pool_suit
        && !state
            .player(entry.player)
            .is_some_and(|p| p.has_suit(pool_suit))
}

/// Seat that played the heaviest pool-suit card, if any entry matches.
fn heaviest_of_suit(state: &GameState, pool_suit: Suit) -> Option<PlayerId> {
    state
        .pool
        .iter()
        .filter(|e| e.card.suit == pool_suit)
        .min_by_key(|e| e.card.weight())
        .map(|e| e.player)
}

/// Record every newly empty-handed seat, in ascending seat order, and
/// stamp its 1-based position. Idempotent: seats already recorded are
/// never appended twice.
fn sweep_eliminations(state: &mut GameState) {
    for idx in 0..state.players.len() {
        let seat = PlayerId::new(idx as u8);
        if state.players[idx].is_alive() || state.elimination_order.contains(&seat) {
            continue;
        }
        state.elimination_order.push_back(seat);
        let position = state.elimination_order.len() as u32;
        if let Some(player) = state.players.get_mut(idx) {
            player.elimination_order = Some(position);
        }
    }
}
