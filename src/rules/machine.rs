//! The game state machine: every command transition.
//!
//! All transitions are pure value functions: they take the current
//! snapshot by reference and return the successor, leaving the input
//! untouched (`im` vectors make the working copy cheap). A rejected
//! command returns the unchanged state: structural equality is the
//! rejection signal, not an error value.

use im::Vector;

use crate::cards::{deck, Card, Rank, Suit};
use crate::core::command::Command;
use crate::core::player::{Player, PlayerId};
use crate::core::state::{GameState, PoolEntry};

use super::trick;

/// Seats are `u8` indices; a full roster rejects further joins.
const MAX_PLAYERS: usize = u8::MAX as usize;

impl GameState {
    /// Apply a command, producing the successor snapshot.
    #[must_use]
    pub fn apply(&self, command: &Command) -> GameState {
        match command {
            Command::AddPlayer { name } => self.add_player(name),
            Command::Start => self.start(),
            Command::PlayCard { player, card_index } => self.play_card(*player, *card_index),
            Command::Reset => self.reset(),
        }
    }

    /// Append a player with an empty hand to the lobby.
    ///
    /// No-op once the game has started, or when the roster is full.
    /// Names carry no uniqueness constraint.
    #[must_use]
    pub fn add_player(&self, name: &str) -> GameState {
        if self.started || self.players.len() >= MAX_PLAYERS {
            return self.clone();
        }
        let mut next = self.clone();
        next.players.push_back(Player::new(name));
        next
    }

    /// Deal a fresh shuffled deck and begin play.
    ///
    /// No-op with fewer than two players. Cards are dealt round-robin
    /// one at a time until the deck is exhausted, so hand sizes differ
    /// by at most one. The holder of the Ace of Spades leads.
    #[must_use]
    pub fn start(&self) -> GameState {
        if self.players.len() < 2 {
            return self.clone();
        }

        let mut next = self.clone();
        let cards = deck::shuffled(&mut next.rng);
        debug_assert!(deck::is_standard(&cards));

        let n = next.players.len();
        let mut hands = vec![Vector::new(); n];
        for (i, card) in cards.into_iter().enumerate() {
            hands[i % n].push_back(card);
        }
        for (idx, hand) in hands.into_iter().enumerate() {
            if let Some(player) = next.players.get_mut(idx) {
                player.hand = hand;
                player.elimination_order = None;
            }
        }

        next.started = true;
        next.pool.clear();
        next.pool_suit = None;
        next.current_player = leader_after_deal(&next.players);
        next.plays_this_trick = 0;
        next.trick_size = 0;
        next.elimination_order.clear();
        next
    }

    /// Play the card at `card_index` of `player`'s hand.
    ///
    /// The sole gameplay transition. Rejected (unchanged state) if the
    /// game has not started, it is not `player`'s turn, the index is
    /// out of range, or the play breaks the must-follow-suit rule. A
    /// player void of the pool suit may play anything; that entitled
    /// slough is what arms the punishment.
    #[must_use]
    pub fn play_card(&self, player: PlayerId, card_index: usize) -> GameState {
        if !self.started || player != self.current_player {
            return self.clone();
        }
        let Some(actor) = self.player(player) else {
            return self.clone();
        };
        let Some(&card) = actor.hand.get(card_index) else {
            return self.clone();
        };
        if let Some(suit) = self.pool_suit {
            if card.suit != suit && actor.has_suit(suit) {
                return self.clone();
            }
        }

        let mut next = self.clone();
        if next.pool.is_empty() {
            // the leading play opens the trick and fixes its size
            let alive = next.alive_count();
            next.trick_size = if alive == 0 {
                next.player_count() as u32
            } else {
                alive as u32
            };
        }
        if let Some(actor) = next.players.get_mut(player.index()) {
            actor.hand.remove(card_index);
        }
        if next.pool_suit.is_none() {
            next.pool_suit = Some(card.suit);
        }
        next.pool.push_back(PoolEntry { player, card });
        next.plays_this_trick += 1;

        if next.plays_this_trick >= next.trick_size {
            trick::resolve(&mut next);
        } else {
            next.current_player = next.next_alive_after(player);
        }
        next
    }

    /// Clear the room back to an empty lobby.
    ///
    /// The RNG stream carries forward, so the next game in the room
    /// deals a fresh shuffle while the whole room history stays
    /// reproducible from the construction seed.
    #[must_use]
    pub fn reset(&self) -> GameState {
        let mut next = self.clone();
        next.players.clear();
        next.started = false;
        next.pool.clear();
        next.pool_suit = None;
        next.current_player = PlayerId::new(0);
        next.plays_this_trick = 0;
        next.trick_size = 0;
        next.elimination_order.clear();
        next
    }
}

/// Seat holding the Ace of Spades. A full standard deck always places
/// it somewhere; seat 0 leads if it is missing.
fn leader_after_deal(players: &Vector<Player>) -> PlayerId {
    let ace_of_spades = Card::new(Suit::Spade, Rank::Ace);
    players
        .iter()
        .position(|p| p.hand.contains(&ace_of_spades))
        .map_or(PlayerId::new(0), |idx| PlayerId::new(idx as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lobby(names: &[&str]) -> GameState {
        let mut state = GameState::new(42);
        for name in names {
            state = state.add_player(name);
        }
        state
    }

    #[test]
    fn test_add_player_appends_to_lobby() {
        let state = lobby(&["ada", "grace"]);

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.players[0].name, "ada");
        assert_eq!(state.players[1].name, "grace");
        assert!(!state.started);
    }

    #[test]
    fn test_add_player_allows_duplicate_names() {
        let state = lobby(&["ada", "ada"]);
        assert_eq!(state.player_count(), 2);
    }

    #[test]
    fn test_add_player_rejected_once_started() {
        let game = lobby(&["ada", "grace"]).start();
        let after = game.add_player("late");

        assert_eq!(after, game);
    }

    #[test]
    fn test_start_requires_two_players() {
        let solo = lobby(&["ada"]);
        let after = solo.start();

        assert_eq!(after, solo);
        assert!(!after.started);
    }

    #[test]
    fn test_start_deals_whole_deck_round_robin() {
        for n in 2..=6 {
            let names: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
            let mut state = GameState::new(99);
            for name in &names {
                state = state.add_player(name);
            }
            let game = state.start();

            assert!(game.started);
            let total: usize = game.players.iter().map(|p| p.hand.len()).sum();
            assert_eq!(total, deck::DECK_SIZE);

            let sizes: Vec<usize> = game.players.iter().map(|p| p.hand.len()).collect();
            let min = sizes.iter().min().unwrap();
            let max = sizes.iter().max().unwrap();
            assert!(max - min <= 1, "uneven deal for {n} players: {sizes:?}");
        }
    }

    #[test]
    fn test_start_leader_holds_ace_of_spades() {
        let game = lobby(&["ada", "grace", "edsger"]).start();
        let leader = game.player(game.current_player).unwrap();

        assert!(leader.hand.contains(&Card::new(Suit::Spade, Rank::Ace)));
    }

    #[test]
    fn test_leader_fallback_without_ace_of_spades() {
        // unreachable with a standard deck: seat 0 leads by default
        let mut players = Vector::new();
        let mut p = Player::new("a");
        p.hand.push_back(Card::new(Suit::Hearts, Rank::Two));
        players.push_back(p);
        players.push_back(Player::new("b"));

        assert_eq!(leader_after_deal(&players), PlayerId::new(0));
    }

    #[test]
    fn test_leading_play_fixes_trick_size() {
        let game = lobby(&["ada", "grace", "edsger"]).start();
        let after = game.play_card(game.current_player, 0);

        assert_eq!(after.trick_size, 3);
        assert_eq!(after.plays_this_trick, 1);
        assert_eq!(after.pool.len(), 1);
        assert_eq!(after.pool_suit, Some(after.pool[0].card.suit));
    }

    #[test]
    fn test_play_rejected_before_start() {
        let state = lobby(&["ada", "grace"]);
        let after = state.play_card(PlayerId::new(0), 0);

        assert_eq!(after, state);
    }

    #[test]
    fn test_play_rejected_out_of_turn() {
        let game = lobby(&["ada", "grace"]).start();
        let wrong = game.next_alive_after(game.current_player);
        let after = game.play_card(wrong, 0);

        assert_eq!(after, game);
    }

    #[test]
    fn test_play_rejected_out_of_range() {
        let game = lobby(&["ada", "grace"]).start();
        let after = game.play_card(game.current_player, 99);

        assert_eq!(after, game);
    }

    #[test]
    fn test_reset_clears_the_room() {
        let game = lobby(&["ada", "grace"]).start();
        let cleared = game.reset();

        assert_eq!(cleared.player_count(), 0);
        assert!(!cleared.started);
        assert!(cleared.pool.is_empty());
        assert_eq!(cleared.pool_suit, None);
        assert!(cleared.elimination_order.is_empty());
    }

    #[test]
    fn test_reset_advances_the_shuffle() {
        let first = lobby(&["ada", "grace"]).start();
        let second = first.reset().add_player("ada").add_player("grace").start();

        // same room, fresh deal: the RNG stream moved on
        let hand0 = |g: &GameState| g.players[0].hand.clone();
        assert_ne!(hand0(&first), hand0(&second));
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let state = GameState::new(42)
            .apply(&Command::AddPlayer {
                name: "ada".to_string(),
            })
            .apply(&Command::AddPlayer {
                name: "grace".to_string(),
            })
            .apply(&Command::Start);

        assert!(state.started);

        let leader = state.current_player;
        let after = state.apply(&Command::PlayCard {
            player: leader,
            card_index: 0,
        });
        assert_eq!(after.pool.len(), 1);

        let reset = after.apply(&Command::Reset);
        assert_eq!(reset.player_count(), 0);
    }
}
