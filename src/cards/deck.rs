//! Deck construction and shuffling.
//!
//! A deck is a plain `Vec<Card>`: 4 suits × 13 ranks, 52 unique cards.
//! Shuffling is a full Fisher–Yates permutation driven by the engine's
//! deterministic RNG; a partial or biased shuffle is a correctness
//! defect, not a style choice.

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// The full 52-card deck in enumeration order (suit-major).
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// A freshly built deck in uniformly random order.
///
/// Consumes randomness from `rng`; the same RNG state always yields the
/// same permutation.
#[must_use]
pub fn shuffled(rng: &mut GameRng) -> Vec<Card> {
    let mut cards = standard();
    rng.shuffle(&mut cards);
    cards
}

/// Check that `cards` is a complete standard deck: 52 cards, every
/// (suit, rank) pair exactly once.
#[must_use]
pub fn is_standard(cards: &[Card]) -> bool {
    if cards.len() != DECK_SIZE {
        return false;
    }
    let unique: FxHashSet<Card> = cards.iter().copied().collect();
    unique.len() == DECK_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = standard();
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(is_standard(&deck));
    }

    #[test]
    fn test_shuffled_deck_is_complete() {
        let mut rng = GameRng::new(42);
        let deck = shuffled(&mut rng);
        assert!(is_standard(&deck));
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_shuffle_permutes() {
        let mut rng = GameRng::new(42);
        let deck = shuffled(&mut rng);

        // 52! permutations; hitting the identity by chance is not a thing
        assert_ne!(deck, standard());
    }

    #[test]
    fn test_is_standard_rejects_duplicates() {
        let mut deck = standard();
        deck[0] = deck[1];
        assert!(!is_standard(&deck));
    }

    #[test]
    fn test_is_standard_rejects_short_deck() {
        let mut deck = standard();
        deck.pop();
        assert!(!is_standard(&deck));
    }
}
