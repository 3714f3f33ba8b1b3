//! Deck construction.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECKS, RANKS, SUITS, TOTAL_CARDS};

/// Builds the shuffled draw sequence: two copies of each of the 52 cards.
///
/// The shuffle is driven entirely by `rng`, so a seeded generator yields
/// the same deck every time.
///
/// # Example
///
/// ```
/// use ddsol::{TOTAL_CARDS, build_deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let deck = build_deck(&mut rng);
/// assert_eq!(deck.len(), TOTAL_CARDS);
/// ```
pub fn build_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = Vec::with_capacity(TOTAL_CARDS);

    for _ in 0..DECKS {
        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards.shuffle(rng);
    cards
}
