//! Rank-labeled piles and the deal cycle.

use alloc::vec::Vec;

use crate::card::{Card, RANKS, Rank};

/// A pile on the table, keyed by a rank label.
///
/// Index 0 is the first card ever dealt here and the last index is the
/// most recent arrival. Cards can be removed but never reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    label: Rank,
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile with the given label.
    #[must_use]
    pub const fn new(label: Rank) -> Self {
        Self {
            label,
            cards: Vec::new(),
        }
    }

    /// Returns the pile's label.
    #[must_use]
    pub const fn label(&self) -> Rank {
        self.label
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Adds a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the card at `index`, shifting later cards down by one.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the positions eligible for play.
    ///
    /// The base card (index 0) is always eligible. The newest card is
    /// eligible too while this pile is the active pile. The result is
    /// ascending and never holds duplicates.
    #[must_use]
    pub fn playable_indices(&self, active: bool) -> Vec<usize> {
        let Some(last) = self.cards.len().checked_sub(1) else {
            return Vec::new();
        };

        let mut indices = alloc::vec![0];
        if active && last != 0 {
            indices.push(last);
        }
        indices
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A stop in the deal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealSlot {
    /// Deal onto the pile with this label.
    Pile(Rank),
    /// Deal straight onto the draw pile.
    Draw,
}

/// Number of slots in one pass of the deal cycle.
pub const DEAL_CYCLE_LEN: usize = RANKS.len() + 1;

/// Builds the deal cycle: every pile label in order, with the draw slot
/// inserted right after `draw_after`.
#[must_use]
pub fn deal_cycle(draw_after: Rank) -> [DealSlot; DEAL_CYCLE_LEN] {
    let mut cycle = [DealSlot::Draw; DEAL_CYCLE_LEN];
    let mut slot = 0;

    for rank in RANKS {
        cycle[slot] = DealSlot::Pile(rank);
        slot += 1;
        if rank == draw_after {
            cycle[slot] = DealSlot::Draw;
            slot += 1;
        }
    }

    cycle
}

/// Creates the thirteen empty piles, indexed by [`Rank::index`].
#[must_use]
pub fn empty_piles() -> [Pile; 13] {
    RANKS.map(Pile::new)
}
