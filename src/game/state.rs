//! Game status and table snapshot types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::foundation::FoundationKey;

/// Terminal status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Moves or draws remain.
    #[default]
    Ongoing,
    /// All eight foundations are complete.
    Won,
    /// The draw pile is exhausted and no playable card fits a foundation.
    Stalemate,
}

impl GameStatus {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// A pile as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PileView {
    /// The pile's label.
    pub label: Rank,
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Positions that may currently be played.
    pub playable: Vec<usize>,
}

/// A foundation as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundationView {
    /// Which foundation this is.
    pub key: FoundationKey,
    /// Number of cards on it.
    pub len: usize,
    /// Top card text, or `A→K` / `K→A` while empty.
    pub top: String,
}

/// Owned copy of everything a renderer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// The thirteen piles in label order.
    pub piles: Vec<PileView>,
    /// Cards left in the draw pile.
    pub draw_pile_len: usize,
    /// The eight foundations in table order.
    pub foundations: Vec<FoundationView>,
    /// The pile that last received a drawn card.
    pub active_pile: Option<Rank>,
    /// Current status.
    pub status: GameStatus,
}
