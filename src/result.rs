//! Action outcome types.

use crate::card::{Card, Rank};
use crate::foundation::FoundationKey;
use crate::game::GameStatus;

/// Result of a successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The card taken from the draw pile.
    pub card: Card,
    /// The pile it was placed on, which is now the active pile.
    pub pile: Rank,
    /// Status after the draw.
    pub status: GameStatus,
}

/// Result of a successful play to a foundation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The card that moved.
    pub card: Card,
    /// Label of the pile it came from.
    pub pile: Rank,
    /// Position it occupied in that pile.
    pub index: usize,
    /// The foundation it landed on.
    pub foundation: FoundationKey,
    /// Status after the play.
    pub status: GameStatus,
}

/// A play that would currently succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Label of the source pile.
    pub pile: Rank,
    /// Position within the pile.
    pub index: usize,
    /// The card at that position.
    pub card: Card,
    /// The foundation it would land on.
    pub foundation: FoundationKey,
}
