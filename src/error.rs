//! Error types for game operations.

use thiserror::Error;

use crate::game::GameStatus;

/// Errors that can occur when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The draw pile is empty. Carries the status from the terminal check
    /// that an empty draw triggers.
    #[error("draw pile is empty")]
    DrawEmpty {
        /// Status after the terminal check.
        status: GameStatus,
    },
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The position is not currently playable.
    #[error("that card is not currently playable")]
    InvalidIndex,
    /// The card cannot go onto either of its suit's foundations.
    #[error("card cannot move to a foundation")]
    NotEligibleForFoundation,
}

/// Error returned when parsing a rank label fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown rank label")]
pub struct ParseRankError;
