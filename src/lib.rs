//! A double deck solitaire rule engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals 104 cards onto thirteen
//! rank-labeled piles and a draw pile, tracks which pile positions are
//! playable, builds an ascending and a descending foundation per suit, and
//! reports wins and stalemates.
//!
//! # Example
//!
//! ```
//! use ddsol::{DrawError, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! loop {
//!     while let Some(play) = game.legal_moves().first().copied() {
//!         game.play_card(play.pile, play.index).unwrap();
//!     }
//!     if let Err(DrawError::DrawEmpty { status }) = game.draw() {
//!         assert!(status.is_terminal());
//!         break;
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod foundation;
pub mod game;
pub mod options;
pub mod pile;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, DECKS, RANKS, Rank, SUITS, Suit, TOTAL_CARDS};
pub use deck::build_deck;
pub use error::{DrawError, ParseRankError, PlayError};
pub use foundation::{Direction, FOUNDATION_KEYS, Foundation, FoundationKey, FoundationSet};
pub use game::{FoundationView, Game, GameStatus, PileView, TableSnapshot};
pub use options::GameOptions;
pub use pile::{DEAL_CYCLE_LEN, DealSlot, Pile, deal_cycle};
pub use result::{DrawOutcome, Move, PlayOutcome};
