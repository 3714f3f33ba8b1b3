//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANKS, Rank};
use crate::deck::build_deck;
use crate::foundation::{FoundationKey, FoundationSet};
use crate::options::GameOptions;
use crate::pile::{Pile, empty_piles};

mod actions;
mod dealer;
pub mod state;

pub use state::{FoundationView, GameStatus, PileView, TableSnapshot};

/// A double deck solitaire game.
///
/// The game exclusively owns every card on the table. All mutation goes
/// through [`Game::draw`] and [`Game::play_card`]; each either applies in
/// full or returns an error and leaves the table untouched.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The thirteen piles, indexed by [`Rank::index`].
    pub piles: [Pile; 13],
    /// The draw pile. The last card is drawn first.
    pub draw_pile: Vec<Card>,
    /// The eight foundations.
    pub foundations: FoundationSet,
    /// The pile that most recently received a drawn card.
    pub active_pile: Option<Rank>,
}

impl Game {
    /// Creates and deals a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use ddsol::{Game, GameOptions, TOTAL_CARDS};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_in_play(), TOTAL_CARDS);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates and deals a new game, shuffling with `rng`.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        let deck = build_deck(rng);
        Self::from_deck(options, deck)
    }

    /// Creates a game by dealing `deck` front to back.
    ///
    /// The deck is not checked for completeness, which lets callers set up
    /// small tables.
    #[must_use]
    pub fn from_deck(options: GameOptions, deck: Vec<Card>) -> Self {
        let mut game = Self {
            options,
            piles: empty_piles(),
            draw_pile: Vec::new(),
            foundations: FoundationSet::new(),
            active_pile: None,
        };
        game.deal(deck);
        game
    }

    /// Returns all piles in label order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Returns the pile with the given label.
    #[must_use]
    pub const fn pile(&self, label: Rank) -> &Pile {
        &self.piles[label.index()]
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the foundations.
    #[must_use]
    pub const fn foundations(&self) -> &FoundationSet {
        &self.foundations
    }

    /// Returns the top card text of a foundation, or its placeholder
    /// (`A→K` or `K→A`) while it is empty.
    #[must_use]
    pub fn foundation_top_label(&self, key: FoundationKey) -> String {
        self.foundations.get(key).top_label()
    }

    /// Returns the active pile label.
    #[must_use]
    pub const fn active_pile(&self) -> Option<Rank> {
        self.active_pile
    }

    /// Returns the number of cards across piles, draw pile, and foundations.
    ///
    /// Always [`TOTAL_CARDS`](crate::TOTAL_CARDS) for a game dealt from a
    /// full deck.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let on_piles: usize = self.piles.iter().map(Pile::len).sum();
        on_piles + self.draw_pile.len() + self.foundations.card_count()
    }

    /// Returns the positions of `label`'s pile that may currently be played.
    ///
    /// Index 0 is playable whenever the pile has cards. The newest card is
    /// also playable while `label` is the active pile.
    #[must_use]
    pub fn playable_indices(&self, label: Rank) -> Vec<usize> {
        self.pile(label)
            .playable_indices(self.active_pile == Some(label))
    }

    /// Returns whether `card` can move to one of its suit's foundations.
    #[must_use]
    pub fn can_move_to_foundation(&self, card: Card) -> bool {
        self.foundations.can_accept(card)
    }

    /// Builds an owned view of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        let piles = RANKS
            .iter()
            .map(|&label| PileView {
                label,
                cards: self.pile(label).cards().to_vec(),
                playable: self.playable_indices(label),
            })
            .collect();

        let foundations = self
            .foundations
            .iter()
            .map(|foundation| FoundationView {
                key: foundation.key(),
                len: foundation.len(),
                top: foundation.top_label(),
            })
            .collect();

        TableSnapshot {
            piles,
            draw_pile_len: self.draw_pile.len(),
            foundations,
            active_pile: self.active_pile,
            status: self.status(),
        }
    }
}
