//! Foundations: one ascending and one descending run per suit.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, RANKS, Rank, SUITS, Suit};

/// Build direction of a foundation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Built upward from Ace to King.
    Ascending,
    /// Built downward from King to Ace.
    Descending,
}

impl Direction {
    /// The rank that starts an empty foundation.
    #[must_use]
    pub const fn base(self) -> Rank {
        match self {
            Self::Ascending => Rank::Ace,
            Self::Descending => Rank::King,
        }
    }

    /// The rank that follows `top` in this direction.
    #[must_use]
    pub fn follow(self, top: Rank) -> Option<Rank> {
        match self {
            Self::Ascending => top.next(),
            Self::Descending => top.prev(),
        }
    }

    /// Text shown in place of an empty foundation.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Ascending => "A→K",
            Self::Descending => "K→A",
        }
    }
}

/// Identifies one of the eight foundations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoundationKey {
    /// The suit the foundation collects.
    pub suit: Suit,
    /// The build direction.
    pub direction: Direction,
}

impl FoundationKey {
    /// Creates a new key.
    #[must_use]
    pub const fn new(suit: Suit, direction: Direction) -> Self {
        Self { suit, direction }
    }

    /// Slot of this key inside a [`FoundationSet`].
    #[must_use]
    pub const fn index(self) -> usize {
        let offset = match self.direction {
            Direction::Ascending => 0,
            Direction::Descending => 1,
        };
        self.suit.index() * 2 + offset
    }
}

/// All foundation keys in table order: each suit's ascending run, then its
/// descending run.
pub const FOUNDATION_KEYS: [FoundationKey; 8] = {
    let mut keys = [FoundationKey::new(Suit::Spades, Direction::Ascending); 8];
    let mut i = 0;
    while i < SUITS.len() {
        keys[i * 2] = FoundationKey::new(SUITS[i], Direction::Ascending);
        keys[i * 2 + 1] = FoundationKey::new(SUITS[i], Direction::Descending);
        i += 1;
    }
    keys
};

/// A single foundation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foundation {
    key: FoundationKey,
    cards: Vec<Card>,
}

impl Foundation {
    /// Creates an empty foundation.
    #[must_use]
    pub const fn new(key: FoundationKey) -> Self {
        Self {
            key,
            cards: Vec::new(),
        }
    }

    /// Returns the foundation's key.
    #[must_use]
    pub const fn key(&self) -> FoundationKey {
        self.key
    }

    /// Returns the cards in the order they were played.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// The rank this foundation is waiting for, or `None` once complete.
    #[must_use]
    pub fn wants(&self) -> Option<Rank> {
        match self.top() {
            None => Some(self.key.direction.base()),
            Some(top) => self.key.direction.follow(top.rank),
        }
    }

    /// Returns whether `card` may be placed here.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        card.suit == self.key.suit && self.wants() == Some(card.rank)
    }

    /// Returns whether all thirteen ranks are on this foundation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == RANKS.len()
    }

    /// Returns the top card's text, or the direction placeholder.
    #[must_use]
    pub fn top_label(&self) -> String {
        self.top().map_or_else(
            || self.key.direction.placeholder().to_string(),
            |card| card.to_string(),
        )
    }

    /// Returns the number of cards on the foundation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the foundation is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

/// The eight foundations of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundationSet {
    foundations: [Foundation; 8],
}

impl FoundationSet {
    /// Creates eight empty foundations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            foundations: FOUNDATION_KEYS.map(Foundation::new),
        }
    }

    /// Returns the foundation for `key`.
    #[must_use]
    pub const fn get(&self, key: FoundationKey) -> &Foundation {
        &self.foundations[key.index()]
    }

    /// Iterates over all foundations in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Foundation> {
        self.foundations.iter()
    }

    /// Picks the foundation `card` would move to.
    ///
    /// The ascending run is preferred when both would accept the card.
    #[must_use]
    pub fn target_for(&self, card: Card) -> Option<FoundationKey> {
        [Direction::Ascending, Direction::Descending]
            .into_iter()
            .map(|direction| FoundationKey::new(card.suit, direction))
            .find(|&key| self.get(key).accepts(card))
    }

    /// Returns whether `card` can move to either of its suit's foundations.
    #[must_use]
    pub fn can_accept(&self, card: Card) -> bool {
        self.target_for(card).is_some()
    }

    /// Places `card` on its target foundation and returns the key used.
    ///
    /// Returns `None`, leaving the set untouched, if no foundation accepts it.
    pub fn push(&mut self, card: Card) -> Option<FoundationKey> {
        let key = self.target_for(card)?;
        self.foundations[key.index()].push(card);
        Some(key)
    }

    /// Returns whether every foundation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// Total cards across all foundations.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.foundations.iter().map(Foundation::len).sum()
    }
}

impl Default for FoundationSet {
    fn default() -> Self {
        Self::new()
    }
}
