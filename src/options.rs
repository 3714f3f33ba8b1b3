//! Game configuration options.

use alloc::vec::Vec;

use crate::card::Rank;

/// Configuration options for the deal.
///
/// The defaults are the standard double deck rules. Use the builder
/// pattern to customize them:
///
/// ```
/// use ddsol::{GameOptions, Rank};
///
/// let options = GameOptions::default()
///     .with_ace_bonus(1)
///     .with_bonus_labels([Rank::King]);
/// assert_eq!(options.ace_bonus, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Pile labels that feed one extra card to the draw pile whenever
    /// they receive a card during the deal.
    pub bonus_labels: Vec<Rank>,
    /// Cards fed to the draw pile when an Ace is dealt onto a pile.
    pub ace_bonus: u8,
    /// Cards fed to the draw pile when a card is dealt onto the pile
    /// labelled with its own rank.
    pub match_bonus: u8,
    /// The pile label the draw slot follows in the deal cycle.
    pub draw_slot_after: Rank,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            bonus_labels: alloc::vec![Rank::Seven, Rank::Ten, Rank::King],
            ace_bonus: 2,
            match_bonus: 1,
            draw_slot_after: Rank::Ten,
        }
    }
}

impl GameOptions {
    /// Sets the labels that feed the draw pile.
    ///
    /// # Example
    ///
    /// ```
    /// use ddsol::{GameOptions, Rank};
    ///
    /// let options = GameOptions::default().with_bonus_labels([Rank::Two, Rank::Jack]);
    /// assert_eq!(options.bonus_labels, vec![Rank::Two, Rank::Jack]);
    /// ```
    #[must_use]
    pub fn with_bonus_labels(mut self, labels: impl IntoIterator<Item = Rank>) -> Self {
        self.bonus_labels = labels.into_iter().collect();
        self
    }

    /// Sets how many cards an Ace feeds to the draw pile.
    ///
    /// # Example
    ///
    /// ```
    /// use ddsol::GameOptions;
    ///
    /// let options = GameOptions::default().with_ace_bonus(0);
    /// assert_eq!(options.ace_bonus, 0);
    /// ```
    #[must_use]
    pub fn with_ace_bonus(mut self, count: u8) -> Self {
        self.ace_bonus = count;
        self
    }

    /// Sets how many cards a rank-matches-label deal feeds to the draw pile.
    ///
    /// # Example
    ///
    /// ```
    /// use ddsol::GameOptions;
    ///
    /// let options = GameOptions::default().with_match_bonus(2);
    /// assert_eq!(options.match_bonus, 2);
    /// ```
    #[must_use]
    pub fn with_match_bonus(mut self, count: u8) -> Self {
        self.match_bonus = count;
        self
    }

    /// Sets the pile label the draw slot follows in the deal cycle.
    ///
    /// # Example
    ///
    /// ```
    /// use ddsol::{GameOptions, Rank};
    ///
    /// let options = GameOptions::default().with_draw_slot_after(Rank::King);
    /// assert_eq!(options.draw_slot_after, Rank::King);
    /// ```
    #[must_use]
    pub fn with_draw_slot_after(mut self, label: Rank) -> Self {
        self.draw_slot_after = label;
        self
    }

    /// Returns whether dealing onto `label` feeds the draw pile.
    #[must_use]
    pub fn is_bonus_label(&self, label: Rank) -> bool {
        self.bonus_labels.contains(&label)
    }
}
