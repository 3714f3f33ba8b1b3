use alloc::vec::Vec;

use log::{debug, info};

use crate::card::{RANKS, Rank};
use crate::error::{DrawError, PlayError};
use crate::result::{DrawOutcome, Move, PlayOutcome};

use super::{Game, GameStatus};

impl Game {
    /// Draws the top card of the draw pile onto the pile matching its rank.
    ///
    /// That pile becomes the active pile, so its newest card is playable
    /// until another draw lands elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DrawEmpty`] if the draw pile is empty. Nothing is
    /// mutated; the error carries the result of the terminal check.
    pub fn draw(&mut self) -> Result<DrawOutcome, DrawError> {
        let Some(card) = self.draw_pile.pop() else {
            let status = self.check_game_end();
            debug!("draw pile empty, status {status:?}");
            return Err(DrawError::DrawEmpty { status });
        };

        let label = card.rank;
        self.active_pile = Some(label);
        self.piles[label.index()].push(card);
        debug!(
            "drew {card} onto pile {label}, {} left",
            self.draw_pile.len()
        );

        Ok(DrawOutcome {
            card,
            pile: label,
            status: self.check_game_end(),
        })
    }

    /// Plays the card at `index` of `label`'s pile to a foundation.
    ///
    /// The ascending foundation is used when it accepts the card, otherwise
    /// the descending one. Later cards in the pile shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidIndex`] if the position is not currently
    /// playable, or [`PlayError::NotEligibleForFoundation`] if neither
    /// foundation accepts the card. Nothing is mutated on error.
    pub fn play_card(&mut self, label: Rank, index: usize) -> Result<PlayOutcome, PlayError> {
        if !self.playable_indices(label).contains(&index) {
            return Err(PlayError::InvalidIndex);
        }

        let pile = &mut self.piles[label.index()];
        let card = pile.get(index).ok_or(PlayError::InvalidIndex)?;
        let foundation = self
            .foundations
            .push(card)
            .ok_or(PlayError::NotEligibleForFoundation)?;
        pile.remove(index);
        debug!("played {card} from pile {label}[{index}] to {foundation:?}");

        Ok(PlayOutcome {
            card,
            pile: label,
            index,
            foundation,
            status: self.check_game_end(),
        })
    }

    /// Lists every play that would currently succeed, in pile label order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for label in RANKS {
            let pile = self.pile(label);
            for index in self.playable_indices(label) {
                let Some(card) = pile.get(index) else {
                    continue;
                };
                if let Some(foundation) = self.foundations.target_for(card) {
                    moves.push(Move {
                        pile: label,
                        index,
                        card,
                        foundation,
                    });
                }
            }
        }

        moves
    }

    /// Evaluates the terminal status of the table.
    ///
    /// The game is won once all eight foundations are complete. It is a
    /// stalemate when the draw pile is empty and no playable card fits a
    /// foundation. A win takes priority.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.foundations.is_complete() {
            return GameStatus::Won;
        }

        let stuck = RANKS.iter().all(|&label| {
            let pile = self.pile(label);
            self.playable_indices(label)
                .into_iter()
                .filter_map(|index| pile.get(index))
                .all(|card| !self.can_move_to_foundation(card))
        });

        if stuck && self.draw_pile.is_empty() {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    fn check_game_end(&self) -> GameStatus {
        let status = self.status();
        match status {
            GameStatus::Won => info!("all foundations complete"),
            GameStatus::Stalemate => info!("no moves left and draw pile is empty"),
            GameStatus::Ongoing => {}
        }
        status
    }
}
