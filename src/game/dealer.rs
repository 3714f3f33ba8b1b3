use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::debug;

use crate::card::{Card, Rank};
use crate::pile::{DealSlot, Pile, deal_cycle};

use super::Game;

impl Game {
    /// Deals `deck` onto the piles and the draw pile.
    ///
    /// Passes over the deal cycle until the deck runs out. A card dealt to
    /// the draw slot goes straight to the draw pile. A card dealt to a pile
    /// may then feed extra cards from the deck front to the draw pile, in
    /// this order:
    /// 1. the pile label is a bonus label,
    /// 2. the card is an Ace,
    /// 3. the card's rank matches the pile label.
    ///
    /// Each rule fires on its own and takes from whatever is left.
    pub(super) fn deal(&mut self, deck: Vec<Card>) {
        let mut deck = VecDeque::from(deck);
        let cycle = deal_cycle(self.options.draw_slot_after);

        while !deck.is_empty() {
            for slot in cycle {
                let Some(card) = deck.pop_front() else {
                    break;
                };

                let label = match slot {
                    DealSlot::Draw => {
                        self.draw_pile.push(card);
                        continue;
                    }
                    DealSlot::Pile(label) => label,
                };

                self.piles[label.index()].push(card);

                if self.options.is_bonus_label(label) {
                    self.feed_draw_pile(&mut deck, 1);
                }
                if card.rank == Rank::Ace {
                    self.feed_draw_pile(&mut deck, self.options.ace_bonus);
                }
                if card.rank == label {
                    self.feed_draw_pile(&mut deck, self.options.match_bonus);
                }
            }
        }

        debug!(
            "dealt {} cards to piles, {} to draw pile",
            self.piles.iter().map(Pile::len).sum::<usize>(),
            self.draw_pile.len()
        );
    }

    /// Moves up to `count` cards from the deck front to the draw pile.
    fn feed_draw_pile(&mut self, deck: &mut VecDeque<Card>, count: u8) {
        for _ in 0..count {
            let Some(card) = deck.pop_front() else {
                return;
            };
            self.draw_pile.push(card);
        }
    }
}
