//! Game integration tests.

use ddsol::{
    Card, Direction, DrawError, FoundationKey, FoundationSet, Game, GameOptions, GameStatus,
    Pile, PlayError, RANKS, Rank, SUITS, Suit, TOTAL_CARDS,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn empty_game() -> Game {
    Game::from_deck(GameOptions::default(), Vec::new())
}

/// Fills both of `suit`'s foundations, stopping the ascending run at
/// `ascending_up_to`.
fn fill_suit(foundations: &mut FoundationSet, suit: Suit, ascending_up_to: Rank) {
    // Descending run first so the ascending run is not offered its cards.
    for rank in RANKS.iter().rev().take(12) {
        assert!(foundations.push(card(suit, *rank)).is_some());
    }
    assert_eq!(
        foundations.push(card(suit, Rank::Ace)),
        Some(FoundationKey::new(suit, Direction::Ascending))
    );
    assert_eq!(
        foundations.push(card(suit, Rank::Ace)),
        Some(FoundationKey::new(suit, Direction::Descending))
    );
    for rank in RANKS.iter().skip(1).filter(|rank| **rank <= ascending_up_to) {
        assert!(foundations.push(card(suit, *rank)).is_some());
    }
}

#[test]
fn rank_order_and_labels() {
    assert_eq!(Rank::Ace.prev(), None);
    assert_eq!(Rank::King.next(), None);
    assert_eq!(Rank::Ten.next(), Some(Rank::Jack));
    assert_eq!(Rank::Two.prev(), Some(Rank::Ace));
    assert!(Rank::Ace < Rank::Two && Rank::Queen < Rank::King);

    assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
    assert_eq!("q".parse::<Rank>(), Ok(Rank::Queen));
    assert!("11".parse::<Rank>().is_err());
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10♥");
}

#[test]
fn pile_playable_indices() {
    let mut pile = Pile::new(Rank::Four);
    assert!(pile.playable_indices(true).is_empty());
    assert!(pile.playable_indices(false).is_empty());

    pile.push(card(Suit::Spades, Rank::Nine));
    assert_eq!(pile.playable_indices(false), vec![0]);
    assert_eq!(pile.playable_indices(true), vec![0]);

    pile.push(card(Suit::Hearts, Rank::Two));
    pile.push(card(Suit::Clubs, Rank::Four));
    assert_eq!(pile.playable_indices(false), vec![0]);
    assert_eq!(pile.playable_indices(true), vec![0, 2]);
    assert!(pile.playable_indices(true).iter().all(|&i| i < pile.len()));
}

#[test]
fn pile_removal_shifts_later_cards() {
    let mut pile = Pile::new(Rank::Six);
    pile.push(card(Suit::Spades, Rank::Nine));
    pile.push(card(Suit::Hearts, Rank::Two));
    pile.push(card(Suit::Clubs, Rank::Four));

    assert_eq!(pile.remove(0), Some(card(Suit::Spades, Rank::Nine)));
    assert_eq!(
        pile.cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Four)]
    );
    assert_eq!(pile.remove(5), None);
    assert_eq!(pile.len(), 2);
    assert_eq!(pile.label(), Rank::Six);
}

#[test]
fn ace_and_king_open_foundations() {
    let mut foundations = FoundationSet::new();
    let ace = card(Suit::Spades, Rank::Ace);
    let king = card(Suit::Spades, Rank::King);

    assert!(foundations.can_accept(ace));
    assert!(foundations.can_accept(king));
    assert!(!foundations.can_accept(card(Suit::Spades, Rank::Two)));

    assert_eq!(
        foundations.push(ace),
        Some(FoundationKey::new(Suit::Spades, Direction::Ascending))
    );
    assert!(!foundations.can_accept(ace));
    assert!(foundations.can_accept(card(Suit::Spades, Rank::Two)));
    assert!(!foundations.can_accept(card(Suit::Hearts, Rank::Two)));

    assert_eq!(
        foundations.push(king),
        Some(FoundationKey::new(Suit::Spades, Direction::Descending))
    );
    assert!(!foundations.can_accept(king));
    assert!(foundations.can_accept(card(Suit::Spades, Rank::Queen)));
}

#[test]
fn ascending_run_completes_at_king() {
    let mut foundations = FoundationSet::new();
    let key = FoundationKey::new(Suit::Hearts, Direction::Ascending);

    for rank in RANKS {
        assert_eq!(foundations.push(card(Suit::Hearts, rank)), Some(key));
    }

    let run = foundations.get(key);
    assert_eq!(run.len(), 13);
    assert!(run.is_complete());
    assert_eq!(run.wants(), None);
    for rank in RANKS {
        assert_ne!(foundations.target_for(card(Suit::Hearts, rank)), Some(key));
    }
    // The other King starts the descending run.
    assert_eq!(
        foundations.target_for(card(Suit::Hearts, Rank::King)),
        Some(FoundationKey::new(Suit::Hearts, Direction::Descending))
    );
}

#[test]
fn ascending_is_preferred_when_both_accept() {
    let mut foundations = FoundationSet::new();
    for rank in [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine, Rank::Eight] {
        foundations.push(card(Suit::Clubs, rank));
    }
    for rank in [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
        foundations.push(card(Suit::Clubs, rank));
    }

    assert_eq!(
        foundations.push(card(Suit::Clubs, Rank::Seven)),
        Some(FoundationKey::new(Suit::Clubs, Direction::Ascending))
    );
    assert_eq!(
        foundations.push(card(Suit::Clubs, Rank::Seven)),
        Some(FoundationKey::new(Suit::Clubs, Direction::Descending))
    );
}

#[test]
fn draw_moves_card_to_matching_pile() {
    let mut game = empty_game();
    game.piles[Rank::Five.index()].push(card(Suit::Clubs, Rank::Nine));
    game.draw_pile.push(card(Suit::Hearts, Rank::Five));

    let outcome = game.draw().unwrap();
    assert_eq!(outcome.card, card(Suit::Hearts, Rank::Five));
    assert_eq!(outcome.pile, Rank::Five);
    assert_eq!(game.active_pile(), Some(Rank::Five));
    assert_eq!(game.pile(Rank::Five).len(), 2);
    assert_eq!(game.playable_indices(Rank::Five), vec![0, 1]);

    let before = game.piles.clone();
    assert!(matches!(game.draw(), Err(DrawError::DrawEmpty { .. })));
    assert_eq!(game.piles, before);
    assert_eq!(game.active_pile(), Some(Rank::Five));
}

#[test]
fn later_draw_moves_active_pile() {
    let mut game = empty_game();
    game.piles[Rank::Three.index()].push(card(Suit::Spades, Rank::Nine));
    game.draw_pile.push(card(Suit::Hearts, Rank::Seven));
    game.draw_pile.push(card(Suit::Hearts, Rank::Three));

    game.draw().unwrap();
    assert_eq!(game.playable_indices(Rank::Three), vec![0, 1]);

    game.draw().unwrap();
    assert_eq!(game.active_pile(), Some(Rank::Seven));
    assert_eq!(game.playable_indices(Rank::Three), vec![0]);
    assert_eq!(game.playable_indices(Rank::Seven), vec![0]);
}

#[test]
fn play_rejects_buried_card_without_mutation() {
    let mut game = empty_game();
    let pile = &mut game.piles[Rank::Nine.index()];
    pile.push(card(Suit::Spades, Rank::Nine));
    pile.push(card(Suit::Hearts, Rank::Ace));
    pile.push(card(Suit::Clubs, Rank::Four));

    let before = game.piles.clone();
    assert_eq!(game.play_card(Rank::Nine, 1), Err(PlayError::InvalidIndex));
    assert_eq!(game.play_card(Rank::Nine, 2), Err(PlayError::InvalidIndex));
    assert_eq!(game.play_card(Rank::Two, 0), Err(PlayError::InvalidIndex));
    assert_eq!(
        game.play_card(Rank::Nine, 0),
        Err(PlayError::NotEligibleForFoundation)
    );
    assert_eq!(game.piles, before);
    assert_eq!(game.foundations().card_count(), 0);
}

#[test]
fn play_moves_base_card_and_exposes_next() {
    let mut game = empty_game();
    let pile = &mut game.piles[Rank::Nine.index()];
    pile.push(card(Suit::Spades, Rank::Ace));
    pile.push(card(Suit::Spades, Rank::Two));
    pile.push(card(Suit::Clubs, Rank::Four));
    game.draw_pile.push(card(Suit::Hearts, Rank::Jack));

    let outcome = game.play_card(Rank::Nine, 0).unwrap();
    assert_eq!(outcome.card, card(Suit::Spades, Rank::Ace));
    assert_eq!(
        outcome.foundation,
        FoundationKey::new(Suit::Spades, Direction::Ascending)
    );
    assert_eq!(outcome.status, GameStatus::Ongoing);
    assert_eq!(
        game.pile(Rank::Nine).get(0),
        Some(card(Suit::Spades, Rank::Two))
    );

    game.play_card(Rank::Nine, 0).unwrap();
    let ascending = game
        .foundations()
        .get(FoundationKey::new(Suit::Spades, Direction::Ascending));
    assert_eq!(ascending.len(), 2);
    assert_eq!(game.pile(Rank::Nine).len(), 1);
}

#[test]
fn play_from_active_pile_top() {
    let mut game = empty_game();
    game.piles[Rank::King.index()].push(card(Suit::Spades, Rank::Nine));
    game.draw_pile.push(card(Suit::Diamonds, Rank::King));

    game.draw().unwrap();
    let outcome = game.play_card(Rank::King, 1).unwrap();
    assert_eq!(
        outcome.foundation,
        FoundationKey::new(Suit::Diamonds, Direction::Descending)
    );
    assert_eq!(game.pile(Rank::King).cards(), &[card(Suit::Spades, Rank::Nine)]);
    assert_eq!(game.playable_indices(Rank::King), vec![0]);
}

#[test]
fn active_pile_keeps_new_top_playable_after_play() {
    let mut game = empty_game();
    game.piles[Rank::King.index()].push(card(Suit::Spades, Rank::Nine));
    game.piles[Rank::King.index()].push(card(Suit::Clubs, Rank::Four));
    game.draw_pile.push(card(Suit::Diamonds, Rank::King));

    game.draw().unwrap();
    assert_eq!(game.playable_indices(Rank::King), vec![0, 2]);

    game.play_card(Rank::King, 2).unwrap();
    assert_eq!(game.active_pile(), Some(Rank::King));
    assert_eq!(game.playable_indices(Rank::King), vec![0, 1]);
    assert_eq!(
        game.pile(Rank::King).get(1),
        Some(card(Suit::Clubs, Rank::Four))
    );
}

#[test]
fn buried_playable_card_does_not_prevent_stalemate() {
    let mut game = empty_game();
    let pile = &mut game.piles[Rank::Four.index()];
    pile.push(card(Suit::Spades, Rank::Nine));
    pile.push(card(Suit::Hearts, Rank::Ace));
    pile.push(card(Suit::Clubs, Rank::Five));

    assert!(game.can_move_to_foundation(card(Suit::Hearts, Rank::Ace)));
    assert_eq!(game.active_pile(), None);
    assert!(game.draw_pile.is_empty());
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn stalemate_when_nothing_fits_and_draw_pile_empty() {
    let mut game = Game::from_deck(
        GameOptions::default(),
        vec![card(Suit::Spades, Rank::Five), card(Suit::Hearts, Rank::Nine)],
    );
    assert!(game.draw_pile.is_empty());
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert_eq!(
        game.draw(),
        Err(DrawError::DrawEmpty {
            status: GameStatus::Stalemate
        })
    );
}

#[test]
fn draw_pile_keeps_game_going() {
    let mut game = Game::from_deck(
        GameOptions::default(),
        vec![card(Suit::Spades, Rank::Five), card(Suit::Hearts, Rank::Nine)],
    );
    game.draw_pile.push(card(Suit::Clubs, Rank::Eight));
    assert_eq!(game.status(), GameStatus::Ongoing);

    let outcome = game.draw().unwrap();
    assert_eq!(outcome.status, GameStatus::Stalemate);
}

#[test]
fn empty_draw_with_moves_left_is_ongoing() {
    let mut game = empty_game();
    game.piles[Rank::Two.index()].push(card(Suit::Hearts, Rank::Ace));
    assert_eq!(
        game.draw(),
        Err(DrawError::DrawEmpty {
            status: GameStatus::Ongoing
        })
    );
}

#[test]
fn win_needs_every_foundation_complete() {
    let mut game = empty_game();
    for suit in SUITS {
        let up_to = if suit == Suit::Clubs { Rank::Queen } else { Rank::King };
        fill_suit(&mut game.foundations, suit, up_to);
    }
    game.piles[Rank::Ace.index()].push(card(Suit::Clubs, Rank::King));

    assert_eq!(game.foundations().card_count(), TOTAL_CARDS - 1);
    assert_eq!(game.cards_in_play(), TOTAL_CARDS);
    assert!(game.draw_pile.is_empty());
    assert_eq!(game.status(), GameStatus::Ongoing);

    let outcome = game.play_card(Rank::Ace, 0).unwrap();
    assert_eq!(
        outcome.foundation,
        FoundationKey::new(Suit::Clubs, Direction::Ascending)
    );
    assert_eq!(outcome.status, GameStatus::Won);
    assert!(game.foundations().is_complete());
    assert!(game.foundations().iter().all(|f| f.len() == 13));
}

#[test]
fn legal_moves_match_play_results() {
    let mut game = empty_game();
    game.piles[Rank::Two.index()].push(card(Suit::Hearts, Rank::Ace));
    game.piles[Rank::Four.index()].push(card(Suit::Hearts, Rank::Nine));
    game.piles[Rank::Six.index()].push(card(Suit::Clubs, Rank::King));

    let moves = game.legal_moves();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0].pile, Rank::Two);
    assert_eq!(moves[1].card, card(Suit::Clubs, Rank::King));

    for play in moves {
        let outcome = game.play_card(play.pile, play.index).unwrap();
        assert_eq!(outcome.foundation, play.foundation);
    }
    assert!(game.legal_moves().is_empty());
}

#[test]
fn snapshot_shows_placeholders_and_tops() {
    let mut game = empty_game();
    game.piles[Rank::Two.index()].push(card(Suit::Spades, Rank::Ace));
    game.draw_pile.push(card(Suit::Hearts, Rank::Jack));

    let spades_up = FoundationKey::new(Suit::Spades, Direction::Ascending);
    let spades_down = FoundationKey::new(Suit::Spades, Direction::Descending);
    assert_eq!(game.foundation_top_label(spades_up), "A→K");
    assert_eq!(game.foundation_top_label(spades_down), "K→A");

    game.play_card(Rank::Two, 0).unwrap();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.piles.len(), 13);
    assert_eq!(snapshot.foundations.len(), 8);
    assert_eq!(snapshot.draw_pile_len, 1);
    assert_eq!(snapshot.status, GameStatus::Ongoing);
    assert_eq!(snapshot.foundations[spades_up.index()].top, "A♠");
    assert_eq!(snapshot.foundations[spades_down.index()].top, "K→A");
    assert!(snapshot.piles[Rank::Two.index()].cards.is_empty());
}

#[test]
fn greedy_playthrough_conserves_cards_and_terminates() {
    for seed in 0..25 {
        let mut game = Game::new(GameOptions::default(), seed);
        let status = loop {
            while let Some(play) = game.legal_moves().first().copied() {
                let outcome = game.play_card(play.pile, play.index).unwrap();
                assert_eq!(game.cards_in_play(), TOTAL_CARDS);
                if outcome.status == GameStatus::Won {
                    break;
                }
            }
            match game.draw() {
                Ok(_) => assert_eq!(game.cards_in_play(), TOTAL_CARDS),
                Err(DrawError::DrawEmpty { status }) => break status,
            }
        };

        assert!(status.is_terminal());
        assert_eq!(status, game.status());
        for label in RANKS {
            assert!(
                game.playable_indices(label)
                    .iter()
                    .all(|&i| i < game.pile(label).len())
            );
        }
    }
}
