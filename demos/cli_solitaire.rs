//! CLI double deck solitaire example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ddsol::{Card, DrawError, Game, GameOptions, GameStatus, Rank, Suit, TableSnapshot};

fn main() {
    println!("Double deck solitaire (d = draw, p <pile> <index> = play, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let snapshot = game.snapshot();
        print_table(&snapshot);

        match snapshot.status {
            GameStatus::Won => {
                println!("Congratulations! All foundations complete!");
                break;
            }
            GameStatus::Stalemate => {
                println!("Game over. No valid moves left and the draw pile is empty.");
                break;
            }
            GameStatus::Ongoing => {}
        }

        let input = prompt_line("> ");
        let mut words = input.split_whitespace();
        match words.next() {
            Some("q" | "quit") | None => break,
            Some("d" | "draw") => match game.draw() {
                Ok(outcome) => println!(
                    "Drew {} onto pile {}.",
                    format_card(&outcome.card),
                    outcome.pile
                ),
                Err(DrawError::DrawEmpty { .. }) => println!("Draw pile is empty!"),
            },
            Some("p" | "play") => {
                let Some((label, index)) = parse_play(words.next(), words.next()) else {
                    println!("Usage: p <pile> <index>, e.g. p 10 0");
                    continue;
                };
                match game.play_card(label, index) {
                    Ok(outcome) => println!(
                        "Moved {} to a foundation.",
                        format_card(&outcome.card)
                    ),
                    Err(err) => println!("Invalid move: {err}"),
                }
            }
            Some(other) => println!("Unknown command: {other}"),
        }
    }
}

fn parse_play(label: Option<&str>, index: Option<&str>) -> Option<(Rank, usize)> {
    let label = label?.parse::<Rank>().ok()?;
    let index = index?.parse::<usize>().ok()?;
    Some((label, index))
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &TableSnapshot) {
    println!();
    for pile in &snapshot.piles {
        let marker = if snapshot.active_pile == Some(pile.label) {
            "*"
        } else {
            " "
        };
        let cards = if pile.cards.is_empty() {
            "(empty)".to_string()
        } else {
            pile.cards
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    if pile.playable.contains(&index) {
                        format!("[{index}:{}]", format_card(card))
                    } else {
                        format_card(card)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("{marker}{:>3}: {cards}", pile.label.label());
    }
    println!("DRAW: {} cards", snapshot.draw_pile_len);

    let foundations = snapshot
        .foundations
        .iter()
        .map(|foundation| foundation.top.clone())
        .collect::<Vec<_>>()
        .join("  ");
    println!("Foundations: {foundations}");
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
