//! CLI blackjack example.
//!
//! Pass `-v` to see the engine's debug events.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use bjengine::{
    Card, Game, GameOptions, GamePhase, GameState, Hand, HandResult, HandStatus, PlayerAction,
    Suit,
};
use tracing::Level;

fn main() {
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "--verbose");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let options = GameOptions::default();
    let mut game = match Game::from_os_rng(options) {
        Ok(game) => game,
        Err(err) => {
            println!("Invalid options: {err}");
            return;
        }
    };

    let mut bankroll: isize = 500;

    loop {
        if bankroll <= 0 {
            println!("You are out of money. Game over.");
            break;
        }

        if game.needs_reshuffle() {
            println!("Shoe will be reshuffled.");
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{bankroll}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }
        if bet as isize > bankroll {
            println!("You only have {bankroll}.");
            continue;
        }

        if let Err(err) = game.start_round(bet) {
            println!("Round error: {err}");
            continue;
        }

        while game.phase() == GamePhase::PlayerTurn {
            let state = game.state();
            print_table(&state);
            println!("{}", format_actions(&state));

            let action = match prompt_line("Action: ").as_str() {
                "h" | "hit" => PlayerAction::Hit,
                "s" | "stand" => PlayerAction::Stand,
                "d" | "double" => PlayerAction::DoubleDown,
                "p" | "split" => PlayerAction::Split,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if !state.available_actions.contains(&action) {
                println!("That action is not available.");
                continue;
            }

            if let Err(err) = game.apply(action) {
                println!("Action error: {err}");
                game.reset_game();
                break;
            }
        }

        if game.phase() == GamePhase::RoundOver {
            let state = game.state();
            print_table(&state);
            let net = net_result(&state, &game);
            bankroll += net;
            println!("Round complete. Net {net:+}, bankroll {bankroll}.");
        }
    }
}

/// Applies the table's payouts to the settled hands.
fn net_result(state: &GameState, game: &Game) -> isize {
    let ratio = game.options().blackjack_pays;
    state
        .player_hands
        .iter()
        .map(|hand| {
            let bet = hand.bet() as isize;
            match hand.result() {
                HandResult::PlayerWins if hand.status() == HandStatus::Blackjack => {
                    ratio.winnings(hand.bet()) as isize
                }
                HandResult::PlayerWins => bet,
                HandResult::DealerWins => -bet,
                HandResult::Push | HandResult::Pending => 0,
            }
        })
        .sum()
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(state: &GameState) {
    println!("\nShoe: {} cards remaining", state.deck_size);

    let dealer_view = format_cards(&state.dealer_hand);
    if state.phase == GamePhase::PlayerTurn {
        println!("\nDealer: {dealer_view} ?? (showing {})", state.dealer_up_card_value);
    } else {
        let total = Game::hand_value(&state.dealer_hand).total;
        println!("\nDealer: {dealer_view} (value {total})");
    }

    for (index, hand) in state.player_hands.iter().enumerate() {
        let marker = if state.active_hand_index == Some(index) {
            "*"
        } else {
            " "
        };
        println!("{marker} Hand {index}: {}", format_hand(hand));
    }
    println!();
}

fn format_hand(hand: &Hand) -> String {
    let value = hand.value();
    let soft = if value.is_soft { " soft" } else { "" };
    let mut line = format!(
        "{} | value {}{soft} | bet {} | {:?}",
        format_cards(hand.cards()),
        value.total,
        hand.bet(),
        hand.status()
    );
    if hand.result().is_settled() {
        line.push_str(&format!(" | {:?}", hand.result()));
    }
    line
}

fn format_actions(state: &GameState) -> String {
    let parts: Vec<String> = [
        ("hit", "h", PlayerAction::Hit),
        ("stand", "s", PlayerAction::Stand),
        ("double", "d", PlayerAction::DoubleDown),
        ("split", "p", PlayerAction::Split),
    ]
    .into_iter()
    .map(|(label, key, action)| {
        let text = format!("[{key}]{label}");
        if state.available_actions.contains(&action) {
            colorize(&text, "32")
        } else {
            colorize(&text, "90")
        }
    })
    .collect();
    format!("Actions: {}", parts.join(" "))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}
