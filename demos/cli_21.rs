//! CLI front end for the 21 round engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, DealerHand, Hand, Round, RoundOutcome, RoundPhase, Suit};

fn main() {
    println!("21 CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(seed);

    loop {
        round.new_round();
        if let Err(err) = round.deal_initial_cards() {
            println!("Deal error: {err}");
            return;
        }

        while round.phase() == RoundPhase::Dealt {
            print_table(&round);

            match prompt_line("Action ([h]it / [s]tand / [q]uit): ").as_str() {
                "h" | "hit" => match round.player_hit() {
                    Ok(card) => {
                        println!("You draw {}.", format_card(&card));
                        if round.player_value() > 21 {
                            // Reveal so the final totals make sense
                            round.reveal_dealer_card();
                        }
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" => {
                    if let Err(err) = round.player_stand() {
                        println!("Action error: {err}");
                    }
                }
                "q" | "quit" | "" => return,
                _ => println!("Unknown action."),
            }
        }

        // Dealer only plays when the player is still in the round.
        if round.player_value() <= 21 {
            round.reveal_dealer_card();
            match round.play_dealer_turn() {
                Ok(drawn) => {
                    for card in &drawn {
                        println!("Dealer draws {}.", format_card(card));
                    }
                }
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        print_final(&round);

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
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

fn print_table(round: &Round) {
    let dealer = round.dealer_hand();
    println!(
        "\nDealer: {} (showing {})",
        format_dealer(dealer),
        dealer.visible_value()
    );
    println!(
        "You:    {} (total {})\n",
        format_hand(round.player_hand()),
        round.player_value()
    );
}

fn print_final(round: &Round) {
    let result = round.result();
    println!(
        "\nDealer: {} (total {})",
        format_dealer(round.dealer_hand()),
        result.dealer_value
    );
    println!(
        "You:    {} (total {})",
        format_hand(round.player_hand()),
        result.player_value
    );
    println!("{}", outcome_message(result.outcome));
}

const fn outcome_message(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::PlayerBust => "You bust. Dealer wins!",
        RoundOutcome::DealerBust => "Dealer busts. You win!",
        RoundOutcome::PlayerWin => "You win!",
        RoundOutcome::DealerWin => "Dealer wins!",
        RoundOutcome::Push => "Push (tie).",
    }
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_hole_revealed() {
        return format_cards(dealer.cards());
    }

    let mut parts = vec!["??".to_string()];
    parts.extend(dealer.visible_cards().iter().map(format_card));
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
