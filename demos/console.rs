//! Play counted blackjack in the terminal.
//!
//! The session sizes every bet from the true count; you make the decisions.
//! Type `q` or close stdin to leave the table.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcount::{
    Action, Card, Choice, Event, EventSink, FnPlayer, GameOptions, HandOutcome, LegalActions,
    Prompt, RoundReport, Session, SessionOptions, StrategyLadder,
};

fn main() {
    println!("Counted blackjack (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let Some(base_bet) = prompt_usize("Base bet (0 to quit): ") else {
        return;
    };
    if base_bet == 0 {
        return;
    }

    let options = GameOptions::default().with_decks(6).with_surrender(true);
    let betting = SessionOptions::default()
        .with_base_bet(base_bet)
        .with_bankroll(base_bet * 100);
    let ladder = StrategyLadder::illustrious();
    let sink = ConsoleSink;
    let Ok(mut session) = Session::new(options, betting, &ladder, &sink, seed) else {
        eprintln!("invalid table options");
        return;
    };

    loop {
        println!(
            "\nBankroll {} | running count {} | true count {:.2}",
            session.bankroll(),
            session.running_count(),
            session.true_count()
        );

        let mut quit = false;
        let mut player = FnPlayer::new(|prompt: &Prompt<'_>| ask(prompt, &mut quit));
        let report = session.play_next_with(&mut player);
        drop(player);

        match report {
            Ok(RoundReport::Bankrupt) => {
                println!("You are out of money. Game over.");
                break;
            }
            Ok(_) => {}
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }
        if quit {
            println!("Goodbye.");
            break;
        }
    }
}

fn ask(prompt: &Prompt<'_>, quit: &mut bool) -> Choice {
    println!("{}", format_actions(prompt.legal));
    let Some(input) = prompt_line("Action: ") else {
        *quit = true;
        return Choice::Disconnected;
    };
    if input == "q" || input == "quit" {
        *quit = true;
        return Choice::Disconnected;
    }
    input.parse::<Action>().map_or(Choice::Invalid, Choice::Act)
}

struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: &Event) {
        match event {
            Event::RoundStarted { bet, .. } => println!("Bet {bet}"),
            Event::Dealt {
                player,
                dealer_upcard,
            } => println!(
                "Dealer shows {} | you hold {}",
                format_card(dealer_upcard),
                format_cards(player)
            ),
            Event::Natural { outcome, dealer } => {
                println!("Dealer has {}: {}", format_cards(dealer), outcome_label(*outcome));
            }
            Event::HandState {
                hand_index,
                cards,
                total,
                soft,
                bet,
                ..
            } => println!(
                "* Hand {hand_index}: {} | value {}{total} | bet {bet}",
                format_cards(cards),
                if *soft { "soft " } else { "" }
            ),
            Event::IllegalAction { action, reason, .. } => {
                println!("{}", colorize(&format!("Cannot {action}: {reason}"), "31"));
            }
            Event::InvalidInput { .. } => println!("Unknown action."),
            Event::Split { hand_index, splits } => {
                println!("Hand {hand_index} split ({splits} so far)");
            }
            Event::Busted { hand_index, total } => {
                println!("{}", colorize(&format!("Hand {hand_index} busts with {total}"), "31"));
            }
            Event::DealerPlayed { cards, total } => {
                println!("Dealer: {} (value {total})", format_cards(cards));
            }
            Event::HandSettled {
                hand_index,
                outcome,
                net,
            } => println!("Hand {hand_index}: {} ({net:+})", outcome_label(*outcome)),
            Event::SatOut { true_count } => {
                println!("True count {true_count:.2} is too low. Leaving the table for a fresh shoe.");
            }
            Event::Reshuffled { shoe_profit } => {
                println!("Shoe reshuffled. Shoe profit: {shoe_profit:+}");
            }
            _ => {}
        }
    }
}

fn outcome_label(outcome: HandOutcome) -> String {
    match outcome {
        HandOutcome::Win => colorize("win", "32"),
        HandOutcome::Blackjack => colorize("blackjack", "32"),
        HandOutcome::Lose => colorize("lose", "31"),
        HandOutcome::Push => colorize("push", "33"),
        HandOutcome::Surrendered => colorize("surrendered", "90"),
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_actions(legal: LegalActions) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", legal.double),
        format_action("split", "p", legal.split),
        format_action("surrender", "u", legal.surrender),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let text = card.to_string();
    if text.ends_with('H') || text.ends_with('D') {
        colorize(&text, "31")
    } else {
        text
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
