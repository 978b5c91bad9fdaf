//! CLI blackjack example.
//!
//! History is kept under `./.solojack`. Set `RUST_LOG=solojack=debug` to see
//! every applied action.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use solojack::{Card, FileStore, Game, GameOptions, GameState, Hand, Status, Suit};
use tracing_subscriber::EnvFilter;

const DEALER_STEP: Duration = Duration::from_millis(400);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'quit' to leave)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::with_seed(GameOptions::default(), FileStore::new(".solojack"), seed);

    print_history(&game.state());

    loop {
        let table = game.state();
        print_table(&table);
        println!("{}", format_actions(table.status()));

        let input = prompt_line("Action: ");
        let next = match input.as_str() {
            "" => continue,
            "h" => game.dispatch_named("hit"),
            "s" | "stand" | "finish" => {
                let frames = game.finish_turn_frames();
                let last = frames.len().saturating_sub(1);
                for (index, frame) in frames.iter().enumerate() {
                    if index < last {
                        print_dealer(frame.dealer_hand(), frame.dealer_score());
                        thread::sleep(DEALER_STEP);
                    }
                }
                frames.last().cloned().unwrap_or(table)
            }
            "d" => game.dispatch_named("deal"),
            "c" => game.dispatch_named("clear-history"),
            "n" => game.dispatch_named("new"),
            "q" | "quit" => {
                game.quit();
                println!("Goodbye.");
                break;
            }
            name => {
                let next = game.dispatch_named(name);
                if next == table {
                    println!("Nothing to do.");
                }
                next
            }
        };

        if let Some(outcome) = next.status().outcome() {
            print_table(&next);
            println!("Result: {}", outcome.as_str());
            print_history(&next);
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("quit");
    }
    if input.is_empty() {
        return String::from("quit");
    }
    input.trim().to_lowercase()
}

fn print_table(table: &GameState) {
    println!("\nPile: {} cards remaining", table.draw_pile().len());
    print_dealer(table.dealer_hand(), table.dealer_score());
    println!(
        "Player: {} (value {}) | {:?}\n",
        format_hand(table.player_hand()),
        table.player_score(),
        table.status()
    );
}

fn print_dealer(dealer: &Hand, value: u16) {
    println!("Dealer: {} (value {value})", format_hand(dealer));
}

fn print_history(table: &GameState) {
    if table.history().is_empty() {
        return;
    }
    println!("Recent rounds:");
    for entry in table.history().iter().take(5) {
        println!(
            "  {} | {:>2} vs {:>2} | {}",
            entry.timestamp,
            entry.player_score,
            entry.dealer_score,
            entry.result.as_str()
        );
    }
}

fn format_actions(status: Status) -> String {
    let playing = status == Status::Playing;
    let parts = [
        format_action("deal", "d", true),
        format_action("hit", "h", playing),
        format_action("dealer-hit", "", playing),
        format_action("stand", "s", playing),
        format_action("new", "n", true),
        format_action("clear-history", "c", true),
        format_action("quit", "q", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = if key.is_empty() {
        label.to_string()
    } else {
        format!("[{key}]{label}")
    };
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if card.face_down {
        return "??".to_string();
    }
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
