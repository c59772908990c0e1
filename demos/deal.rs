//! CLI poker deal example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pkrs::{Dealer, HandCategory};

fn main() {
    println!("Poker deal example ('c' draws a card, 'h' deals a hand, 'q' quits)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut dealer = Dealer::new(seed);

    loop {
        match prompt_line("> ").as_str() {
            "c" => match dealer.draw_card() {
                Ok(card) => println!("You drew the {card}."),
                Err(err) => println!("Draw error: {err}"),
            },
            "h" => match dealer.deal_hand() {
                Ok(deal) => {
                    for card in deal.hand.cards() {
                        println!("  {card}");
                    }
                    match deal.category {
                        HandCategory::HighCard(rank) => println!("High Card of {rank}"),
                        category => println!("{category}"),
                    }
                }
                Err(err) => println!("Deal error: {err}"),
            },
            "q" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Commands: c(ard), h(and), q(uit)"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_lowercase()
}
