//! Hand evaluation command.
//!
//! Ranks a set of 5 to 7 cards, and optionally compares it to a second set.

use crate::error::CliError;
use holdem_engine::cards::Card;
use holdem_engine::hand::{HandStrength, compare_hands, evaluate_hand};
use std::cmp::Ordering;
use std::io::Write;

fn parse_cards(codes: &[String]) -> Result<Vec<Card>, CliError> {
    codes
        .iter()
        .flat_map(|s| s.split(','))
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<Card>().map_err(CliError::from))
        .collect()
}

fn describe(strength: &HandStrength) -> String {
    let kickers: Vec<String> = strength
        .kickers
        .iter()
        .take_while(|&&k| k > 0)
        .map(|k| k.to_string())
        .collect();
    format!("{} [{}]", strength.category, kickers.join(" "))
}

pub fn handle_eval_command(
    cards: &[String],
    against: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_cards(cards)?;
    let strength = evaluate_hand(&hand)?;
    writeln!(out, "Hand: {}", describe(&strength))?;

    if against.is_empty() {
        return Ok(());
    }
    let other = evaluate_hand(&parse_cards(against)?)?;
    writeln!(out, "Against: {}", describe(&other))?;
    let verdict = match compare_hands(&strength, &other) {
        Ordering::Greater => "first hand wins",
        Ordering::Less => "second hand wins",
        Ordering::Equal => "tie",
    };
    writeln!(out, "Result: {}", verdict)?;
    Ok(())
}
