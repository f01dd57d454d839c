//! `eval`: classify 5 to 7 cards.

use std::io::Write;

use showdown_engine::cards::parse_cards;
use showdown_engine::hand::evaluate_cards;

use super::{ensure_distinct, join_cards};
use crate::error::CliError;

/// Prints the best five-card hand among `cards`.
///
/// ```text
/// Hand: Full House, Aces over Kings
/// Class: Full House (6)
/// Best five: A♠ A♥ A♦ K♣ K♠
/// Tiebreak: [14, 13]
/// ```
pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    ensure_distinct(&cards)?;
    let eval = evaluate_cards(&cards)?;

    writeln!(out, "Hand: {}", eval.description)?;
    writeln!(out, "Class: {} ({})", eval.class, eval.class.value())?;
    writeln!(out, "Best five: {}", join_cards(&eval.cards))?;
    writeln!(out, "Tiebreak: {:?}", eval.tiebreak)?;
    Ok(())
}
