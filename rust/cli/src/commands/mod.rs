//! Command handlers, one module per subcommand.
//!
//! Each handler takes its parsed arguments plus the output streams
//! (`&mut dyn Write`) and returns `Result<(), CliError>`.

mod cfg;
mod deal;
mod decide;
mod eval;
mod settle;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use decide::{handle_decide_command, DecideOverrides, Situation};
pub use eval::handle_eval_command;
pub use settle::handle_settle_command;

use std::collections::HashSet;

use showdown_engine::cards::{parse_cards, Card};

use crate::error::CliError;

pub(crate) fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn parse_hole(s: &str) -> Result<[Card; 2], CliError> {
    match parse_cards(s)?.as_slice() {
        [a, b] => Ok([*a, *b]),
        other => Err(CliError::InvalidInput(format!(
            "expected 2 hole cards, got {}",
            other.len()
        ))),
    }
}

/// Rejects the same card appearing twice anywhere in `cards`.
pub(crate) fn ensure_distinct<'a, I>(cards: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(*card) {
            return Err(CliError::InvalidInput(format!("duplicate card {}", card)));
        }
    }
    Ok(())
}
