//! `settle`: settle a hand described by a JSON table file.
//!
//! # Input
//!
//! ```json
//! {
//!   "board": "Ad Kc Ks 2h 3c",
//!   "players": [
//!     { "id": 0, "name": "alice", "seat": 0, "chips": 0, "total_bet": 50, "hole": "As Ah" },
//!     { "id": 1, "name": "bob", "total_bet": 100, "folded": true }
//!   ]
//! }
//! ```
//!
//! `name` defaults to `P<id>`, `seat` to the id, `chips` to 0 and `folded` to
//! false. Live players need `hole` unless they are the only one left.

use std::collections::HashSet;
use std::fs;
use std::io::Write;

use serde::Deserialize;
use showdown_engine::cards::{parse_cards, Card};
use showdown_engine::logger::{HandLogger, SettlementRecord};
use showdown_engine::player::Player;
use showdown_engine::showdown::{settle_hand, ShowdownResult};

use super::{ensure_distinct, join_cards, parse_hole};
use crate::error::CliError;
use crate::ui;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableInput {
    #[serde(default)]
    board: String,
    players: Vec<SeatInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeatInput {
    id: usize,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    seat: Option<usize>,
    #[serde(default)]
    chips: u32,
    total_bet: u32,
    #[serde(default)]
    folded: bool,
    #[serde(default)]
    hole: Option<String>,
}

fn build_table(input: TableInput) -> Result<(Vec<Card>, Vec<Player>), CliError> {
    if input.players.is_empty() {
        return Err(CliError::InvalidInput("table has no players".into()));
    }
    let board = parse_cards(&input.board)?;
    if board.len() > 5 {
        return Err(CliError::InvalidInput(format!(
            "board has {} cards, at most 5 allowed",
            board.len()
        )));
    }

    let mut ids = HashSet::new();
    let mut players = Vec::with_capacity(input.players.len());
    for seat in input.players {
        if !ids.insert(seat.id) {
            return Err(CliError::InvalidInput(format!("duplicate player id {}", seat.id)));
        }
        let name = seat.name.unwrap_or_else(|| format!("P{}", seat.id));
        let mut p = Player::new(seat.id, name, seat.chips).with_seat(seat.seat.unwrap_or(seat.id));
        p.total_bet = seat.total_bet;
        p.is_folded = seat.folded;
        if let Some(hole) = seat.hole.as_deref() {
            p.hole = Some(parse_hole(hole)?);
        }
        players.push(p);
    }

    ensure_distinct(board.iter().chain(players.iter().filter_map(|p| p.hole.as_ref()).flatten()))?;
    Ok((board, players))
}

/// One line per pot, then the final stacks.
pub(crate) fn write_settlement(
    out: &mut dyn Write,
    result: &ShowdownResult,
    players: &[Player],
) -> Result<(), CliError> {
    let mut side = 0;
    for pot in &result.pot_results {
        let label = if pot.is_side_pot {
            side += 1;
            format!("Side pot {}", side)
        } else {
            "Main pot".to_string()
        };
        let hand = pot.hand_description.as_deref().unwrap_or("uncontested");
        writeln!(
            out,
            "{}: {} -> {} ({})",
            label,
            pot.amount,
            pot.winner_names.join(", "),
            hand
        )?;
    }
    let stacks: Vec<String> = players
        .iter()
        .map(|p| format!("{} {}", p.name, p.chips))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(", "))?;
    Ok(())
}

fn write_json(out: &mut dyn Write, result: &ShowdownResult, players: &[Player]) -> Result<(), CliError> {
    let stacks: Vec<_> = players
        .iter()
        .map(|p| serde_json::json!({ "id": p.id, "name": p.name, "chips": p.chips }))
        .collect();
    let display = serde_json::json!({
        "pots": result.pot_results,
        "winners": result.winner_ids,
        "unclaimed": result.unclaimed.iter().map(|p| p.amount).sum::<u32>(),
        "stacks": stacks,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}

/// Handle the settle command.
///
/// Reads the table, settles it, prints the result, and optionally appends a
/// [`SettlementRecord`] to `log`. Pots nobody could win are reported on
/// `err` as a warning; the command still succeeds.
pub fn handle_settle_command(
    input: &str,
    log: Option<&str>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let raw = fs::read_to_string(input)?;
    let table: TableInput = serde_json::from_str(&raw)?;
    let (board, mut players) = build_table(table)?;

    let result = settle_hand(&mut players, &board)?;

    if json {
        write_json(out, &result, &players)?;
    } else {
        if !board.is_empty() {
            writeln!(out, "Board: {}", join_cards(&board))?;
        }
        write_settlement(out, &result, &players)?;
    }

    let unclaimed: u32 = result.unclaimed.iter().map(|p| p.amount).sum();
    if unclaimed > 0 {
        ui::display_warning(
            err,
            &format!("{} chips unclaimed: no live player is eligible for them", unclaimed),
        )?;
    }

    if let Some(path) = log {
        let mut logger = HandLogger::create(path)?;
        let record = SettlementRecord::new(logger.next_id(), &board, &result);
        logger.write(&record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> Result<(Vec<Card>, Vec<Player>), CliError> {
        build_table(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn defaults_fill_in() {
        let (board, players) =
            table(r#"{"board":"Ad Kc Ks","players":[{"id":3,"total_bet":10,"hole":"As Ah"}]}"#)
                .unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(players[0].name, "P3");
        assert_eq!(players[0].seat, 3);
        assert_eq!(players[0].chips, 0);
        assert!(!players[0].is_folded);
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(table(r#"{"players":[]}"#).is_err());
        assert!(
            table(r#"{"players":[{"id":1,"total_bet":5},{"id":1,"total_bet":5}]}"#).is_err()
        );
        assert!(table(r#"{"board":"As","players":[{"id":1,"total_bet":5,"hole":"As Kd"}]}"#).is_err());
        assert!(table(r#"{"board":"2c 3c 4c 5c 6c 7c","players":[{"id":1,"total_bet":5}]}"#).is_err());
    }

    #[test]
    fn settlement_lines() {
        let (_, mut players) = table(
            r#"{"players":[{"id":0,"name":"a","total_bet":30},{"id":1,"name":"b","total_bet":30,"folded":true}]}"#,
        )
        .unwrap();
        let result = settle_hand(&mut players, &[]).unwrap();
        let mut out = Vec::new();
        write_settlement(&mut out, &result, &players).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(s, "Main pot: 60 -> a (uncontested)\nStacks: a 60, b 0\n");
    }
}
