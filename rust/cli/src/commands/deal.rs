//! `deal`: deal and settle one random hand.
//!
//! Every player puts in the same amount, so the whole pot is a single main
//! pot split between the best hands. The seed fully determines the deal.

use std::io::Write;

use showdown_engine::deck::Deck;
use showdown_engine::errors::EngineError;
use showdown_engine::player::Player;
use showdown_engine::showdown::settle_hand;

use super::join_cards;
use super::settle::write_settlement;
use crate::config;
use crate::error::CliError;

/// Handle the deal command.
///
/// The seed comes from `--seed`, then the configuration, then is drawn at
/// random; it is printed first so any hand can be reproduced.
pub fn handle_deal_command(
    players: u8,
    seed: Option<u64>,
    bet: u32,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut table = Vec::with_capacity(players as usize);
    for id in 0..players as usize {
        let hole = deck
            .deal_hole()
            .ok_or_else(|| EngineError::InternalConsistency("deck ran out of cards".into()))?;
        let mut p = Player::new(id, format!("P{}", id + 1), 0).with_hole(hole);
        p.total_bet = bet;
        table.push(p);
    }

    let mut board = Vec::with_capacity(5);
    for street in [3, 1, 1] {
        deck.burn_card();
        board.extend(deck.deal_n(street));
    }

    writeln!(out, "Seed: {}", seed)?;
    for p in &table {
        if let Some(hole) = &p.hole {
            writeln!(out, "{}: {}", p.name, join_cards(hole))?;
        }
    }
    writeln!(out, "Board: {}", join_cards(&board))?;

    let result = settle_hand(&mut table, &board)?;
    write_settlement(out, &result, &table)?;
    Ok(())
}
