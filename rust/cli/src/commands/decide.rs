//! `decide`: ask the heuristic AI what it would do.

use std::io::Write;

use showdown_ai::heuristic::HeuristicAI;
use showdown_ai::{AIOpponent, Difficulty};
use showdown_engine::cards::parse_cards;
use showdown_engine::game::GameState;
use showdown_engine::player::{Player, PlayerAction};

use super::{ensure_distinct, parse_hole};
use crate::config;
use crate::error::CliError;

/// What the AI sees.
pub struct Situation<'a> {
    pub hole: &'a str,
    pub board: &'a str,
    pub to_call: u32,
    pub pot: u32,
    pub chips: u32,
}

/// Per-invocation overrides of the configured values.
#[derive(Default)]
pub struct DecideOverrides<'a> {
    pub min_raise: Option<u32>,
    pub difficulty: Option<&'a str>,
    pub seed: Option<u64>,
}

fn describe(action: PlayerAction, to_call: u32) -> String {
    match action {
        PlayerAction::Fold => "fold".into(),
        PlayerAction::Check => "check".into(),
        PlayerAction::Call => format!("call {}", to_call),
        PlayerAction::Raise(n) => format!("raise {}", n),
    }
}

/// Handle the decide command.
///
/// Flags win over the configuration. Threshold overrides from the config
/// file only apply while the configured difficulty is in effect.
pub fn handle_decide_command(
    situation: &Situation<'_>,
    overrides: &DecideOverrides<'_>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;

    let difficulty = match overrides.difficulty {
        Some(d) => d
            .parse::<Difficulty>()
            .map_err(|e| CliError::InvalidInput(e.to_string()))?,
        None => cfg.difficulty,
    };
    let thresholds = if difficulty == cfg.difficulty {
        cfg.thresholds
    } else {
        difficulty.config()
    };
    let min_raise = overrides.min_raise.unwrap_or(cfg.min_raise);
    if min_raise == 0 {
        return Err(CliError::InvalidInput("min-raise must be >0".into()));
    }
    let seed = overrides.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let hole = parse_hole(situation.hole)?;
    let board = parse_cards(situation.board)?;
    ensure_distinct(hole.iter().chain(board.iter()))?;

    let player = Player::new(0, "hero", situation.chips).with_hole(hole);
    let state = GameState::new(board, situation.to_call, situation.pot, min_raise);

    let mut ai = HeuristicAI::with_config(format!("HeuristicAI({})", difficulty), thresholds, seed);
    let action = ai.get_action(&player, &state)?;

    writeln!(out, "AI: {}", ai.name())?;
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Action: {}", describe(action, situation.to_call))?;
    Ok(())
}
