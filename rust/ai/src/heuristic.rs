//! Threshold-based opponent.
//!
//! Scores the hand, perturbs the score with a random multiplier, and maps it
//! through the fold/call/raise thresholds of a [`DifficultyConfig`]. Raises
//! are always the table minimum; there is no bet sizing, no planning across
//! streets and no opponent modeling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use showdown_engine::errors::EngineError;
use showdown_engine::game::GameState;
use showdown_engine::player::{Player, PlayerAction};
use tracing::debug;

use crate::AIOpponent;
use crate::difficulty::DifficultyConfig;
use crate::strength::hand_strength;

/// What the deciding player is facing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetContext {
    pub to_call: u32,
    pub can_call: bool,
    pub can_raise: bool,
    /// `to_call / pot`, or 0 when nothing is owed or the pot is empty.
    pub pot_odds: f64,
}

impl BetContext {
    pub fn new(player: &Player, state: &GameState) -> Self {
        let to_call = state.to_call(player.current_bet);
        let pot_odds = if to_call > 0 && state.pot > 0 {
            f64::from(to_call) / f64::from(state.pot)
        } else {
            0.0
        };
        Self {
            to_call,
            can_call: player.chips >= to_call,
            can_raise: player.chips > to_call,
            pot_odds,
        }
    }
}

/// Random factor in `[variance_min, variance_min + variance_range)`.
pub fn variance_multiplier<R: Rng + ?Sized>(config: &DifficultyConfig, rng: &mut R) -> f64 {
    config.variance_min + rng.random::<f64>() * config.variance_range
}

/// Maps an already adjusted strength to an action.
///
/// With nothing to call: raise when strong enough and able, else check.
/// Facing a bet: fold below the fold threshold; raise when strong enough and
/// able; call when above the call threshold; call a cheap bet (pot odds under
/// the threshold) anyway; otherwise fold. Raises are `state.min_raise`.
pub fn decide_with_strength(
    adjusted: f64,
    ctx: &BetContext,
    state: &GameState,
    config: &DifficultyConfig,
) -> PlayerAction {
    let strong = adjusted >= config.raise_threshold;

    if ctx.to_call == 0 {
        return if strong && ctx.can_raise {
            PlayerAction::Raise(state.min_raise)
        } else {
            PlayerAction::Check
        };
    }

    if adjusted < config.fold_threshold {
        PlayerAction::Fold
    } else if strong && ctx.can_raise {
        PlayerAction::Raise(state.min_raise)
    } else if adjusted >= config.call_threshold && ctx.can_call {
        PlayerAction::Call
    } else if ctx.pot_odds < config.pot_odds_threshold && ctx.can_call {
        PlayerAction::Call
    } else {
        PlayerAction::Fold
    }
}

/// Chooses an action for `player` at `state`.
///
/// A player without hole cards checks when it can and folds otherwise.
///
/// # Errors
///
/// Propagates [`EngineError::InvalidInputSize`] for a board of 1, 2 or more
/// than 5 cards.
pub fn decide<R: Rng + ?Sized>(
    player: &Player,
    state: &GameState,
    config: &DifficultyConfig,
    rng: &mut R,
) -> Result<PlayerAction, EngineError> {
    let ctx = BetContext::new(player, state);
    let Some(hole) = player.hole else {
        return Ok(if ctx.to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        });
    };

    let strength = hand_strength(&hole, &state.community_cards)?;
    let adjusted = strength * variance_multiplier(config, rng);
    let action = decide_with_strength(adjusted, &ctx, state, config);
    debug!(
        player = player.id,
        strength,
        adjusted,
        to_call = ctx.to_call,
        pot_odds = ctx.pot_odds,
        ?action,
        "ai decision"
    );
    Ok(action)
}

/// An [`AIOpponent`] that owns its thresholds and a seedable RNG.
///
/// # Example
///
/// ```rust
/// use showdown_ai::AIOpponent;
/// use showdown_ai::difficulty::Difficulty;
/// use showdown_ai::heuristic::HeuristicAI;
/// use showdown_engine::game::GameState;
/// use showdown_engine::player::{Player, PlayerAction};
///
/// let mut ai = HeuristicAI::new(Difficulty::Hard, 42);
/// let player = Player::new(0, "bot", 1000);
/// let state = GameState::new(vec![], 0, 30, 20);
/// // no hole cards and nothing to call: check
/// assert_eq!(ai.get_action(&player, &state).unwrap(), PlayerAction::Check);
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicAI {
    name: String,
    config: DifficultyConfig,
    rng: ChaCha20Rng,
}

impl HeuristicAI {
    pub fn new(difficulty: crate::difficulty::Difficulty, seed: u64) -> Self {
        Self::with_config(format!("HeuristicAI({})", difficulty), difficulty.config(), seed)
    }

    pub fn with_config(name: impl Into<String>, config: DifficultyConfig, seed: u64) -> Self {
        Self {
            name: name.into(),
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }
}

impl AIOpponent for HeuristicAI {
    fn get_action(&mut self, player: &Player, state: &GameState) -> Result<PlayerAction, EngineError> {
        decide(player, state, &self.config, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
