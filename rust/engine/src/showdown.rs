//! Showdown settlement: pots, per-pot winners, payouts.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::Card;
use crate::errors::EngineError;
use crate::hand::{determine_winners, evaluate_cards, HandEvaluation};
use crate::player::Player;
use crate::pot::{calculate_pots, distribute_pot, Pot};

/// Settled outcome of one pot, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotResult {
    pub amount: u32,
    pub winner_ids: Vec<usize>,
    pub winner_names: Vec<String>,
    pub is_side_pot: bool,
    /// Winning hand; `None` when the pot was won uncontested.
    #[serde(default)]
    pub hand_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownResult {
    /// Everyone who won at least one pot, in order of first win.
    pub winner_ids: Vec<usize>,
    pub pot_results: Vec<PotResult>,
    /// Pots that had no eligible contender and were left undistributed.
    #[serde(default)]
    pub unclaimed: Vec<Pot>,
}

impl ShowdownResult {
    pub fn total_awarded(&self) -> u32 {
        self.pot_results.iter().map(|r| r.amount).sum()
    }

    /// Fails if any pot went unclaimed, which a well-formed hand never produces.
    pub fn check_consistency(&self) -> Result<(), EngineError> {
        match self.unclaimed.first() {
            None => Ok(()),
            Some(pot) => Err(EngineError::InternalConsistency(format!(
                "{} pot(s) without eligible winners, first holds {} chips",
                self.unclaimed.len(),
                pot.amount
            ))),
        }
    }
}

/// Settles a hand that reached showdown.
///
/// `evaluations` must line up with the non-folded players in `players`
/// order. Pots are computed once; each is contested only by its eligible
/// players and paid out through [`distribute_pot`], mutating chip stacks.
///
/// A pot nobody can win is skipped, logged, and reported in
/// [`ShowdownResult::unclaimed`] rather than distributed.
///
/// # Errors
///
/// [`EngineError::EvaluationCountMismatch`] if `evaluations` does not have one
/// entry per non-folded player.
pub fn resolve_showdown(
    players: &mut [Player],
    evaluations: &[HandEvaluation],
) -> Result<ShowdownResult, EngineError> {
    let contenders = active_ids(players);
    if contenders.len() != evaluations.len() {
        return Err(EngineError::EvaluationCountMismatch {
            expected: contenders.len(),
            actual: evaluations.len(),
        });
    }

    settle_pots(players, &contenders, |positions| {
        let evals: Vec<HandEvaluation> = positions
            .iter()
            .map(|&i| evaluations[i].clone())
            .collect();
        let best = determine_winners(&evals);
        let description = best.first().map(|&j| evals[j].description.clone());
        (best.into_iter().map(|j| positions[j]).collect(), description)
    })
}

/// Evaluates every live player's hole cards with the board and settles.
///
/// When only one player is left in the hand nothing is evaluated and that
/// player collects every pot they are eligible for.
///
/// # Errors
///
/// [`EngineError::InvalidInputSize`] if a live player has no hole cards or
/// the board is too short to make a hand.
pub fn settle_hand(players: &mut [Player], board: &[Card]) -> Result<ShowdownResult, EngineError> {
    let contenders = active_ids(players);
    if contenders.len() == 1 {
        return settle_pots(players, &contenders, |positions| (positions.to_vec(), None));
    }

    let mut evaluations = Vec::with_capacity(contenders.len());
    for p in players.iter().filter(|p| !p.is_folded) {
        let hole = p.hole.ok_or(EngineError::InvalidInputSize {
            expected: "2 hole",
            actual: 0,
        })?;
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let eval = evaluate_cards(&cards)?;
        debug!(player = p.id, hand = %eval, "evaluated");
        evaluations.push(eval);
    }
    resolve_showdown(players, &evaluations)
}

fn active_ids(players: &[Player]) -> Vec<usize> {
    players
        .iter()
        .filter(|p| !p.is_folded)
        .map(|p| p.id)
        .collect()
}

// `pick` receives positions into `contenders` eligible for a pot and returns
// the winning positions plus the winning hand description.
fn settle_pots<F>(
    players: &mut [Player],
    contenders: &[usize],
    mut pick: F,
) -> Result<ShowdownResult, EngineError>
where
    F: FnMut(&[usize]) -> (Vec<usize>, Option<String>),
{
    let pots = calculate_pots(players)?;
    let mut result = ShowdownResult::default();

    for pot in pots {
        let positions: Vec<usize> = contenders
            .iter()
            .enumerate()
            .filter(|(_, id)| pot.eligible_player_ids.contains(*id))
            .map(|(i, _)| i)
            .collect();
        if positions.is_empty() {
            warn!(
                amount = pot.amount,
                side_pot = pot.is_side_pot,
                "pot has no eligible contender, leaving it unclaimed"
            );
            result.unclaimed.push(pot);
            continue;
        }

        let (winning, hand_description) = pick(&positions);
        let winner_ids: Vec<usize> = winning.iter().map(|&i| contenders[i]).collect();
        distribute_pot(&pot, &winner_ids, players)?;

        let winner_names = winner_ids
            .iter()
            .filter_map(|id| players.iter().find(|p| p.id == *id))
            .map(|p| p.name.clone())
            .collect();
        for id in &winner_ids {
            if !result.winner_ids.contains(id) {
                result.winner_ids.push(*id);
            }
        }
        debug!(amount = pot.amount, winners = ?winner_ids, "settled pot");
        result.pot_results.push(PotResult {
            amount: pot.amount,
            winner_ids,
            winner_names,
            is_side_pot: pot.is_side_pot,
            hand_description,
        });
    }

    Ok(result)
}
