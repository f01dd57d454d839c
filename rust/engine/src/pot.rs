//! Main/side pot partitioning and chip-conserving distribution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;
use crate::player::Player;

/// One pot of chips and the players allowed to win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    /// Non-folded players who reached this pot's contribution tier, ascending by id.
    pub eligible_player_ids: Vec<usize>,
    /// False only for the first (main) pot.
    pub is_side_pot: bool,
}

/// Chips credited to one winner of one pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub player_id: usize,
    pub amount: u32,
}

/// Splits every player's `total_bet` into a main pot and side pots.
///
/// Each distinct positive contribution is a tier. The pot for a tier takes
/// the increment over the previous tier from every player who reached it,
/// folded or not; only non-folded players who reached it may win it.
/// The amounts always add up to the total wagered.
///
/// # Errors
///
/// [`EngineError::InternalConsistency`] if the chips wagered do not fit in a
/// `u32`.
///
/// # Examples
///
/// ```
/// use showdown_engine::player::Player;
/// use showdown_engine::pot::calculate_pots;
///
/// let mut players: Vec<Player> = (0..3).map(|i| Player::new(i, format!("p{i}"), 0)).collect();
/// players[0].total_bet = 50;
/// players[1].total_bet = 100;
/// players[2].total_bet = 100;
///
/// let pots = calculate_pots(&players).unwrap();
/// assert_eq!(pots[0].amount, 150);
/// assert_eq!(pots[1].amount, 100);
/// assert_eq!(pots[1].eligible_player_ids, vec![1, 2]);
/// ```
pub fn calculate_pots(players: &[Player]) -> Result<Vec<Pot>, EngineError> {
    let mut tiers: Vec<u32> = players
        .iter()
        .map(|p| p.total_bet)
        .filter(|&bet| bet > 0)
        .collect();
    tiers.sort_unstable();
    tiers.dedup();

    let overflow = || EngineError::InternalConsistency(format!("chips wagered exceed {}", u32::MAX));

    let mut pots = Vec::with_capacity(tiers.len());
    let mut previous = 0u32;
    let mut total = 0u32;
    for (i, &tier) in tiers.iter().enumerate() {
        let increment = tier - previous;
        let funders = players.iter().filter(|p| p.total_bet >= tier);
        let amount = u32::try_from(funders.clone().count())
            .ok()
            .and_then(|n| increment.checked_mul(n))
            .ok_or_else(overflow)?;
        total = total.checked_add(amount).ok_or_else(overflow)?;
        let mut eligible: Vec<usize> = funders.filter(|p| !p.is_folded).map(|p| p.id).collect();
        eligible.sort_unstable();
        pots.push(Pot {
            amount,
            eligible_player_ids: eligible,
            is_side_pot: i > 0,
        });
        previous = tier;
    }

    debug!(pots = pots.len(), total, "partitioned contributions");
    Ok(pots)
}

/// Pays `pot` out to `winner_ids`, mutating their chip stacks.
///
/// Every winner gets `amount / n`; the remaining odd chips go one at a time
/// to winners in ascending seat order, so the whole pot is always paid.
/// Payouts are returned in that same seat order.
///
/// # Errors
///
/// [`EngineError::InternalConsistency`] when there are no winners, a winner
/// id is not among `players`, or a payout would overflow a stack. No chips
/// move in any of those cases.
pub fn distribute_pot(
    pot: &Pot,
    winner_ids: &[usize],
    players: &mut [Player],
) -> Result<Vec<Payout>, EngineError> {
    if winner_ids.is_empty() {
        return Err(EngineError::InternalConsistency(format!(
            "pot of {} has no winners",
            pot.amount
        )));
    }

    let mut ids = winner_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    let mut winners: Vec<usize> = Vec::with_capacity(ids.len());
    for id in ids {
        let idx = players.iter().position(|p| p.id == id).ok_or_else(|| {
            EngineError::InternalConsistency(format!("winner {} is not seated", id))
        })?;
        winners.push(idx);
    }
    winners.sort_by_key(|&idx| (players[idx].seat, players[idx].id));

    let count = winners.len() as u32;
    let share = pot.amount / count;
    let mut remainder = pot.amount % count;

    let mut credits = Vec::with_capacity(winners.len());
    for idx in winners {
        let mut amount = share;
        if remainder > 0 {
            amount += 1;
            remainder -= 1;
        }
        let stack = players[idx].chips.checked_add(amount).ok_or_else(|| {
            EngineError::InternalConsistency(format!(
                "paying {} to player {} overflows their stack of {}",
                amount, players[idx].id, players[idx].chips
            ))
        })?;
        credits.push((idx, amount, stack));
    }

    let payouts: Vec<Payout> = credits
        .into_iter()
        .map(|(idx, amount, stack)| {
            players[idx].chips = stack;
            Payout {
                player_id: players[idx].id,
                amount,
            }
        })
        .collect();

    debug!(amount = pot.amount, winners = payouts.len(), "distributed pot");
    Ok(payouts)
}
