//! Hand strength on a 0-10 scale.
//!
//! Preflop uses a cheap two-card heuristic; from the flop on the strength is
//! the numeric hand class (0 for high card up to 9 for a royal flush).

use showdown_engine::cards::Card;
use showdown_engine::errors::EngineError;
use showdown_engine::hand::{best_hand, evaluate_five};

/// Pocket pairs score `min(10, v/2 + 3)`, anything else half the average
/// rank value. Aces are 14.
pub fn preflop_strength(hole: &[Card; 2]) -> f64 {
    let v1 = f64::from(hole[0].rank.value());
    let v2 = f64::from(hole[1].rank.value());
    if hole[0].rank == hole[1].rank {
        (v1 / 2.0 + 3.0).min(10.0)
    } else {
        (v1 + v2) / 2.0 / 2.0
    }
}

/// Strength of `hole` given the board so far.
///
/// # Errors
///
/// [`EngineError::InvalidInputSize`] for a board that is not 0, 3, 4 or 5 cards.
pub fn hand_strength(hole: &[Card; 2], community: &[Card]) -> Result<f64, EngineError> {
    let mut cards = hole.to_vec();
    cards.extend_from_slice(community);
    let class = match community.len() {
        0 => return Ok(preflop_strength(hole)),
        3 => evaluate_five(&cards)?.class,
        4 | 5 => best_hand(&cards)?.class,
        actual => {
            return Err(EngineError::InvalidInputSize {
                expected: "0, 3, 4 or 5 community",
                actual,
            });
        }
    };
    Ok(f64::from(class.value()))
}
