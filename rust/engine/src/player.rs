use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Represents a betting decision.
/// Raise amounts are the size of the raise itself, not the new total bet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Raise the current bet by the specified amount
    Raise(u32),
}

/// A seated player, as far as settlement is concerned.
///
/// `chips` is the live stack and is only touched by pot distribution;
/// `total_bet` is everything wagered this hand and drives side-pot tiers.
/// Folded players still fund every pot they contributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    /// Table seat; odd chips of a split pot go out in ascending seat order.
    pub seat: usize,
    pub chips: u32,
    /// Amount wagered in the current betting round.
    #[serde(default)]
    pub current_bet: u32,
    /// Amount wagered across the whole hand.
    #[serde(default)]
    pub total_bet: u32,
    #[serde(default)]
    pub is_folded: bool,
    #[serde(default)]
    pub hole: Option<[Card; 2]>,
}

impl Player {
    /// New player seated at `id`, with nothing wagered yet.
    pub fn new(id: usize, name: impl Into<String>, chips: u32) -> Self {
        Self {
            id,
            name: name.into(),
            seat: id,
            chips,
            current_bet: 0,
            total_bet: 0,
            is_folded: false,
            hole: None,
        }
    }

    pub fn with_hole(mut self, hole: [Card; 2]) -> Self {
        self.hole = Some(hole);
        self
    }

    pub fn with_seat(mut self, seat: usize) -> Self {
        self.seat = seat;
        self
    }
}
