use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The table as seen by a deciding player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Board cards dealt so far: 0, 3, 4 or 5.
    pub community_cards: Vec<Card>,
    /// Highest bet anyone has made this betting round.
    pub current_bet: u32,
    /// Chips in the middle.
    pub pot: u32,
    /// Table minimum raise, the only raise size the AI ever makes.
    pub min_raise: u32,
}

impl GameState {
    pub fn new(community_cards: Vec<Card>, current_bet: u32, pot: u32, min_raise: u32) -> Self {
        Self {
            community_cards,
            current_bet,
            pot,
            min_raise,
        }
    }

    /// Chips a player who already put `player_bet` in this round owes to call.
    pub fn to_call(&self, player_bet: u32) -> u32 {
        self.current_bet.saturating_sub(player_bet)
    }
}
