//! # showdown-ai: Heuristic Poker Opponents
//!
//! Turns a hand-strength score into a betting action using thresholds tuned
//! per difficulty tier.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`difficulty`] - Difficulty tiers and their threshold presets
//! - [`strength`] - 0-10 hand strength from hole cards and board
//! - [`heuristic`] - The threshold decision table and [`HeuristicAI`](heuristic::HeuristicAI)
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use showdown_ai::decide;
//! use showdown_ai::difficulty::Difficulty;
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::game::GameState;
//! use showdown_engine::player::{Player, PlayerAction};
//!
//! let hole = parse_cards("As Ah").unwrap();
//! let player = Player::new(1, "bot", 1_000).with_hole([hole[0], hole[1]]);
//! let state = GameState::new(vec![], 0, 30, 20);
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let action = decide(&player, &state, &Difficulty::Hard.config(), &mut rng).unwrap();
//! assert_eq!(action, PlayerAction::Raise(20));
//! ```

use showdown_engine::errors::EngineError;
use showdown_engine::game::GameState;
use showdown_engine::player::{Player, PlayerAction};

pub mod difficulty;
pub mod heuristic;
pub mod strength;

pub use difficulty::{Difficulty, DifficultyConfig, ParseDifficultyError};
pub use heuristic::decide;

/// Trait defining the interface for AI opponents in poker games.
///
/// # Example Implementation
///
/// ```rust
/// use showdown_ai::AIOpponent;
/// use showdown_engine::errors::EngineError;
/// use showdown_engine::game::GameState;
/// use showdown_engine::player::{Player, PlayerAction};
///
/// struct Calling;
///
/// impl AIOpponent for Calling {
///     fn get_action(&mut self, _: &Player, _: &GameState) -> Result<PlayerAction, EngineError> {
///         Ok(PlayerAction::Call)
///     }
///
///     fn name(&self) -> &str {
///         "Calling"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Determine the next action for `player` given the table state.
    fn get_action(&mut self, player: &Player, state: &GameState) -> Result<PlayerAction, EngineError>;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

/// Factory function to create AI opponents by difficulty name.
///
/// # Example
///
/// ```rust
/// use showdown_ai::create_ai;
///
/// let ai = create_ai("medium", 42).unwrap();
/// assert_eq!(ai.name(), "HeuristicAI(medium)");
/// assert!(create_ai("impossible", 42).is_err());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Result<Box<dyn AIOpponent>, ParseDifficultyError> {
    let difficulty: Difficulty = ai_type.parse()?;
    Ok(Box::new(heuristic::HeuristicAI::new(difficulty, seed)))
}
