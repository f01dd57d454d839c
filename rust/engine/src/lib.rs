//! # showdown-engine: Poker Settlement Core
//!
//! Evaluates poker hands, orders them, splits the chips wagered in a hand
//! into a main pot and side pots, and pays each pot to its winners without
//! ever losing or creating a chip.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), rank values and parsing
//! - [`combinations`] - Generic k-subset enumeration
//! - [`hand`] - Five-card evaluation, comparison, best-of-six/seven, winners
//! - [`pot`] - Side pot partitioning and chip-conserving distribution
//! - [`showdown`] - Per-pot winner resolution and payout orchestration
//! - [`player`] - Player state relevant to settlement
//! - [`game`] - Table state consumed by decision engines
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`logger`] - JSONL settlement records
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::hand::{best_hand, HandClass};
//!
//! let cards = parse_cards("As Ah Ad Kc Ks 2h 3c").unwrap();
//! let best = best_hand(&cards).unwrap();
//! assert_eq!(best.class, HandClass::FullHouse);
//! assert_eq!(best.description, "Full House, Aces over Kings");
//! ```
//!
//! ## Settling a Hand
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::player::Player;
//! use showdown_engine::showdown::settle_hand;
//!
//! let board = parse_cards("Qs Js Ts 2h 3c").unwrap();
//! let hole = |s: &str| {
//!     let c = parse_cards(s).unwrap();
//!     [c[0], c[1]]
//! };
//! let mut players = vec![
//!     Player::new(0, "short", 0).with_hole(hole("As Ks")),
//!     Player::new(1, "deep", 0).with_hole(hole("9d 9c")),
//! ];
//! players[0].total_bet = 50;
//! players[1].total_bet = 120;
//!
//! let result = settle_hand(&mut players, &board).unwrap();
//! assert_eq!(players[0].chips, 100); // main pot
//! assert_eq!(players[1].chips, 70); // side pot only player 1 could win
//! assert_eq!(result.total_awarded(), 170);
//! ```

pub mod cards;
pub mod combinations;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod showdown;
