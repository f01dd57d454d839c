//! Difficulty tiers and their decision thresholds.
//!
//! The decision engine has no notion of difficulty; it only reads whichever
//! [`DifficultyConfig`] it is handed. [`Difficulty`] just names the presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named difficulty tier selecting a preset [`DifficultyConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn config(self) -> DifficultyConfig {
        DifficultyConfig::preset(self)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty: {0} (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Thresholds on the 0-10 adjusted hand strength scale.
///
/// The strength is multiplied by a factor drawn uniformly from
/// `[variance_min, variance_min + variance_range)` before it is compared
/// against the thresholds. `pot_odds_threshold` is the largest
/// `to_call / pot` ratio at which a weak hand still calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub fold_threshold: f64,
    pub call_threshold: f64,
    pub raise_threshold: f64,
    pub variance_min: f64,
    pub variance_range: f64,
    pub pot_odds_threshold: f64,
}

impl DifficultyConfig {
    pub fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            // loose and noisy
            Difficulty::Easy => Self {
                fold_threshold: 1.0,
                call_threshold: 2.5,
                raise_threshold: 7.0,
                variance_min: 0.5,
                variance_range: 1.0,
                pot_odds_threshold: 0.5,
            },
            Difficulty::Medium => Self {
                fold_threshold: 1.5,
                call_threshold: 3.0,
                raise_threshold: 6.0,
                variance_min: 0.75,
                variance_range: 0.5,
                pot_odds_threshold: 0.33,
            },
            // tighter, raises more readily, little noise
            Difficulty::Hard => Self {
                fold_threshold: 2.0,
                call_threshold: 3.5,
                raise_threshold: 5.5,
                variance_min: 0.9,
                variance_range: 0.2,
                pot_odds_threshold: 0.25,
            },
        }
    }

    /// Checks the thresholds are usable: non-negative, finite, and ordered
    /// `fold <= call <= raise`.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("fold_threshold", self.fold_threshold),
            ("call_threshold", self.call_threshold),
            ("raise_threshold", self.raise_threshold),
            ("variance_min", self.variance_min),
            ("variance_range", self.variance_range),
            ("pot_odds_threshold", self.pot_odds_threshold),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(format!("{} must be a non-negative number", name));
        }
        if self.fold_threshold > self.call_threshold || self.call_threshold > self.raise_threshold {
            return Err("thresholds must satisfy fold <= call <= raise".into());
        }
        Ok(())
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::preset(Difficulty::Medium)
    }
}
