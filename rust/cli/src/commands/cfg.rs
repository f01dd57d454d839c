//! `cfg`: show the resolved configuration with the source of every value.
//!
//! ```json
//! {
//!   "difficulty": { "value": "medium", "source": "default" },
//!   "seed": { "value": null, "source": "default" },
//!   "min_raise": { "value": 20, "source": "default" },
//!   "thresholds": { "value": { "fold_threshold": 1.5, ... }, "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "difficulty": {
            "value": config.difficulty,
            "source": sources.difficulty,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "min_raise": {
            "value": config.min_raise,
            "source": sources.min_raise,
        },
        "thresholds": {
            "value": config.thresholds,
            "source": sources.thresholds,
        }
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
