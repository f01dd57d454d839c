//! # Showdown CLI Library
//!
//! Command-line front end for the showdown settlement engine and the
//! heuristic AI.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `eval`: Evaluate 5 to 7 cards
//! - `settle`: Settle a hand from a JSON table, with side pots
//! - `decide`: Ask the AI for an action
//! - `deal`: Deal and settle a random hand from a seeded deck
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, ShowdownCli};
use commands::{
    DecideOverrides, Situation, handle_cfg_command, handle_deal_command, handle_decide_command,
    handle_eval_command, handle_settle_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses `args` (program name first) and dispatches to the subcommand.
/// Normal output goes to `out`, diagnostics to `err`.
///
/// # Returns
///
/// [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. Help and version output
/// count as success.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = ["showdown", "eval", "--cards", "As Ad Ac Kd Ks"];
/// let code = showdown_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Full House, Aces over Kings"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["eval", "settle", "decide", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    let _ = writeln!(err, "Usage: showdown <command> [options]\n");
                    let _ = writeln!(err, "Commands:");
                    for c in COMMANDS {
                        let _ = writeln!(err, "  {}", c);
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Settle { input, log, json } => {
            handle_settle_command(&input, log.as_deref(), json, out, err)
        }
        Commands::Decide {
            hole,
            board,
            to_call,
            pot,
            chips,
            min_raise,
            difficulty,
            seed,
        } => {
            let situation = Situation {
                hole: &hole,
                board: &board,
                to_call,
                pot,
                chips,
            };
            let overrides = DecideOverrides {
                min_raise,
                difficulty: difficulty.as_deref(),
                seed,
            };
            handle_decide_command(&situation, &overrides, out)
        }
        Commands::Deal {
            players,
            seed,
            bet,
        } => handle_deal_command(players, seed, bet, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
