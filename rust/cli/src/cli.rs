//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Poker showdown settlement: hand evaluation, side pots, payouts and AI decisions"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate 5, 6 or 7 cards and print the best hand
    Eval {
        /// Cards such as "As Kd Qh Jc Ts"
        #[arg(long)]
        cards: String,
    },
    /// Settle a hand described by a JSON table file
    Settle {
        /// Path to the table JSON
        #[arg(long)]
        input: String,
        /// Append the settlement as a JSONL record to this file
        #[arg(long)]
        log: Option<String>,
        /// Print the settlement as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Ask the AI for an action
    Decide {
        /// The two hole cards
        #[arg(long)]
        hole: String,
        /// Community cards (0, 3, 4 or 5)
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, default_value_t = 0)]
        to_call: u32,
        #[arg(long, default_value_t = 0)]
        pot: u32,
        #[arg(long, default_value_t = 1_000)]
        chips: u32,
        /// Overrides the configured raise size
        #[arg(long)]
        min_raise: Option<u32>,
        /// easy, medium or hard; overrides the configured difficulty
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal a random hand from a seeded deck and settle it
    Deal {
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        #[arg(long)]
        seed: Option<u64>,
        /// Amount every player puts in
        #[arg(long, default_value_t = 100)]
        bet: u32,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_subcommand() {
        let commands = vec![
            vec!["showdown", "cfg"],
            vec!["showdown", "eval", "--cards", "As Kd Qh Jc Ts"],
            vec!["showdown", "settle", "--input", "t.json", "--log", "x.jsonl"],
            vec!["showdown", "decide", "--hole", "As Ah", "--to-call", "20"],
            vec!["showdown", "deal", "--players", "6", "--seed", "1"],
        ];
        for args in commands {
            assert!(ShowdownCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }

    #[test]
    fn deal_player_count_is_bounded() {
        assert!(ShowdownCli::try_parse_from(["showdown", "deal", "--players", "1"]).is_err());
        assert!(ShowdownCli::try_parse_from(["showdown", "deal", "--players", "11"]).is_err());
        assert!(ShowdownCli::try_parse_from(["showdown", "deal", "--players", "10"]).is_ok());
    }

    #[test]
    fn decide_defaults() {
        let cli = ShowdownCli::try_parse_from(["showdown", "decide", "--hole", "7c 2d"]).unwrap();
        match cli.cmd {
            Commands::Decide {
                board,
                to_call,
                chips,
                difficulty,
                ..
            } => {
                assert!(board.is_empty());
                assert_eq!(to_call, 0);
                assert_eq!(chips, 1_000);
                assert!(difficulty.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
