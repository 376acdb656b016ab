//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_cli::GameMode;
use tictactoe_engine::Player;

/// Tic-tac-toe with a perfect-play computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive rounds in the terminal
    Play {
        /// Who controls each mark (overrides the config file)
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Mark the computer plays in pvc mode: x or o
        #[arg(short, long, value_parser = parse_player)]
        computer: Option<Player>,

        /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
        #[arg(long)]
        config: Option<std::path::PathBuf>,

        /// Show the engine's suggestion before each human move
        #[arg(long)]
        hints: bool,
    },

    /// Print the best move and minimax score for a position
    Analyze {
        /// Nine cells in row order: X, O, and . for empty (e.g. "XX.OO....")
        position: String,
    },

    /// Let the engine play itself
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}

/// Parses a player mark, case-insensitively.
fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim() {
        "x" | "X" => Ok(Player::X),
        "o" | "O" => Ok(Player::O),
        other => Err(format!("'{}' is not a mark (expected x or o)", other)),
    }
}
