//! Command-line interface for dodo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dodo - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "dodo")]
#[command(about = "Tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the terminal
    Play {
        /// Let the engine open the game (it then plays X)
        #[arg(long)]
        ai_first: bool,
    },

    /// Analyze a board, e.g. "XX-/-O-/---"
    Analyze {
        /// Nine cells row-major: X, O, or -/./_ for empty
        board: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
