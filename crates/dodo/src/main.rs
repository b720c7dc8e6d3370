//! Dodo - console tic-tac-toe against a perfect-play engine.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use dodo::{Analysis, Cli, Command, DodoConfig, FirstPlayer};
use dodo_tictactoe::Board;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DodoConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play { ai_first } => run_play(config, ai_first),
        Command::Analyze { board, json } => run_analyze(&board, json),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
fn run_play(config: DodoConfig, ai_first: bool) -> Result<()> {
    let config = if ai_first {
        config.with_first_player(FirstPlayer::Ai)
    } else {
        config
    };
    info!(first_player = %config.first_player(), "Starting console game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    dodo::play(&config, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Print the analysis of one board
fn run_analyze(board: &str, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let analysis = Analysis::of(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}
