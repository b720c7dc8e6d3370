//! Interactive console loop for a game against the engine.

use crate::config::DodoConfig;
use crate::render::{render_banner, render_board, render_outcome};
use crate::session::GameSession;
use anyhow::{Context, Result};
use dodo_tictactoe::{Board, Outcome};
use std::io::{BufRead, Lines, Write};
use tracing::{debug, info, instrument};

/// Plays one game, reading coordinates from `input` and writing to `output`.
///
/// Unparsable, occupied, and off-board coordinates are reported and the
/// player is prompted again. Returns the outcome for the human.
///
/// # Errors
///
/// Fails if `input` ends before the game does, or on an I/O error.
#[instrument(skip_all, fields(first_player = %config.first_player()))]
pub fn play<R: BufRead, W: Write>(
    config: &DodoConfig,
    input: R,
    output: &mut W,
) -> Result<Outcome> {
    let mut session = GameSession::new(*config.first_player());
    let mut lines = input.lines();

    if *config.show_banner() {
        writeln!(output, "{}", render_banner(config, session.human(), session.ai()))?;
        writeln!(output)?;
    }
    if *session.board() != Board::new() {
        writeln!(output, "{}", render_board(session.board()))?;
        writeln!(output)?;
    }

    while !session.is_over() {
        let row = read_coordinate(&mut lines, output, "Row play: ")?;
        let col = read_coordinate(&mut lines, output, "Col play: ")?;
        writeln!(output)?;
        writeln!(output)?;

        match session.play_human(row, col) {
            Ok(turn) => {
                debug!(?turn, "Turn complete");
                if let Some(reply) = turn.reply {
                    writeln!(output, "{} plays {}", config.ai_name(), reply)?;
                }
                writeln!(output)?;
                writeln!(output, "{}", render_board(session.board()))?;
                writeln!(output)?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    let outcome = session
        .outcome()
        .context("Game loop ended before the game was over")?;
    info!(%outcome, "Game over");

    writeln!(output, "********** GAME OVER **********")?;
    writeln!(output)?;
    writeln!(output, "{}", render_outcome(outcome))?;
    Ok(outcome)
}

/// Prompts until a line parses as an integer.
fn read_coordinate<B: BufRead, W: Write>(
    lines: &mut Lines<B>,
    output: &mut W,
    prompt: &str,
) -> Result<i64> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let line = lines
            .next()
            .context("Input ended before the game finished")?
            .context("Failed to read input")?;
        let trimmed = line.trim();

        match trimmed.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "'{}' is not a number. Try again...", trimmed)?,
        }
    }
}
