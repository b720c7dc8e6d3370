//! Text rendering for the console game.

use crate::config::DodoConfig;
use dodo_tictactoe::{Board, Marker, Outcome, Position};

/// Renders the board as three ` a | b | c ` rows. Empty squares show `-`.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| board.get(pos).symbol().to_string())
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();
    rows.join("\n-----------\n")
}

/// Renders the final result from the human's point of view.
pub fn render_outcome(outcome: Outcome) -> String {
    format!("PLAYER {}", outcome)
}

/// Greeting shown before the first move.
pub fn render_banner(config: &DodoConfig, human: Marker, ai: Marker) -> String {
    format!(
        "********************************\n\n\tTic Tac Toe {name}\n\n********************************\n\nPlayer = {human}\t {name} = {ai}",
        name = config.ai_name(),
        human = human,
        ai = ai,
    )
}
