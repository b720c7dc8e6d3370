//! Full-board and game-over detection for tic-tac-toe.

use super::moves::legal_moves;
use super::win::evaluate;
use crate::{Board, Marker, Outcome};
use tracing::instrument;

/// Checks if no empty square remains.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    legal_moves(board).is_empty()
}

/// Checks if the game has ended, by a completed line or a full board.
///
/// Fullness is tested on its own because [`evaluate`] reports `Draw` for an
/// unfinished board as well as a drawn one.
#[instrument(level = "trace", skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    is_full(board) || evaluate(board, Marker::O) != Outcome::Draw
}
