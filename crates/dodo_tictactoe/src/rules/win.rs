//! Win detection and outcome classification for tic-tac-toe.

use super::moves::occupied_by;
use crate::{Board, Marker, Outcome, Position};
use tracing::instrument;

/// The 8 lines that win the game when one marker holds all three cells.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Checks whether `positions` contains every cell of at least one winning line.
#[instrument(level = "trace")]
pub fn is_winning_set(positions: &[Position]) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|pos| positions.contains(pos)))
}

/// Classifies the board from `marker`'s point of view.
///
/// Returns `Draw` both for a full board without a line and for a game that
/// is still going. If both markers hold a line, `marker` is reported as
/// the winner.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board, marker: Marker) -> Outcome {
    if is_winning_set(&occupied_by(board, marker)) {
        Outcome::Win
    } else if is_winning_set(&occupied_by(board, marker.opponent())) {
        Outcome::Loss
    } else {
        Outcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            assert!(is_winning_set(&line), "{:?}", line);
        }
    }

    #[test]
    fn test_supersets_win() {
        assert!(is_winning_set(&[
            TopLeft,
            TopCenter,
            TopRight,
            MiddleLeft,
            BottomCenter
        ]));
        assert!(is_winning_set(&[
            TopLeft,
            MiddleLeft,
            Center,
            MiddleRight,
            BottomCenter
        ]));
        assert!(is_winning_set(&[
            TopLeft,
            TopCenter,
            BottomLeft,
            BottomCenter,
            BottomRight
        ]));
    }

    #[test]
    fn test_partial_lines_do_not_win() {
        assert!(!is_winning_set(&[]));
        assert!(!is_winning_set(&[TopLeft, Center]));
        assert!(!is_winning_set(&[TopLeft, TopCenter, MiddleLeft, BottomRight]));
        assert!(!is_winning_set(&[TopLeft, Center, BottomLeft, BottomCenter]));
        assert!(!is_winning_set(&[TopLeft, MiddleLeft, BottomCenter, BottomRight]));
    }

    #[test]
    fn test_evaluate_win_and_loss() {
        let board: Board = "OOO/XX-/X--".parse().unwrap();
        assert_eq!(evaluate(&board, Marker::O), Outcome::Win);
        assert_eq!(evaluate(&board, Marker::X), Outcome::Loss);
    }

    #[test]
    fn test_evaluate_prefers_asked_marker() {
        let board: Board = "OOO/XXX/---".parse().unwrap();
        assert_eq!(evaluate(&board, Marker::X), Outcome::Win);
        assert_eq!(evaluate(&board, Marker::O), Outcome::Win);
    }

    #[test]
    fn test_evaluate_undecided_is_draw() {
        assert_eq!(evaluate(&Board::new(), Marker::X), Outcome::Draw);
        let board: Board = "X--/-O-/---".parse().unwrap();
        assert_eq!(evaluate(&board, Marker::O), Outcome::Draw);
    }
}
