//! Move enumeration for tic-tac-toe.

use crate::{Board, Marker, Position, Square};
use tracing::instrument;

/// Returns every empty position, row-major.
///
/// The order is load-bearing: the search tries moves in this order and keeps
/// the first one reaching the best score.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Checks whether `(row, col)` is unavailable for a move.
///
/// This is membership in [`legal_moves`], not a bounds check, so any
/// coordinate off the board also reports `true`. Use
/// [`Position::from_coords`] to tell the two cases apart.
#[instrument(level = "trace", skip(board))]
pub fn is_occupied(board: &Board, row: i64, col: i64) -> bool {
    match Position::from_coords(row, col) {
        Some(pos) => !legal_moves(board).contains(&pos),
        None => true,
    }
}

/// Returns every position holding `marker`, row-major.
#[instrument(level = "trace", skip(board))]
pub fn occupied_by(board: &Board, marker: Marker) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.get(*pos) == Square::Occupied(marker))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_shrink_as_board_fills() {
        let mut board = Board::new();
        assert_eq!(legal_moves(&board).len(), 9);

        // Same sequence as a real game: X, O, X, O, X, O, X
        let sequence = [
            (Position::TopLeft, Marker::X),
            (Position::Center, Marker::O),
            (Position::BottomRight, Marker::X),
            (Position::TopRight, Marker::O),
            (Position::BottomLeft, Marker::X),
            (Position::MiddleLeft, Marker::O),
            (Position::BottomCenter, Marker::X),
        ];
        for (played, (pos, marker)) in sequence.into_iter().enumerate() {
            board.set(pos, Square::Occupied(marker));
            assert_eq!(legal_moves(&board).len(), 8 - played);
        }

        assert_eq!(
            legal_moves(&board),
            vec![Position::TopCenter, Position::MiddleRight]
        );
    }

    #[test]
    fn test_is_occupied_single_cell() {
        for occupied in Position::ALL {
            let mut board = Board::new();
            board.set(occupied, Square::Occupied(Marker::X));
            for pos in Position::ALL {
                assert_eq!(
                    is_occupied(&board, pos.row() as i64, pos.col() as i64),
                    pos == occupied
                );
            }
        }
    }

    #[test]
    fn test_is_occupied_out_of_range() {
        let board = Board::new();
        for (row, col) in [(-1, 0), (0, -1), (-1, -1), (1, 3), (3, 1), (3, 3)] {
            assert!(is_occupied(&board, row, col), "({}, {})", row, col);
        }
    }

    #[test]
    fn test_occupied_by_lists_marker_cells() {
        let board: Board = "X-O/OO-/X-X".parse().unwrap();
        assert_eq!(
            occupied_by(&board, Marker::X),
            vec![Position::TopLeft, Position::BottomLeft, Position::BottomRight]
        );
        assert_eq!(
            occupied_by(&board, Marker::O),
            vec![Position::TopRight, Position::MiddleLeft, Position::Center]
        );
        assert!(occupied_by(&Board::new(), Marker::X).is_empty());
    }
}
