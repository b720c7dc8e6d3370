//! Tests for board analysis over every possible board.

use dodo_tictactoe::{
    Board, Marker, Outcome, Position, Square, WINNING_LINES, evaluate, is_full, is_game_over,
    is_occupied, is_winning_set, legal_moves, occupied_by,
};
use strum::IntoEnumIterator;

/// Every assignment of Empty/X/O to the 9 squares (3^9 boards).
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut board = Board::new();
        for pos in Position::ALL {
            let square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Marker::X),
                _ => Square::Occupied(Marker::O),
            };
            board.set(pos, square);
            code /= 3;
        }
        board
    })
}

/// Whether both markers hold a line, which alternating play never produces.
fn both_markers_won(board: &Board) -> bool {
    is_winning_set(&occupied_by(board, Marker::X))
        && is_winning_set(&occupied_by(board, Marker::O))
}

#[test]
fn test_evaluate_is_symmetric() {
    for board in all_boards().filter(|board| !both_markers_won(board)) {
        for marker in Marker::iter() {
            let mine = evaluate(&board, marker);
            let theirs = evaluate(&board, marker.opponent());
            assert_eq!(mine == Outcome::Win, theirs == Outcome::Loss, "{}", board);
            assert_eq!(mine == Outcome::Loss, theirs == Outcome::Win, "{}", board);
        }
    }
}

#[test]
fn test_asked_marker_wins_when_both_hold_lines() {
    let board: Board = "OOO/XXX/---".parse().unwrap();
    assert!(both_markers_won(&board));
    assert_eq!(evaluate(&board, Marker::X), Outcome::Win);
    assert_eq!(evaluate(&board, Marker::O), Outcome::Win);
}

#[test]
fn test_cells_partition_the_board() {
    for board in all_boards() {
        let total = legal_moves(&board).len()
            + occupied_by(&board, Marker::X).len()
            + occupied_by(&board, Marker::O).len();
        assert_eq!(total, 9, "{}", board);
    }
}

#[test]
fn test_full_iff_no_legal_moves() {
    for board in all_boards() {
        assert_eq!(is_full(&board), legal_moves(&board).is_empty(), "{}", board);
    }
}

#[test]
fn test_game_over_matches_full_or_decided() {
    for board in all_boards() {
        let decided = evaluate(&board, Marker::X) != Outcome::Draw;
        assert_eq!(is_game_over(&board), is_full(&board) || decided, "{}", board);
    }
}

#[test]
fn test_winning_lines_and_supersets() {
    for line in WINNING_LINES {
        assert!(is_winning_set(&line));

        let mut superset = line.to_vec();
        superset.extend(Position::ALL.iter().filter(|pos| !line.contains(*pos)).take(2));
        assert!(is_winning_set(&superset));
    }
}

#[test]
fn test_small_sets_never_win() {
    assert!(!is_winning_set(&[]));
    for a in Position::ALL {
        assert!(!is_winning_set(&[a]));
        for b in Position::ALL {
            assert!(!is_winning_set(&[a, b]));
        }
    }
    assert!(!is_winning_set(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::BottomRight,
    ]));
}

#[test]
fn test_empty_board_legal_moves_are_row_major() {
    let expected: Vec<(usize, usize)> = vec![
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ];
    let actual: Vec<(usize, usize)> = legal_moves(&Board::new())
        .into_iter()
        .map(|pos| (pos.row(), pos.col()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_player_wins_on_anti_diagonal() {
    // O is the AI, X the player.
    let o = Square::Occupied(Marker::O);
    let x = Square::Occupied(Marker::X);
    let board = Board::from_rows([[o, o, x], [x, x, o], [x, o, Square::Empty]]);

    assert!(is_winning_set(&[
        Position::BottomLeft,
        Position::Center,
        Position::TopRight
    ]));
    assert_eq!(evaluate(&board, Marker::X), Outcome::Win);
    assert_eq!(evaluate(&board, Marker::O), Outcome::Loss);
    assert!(!is_full(&board));
    assert!(is_game_over(&board));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(is_full(&board));
    assert_eq!(evaluate(&board, Marker::X), Outcome::Draw);
    assert_eq!(evaluate(&board, Marker::O), Outcome::Draw);
    assert!(is_game_over(&board));
}

#[test]
fn test_out_of_range_is_occupied_on_every_board() {
    for board in all_boards() {
        assert!(is_occupied(&board, -1, 0), "{}", board);
    }
    assert!(is_occupied(&Board::new(), 3, 0));
    assert!(is_occupied(&Board::new(), 0, 3));
}

#[test]
fn test_occupied_cells_are_reported_occupied() {
    let board: Board = "X--/-O-/---".parse().unwrap();
    assert!(is_occupied(&board, 0, 0));
    assert!(is_occupied(&board, 1, 1));
    assert!(!is_occupied(&board, 2, 2));
}
