//! Kani proof harnesses for board analysis.
//!
//! These check the analysis identities for every board Kani can construct,
//! not only the ones reachable by alternating play.

use crate::{
    Board, Marker, Position, Square, evaluate, is_full, is_winning_set, legal_moves, occupied_by,
};

impl kani::Arbitrary for Marker {
    fn any() -> Self {
        if kani::any() { Marker::X } else { Marker::O }
    }
}

impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, kani::any());
        }
        board
    }
}

/// Win for one marker is always Loss for the other, unless both hold a line.
#[kani::proof]
#[kani::unwind(10)]
fn verify_evaluate_symmetry() {
    let board: Board = kani::any();
    let marker: Marker = kani::any();
    kani::assume(
        !(is_winning_set(&occupied_by(&board, Marker::X))
            && is_winning_set(&occupied_by(&board, Marker::O))),
    );
    assert_eq!(
        evaluate(&board, marker),
        evaluate(&board, marker.opponent()).reversed()
    );
}

/// Every square is counted exactly once across empty, X and O.
#[kani::proof]
#[kani::unwind(10)]
fn verify_cell_partition() {
    let board: Board = kani::any();
    let total = legal_moves(&board).len()
        + occupied_by(&board, Marker::X).len()
        + occupied_by(&board, Marker::O).len();
    assert_eq!(total, 9);
    assert_eq!(is_full(&board), legal_moves(&board).is_empty());
}
