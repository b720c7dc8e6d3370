//! Perfect-play tic-tac-toe engine.
//!
//! This crate contains the board model, pure board analysis, and an
//! exhaustive minimax search that picks the objectively best move.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Marker`], [`Square`], [`Position`], [`Outcome`]
//! - **Rules**: legal moves, occupancy, win detection, outcome classification
//! - **Search**: unpruned minimax with row-major tie-breaking
//!
//! # Example
//!
//! ```
//! use dodo_tictactoe::{Board, Marker, Outcome, evaluate, find_best_move, is_game_over};
//!
//! let board: Board = "OOX/XXO/XO-".parse().unwrap();
//! assert_eq!(evaluate(&board, Marker::X), Outcome::Win);
//! assert!(is_game_over(&board));
//! assert_eq!(find_best_move(&board), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod outcome;
mod position;
pub mod rules;
mod search;
mod types;

#[cfg(kani)]
mod verification;

// Crate-level exports - Domain types
pub use error::BoardParseError;
pub use outcome::{DRAW_SCORE, LOSS_SCORE, Outcome, WIN_SCORE};
pub use position::Position;
pub use types::{Board, Marker, Square};

// Crate-level exports - Board analysis
pub use rules::{
    WINNING_LINES, evaluate, is_full, is_game_over, is_occupied, is_winning_set, legal_moves,
    occupied_by,
};

// Crate-level exports - Search
pub use search::{
    SearchReport, SearchResult, SearchStats, Searcher, acting_marker, find_best_move, search,
};
