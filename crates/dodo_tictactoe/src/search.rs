//! Exhaustive minimax search for tic-tac-toe.
//!
//! The search walks every legal continuation without pruning or caching.
//! Turn order is not stored on the board; it is inferred at each node from
//! the number of empty squares, with X assumed to move first.
//!
//! # Example
//!
//! ```
//! use dodo_tictactoe::{Board, Position, find_best_move};
//!
//! let board: Board = "XX-/-O-/---".parse().unwrap();
//! assert_eq!(find_best_move(&board), Some(Position::TopRight));
//! ```

use crate::outcome::{LOSS_SCORE, WIN_SCORE};
use crate::rules::{evaluate, legal_moves};
use crate::{Board, Marker, Outcome, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Best score reachable from a board and the move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Backed-up score: +1000 win, 0 draw, -1000 loss for the optimized marker.
    pub score: i32,
    /// First move, row-major, achieving `score`. `None` at terminal boards.
    pub best_move: Option<Position>,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, the root included.
    pub nodes: u64,
    /// Boards that were full or already decided.
    pub terminal_nodes: u64,
    /// Scans stopped early because the extremal score was found.
    pub short_circuits: u64,
}

/// A search result together with the counters gathered producing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The search result.
    pub result: SearchResult,
    /// Counters for this search.
    pub stats: SearchStats,
}

/// Returns the marker whose turn it is, from the parity of empty squares.
///
/// An odd count means the first mover (X) acts, an even count means O acts.
pub fn acting_marker(board: &Board) -> Marker {
    marker_for_empty_count(legal_moves(board).len())
}

fn marker_for_empty_count(empty: usize) -> Marker {
    if empty % 2 == 1 {
        Marker::FIRST
    } else {
        Marker::FIRST.opponent()
    }
}

/// Minimax searcher that records [`SearchStats`].
///
/// Holds no board state between calls; each call searches a private copy of
/// the board it is given.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches `board` scoring terminal boards for `optimize_for`.
    ///
    /// `maximizing` selects whether the root ply picks the highest or the
    /// lowest child score.
    #[instrument(level = "debug", skip(self, board), fields(board = %board))]
    pub fn search(
        &mut self,
        board: &Board,
        optimize_for: Marker,
        maximizing: bool,
    ) -> SearchReport {
        let before = self.stats;
        let mut scratch = *board;
        let result = self.minimax(&mut scratch, optimize_for, maximizing);

        let stats = SearchStats {
            nodes: self.stats.nodes - before.nodes,
            terminal_nodes: self.stats.terminal_nodes - before.terminal_nodes,
            short_circuits: self.stats.short_circuits - before.short_circuits,
        };
        debug!(
            score = result.score,
            best_move = ?result.best_move,
            nodes = stats.nodes,
            terminal_nodes = stats.terminal_nodes,
            short_circuits = stats.short_circuits,
            "Search complete"
        );

        SearchReport { result, stats }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        optimize_for: Marker,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        let moves = legal_moves(board);
        let marker = marker_for_empty_count(moves.len());
        let status = evaluate(board, optimize_for);

        if moves.is_empty() || status != Outcome::Draw {
            self.stats.terminal_nodes += 1;
            return SearchResult {
                score: status.score(),
                best_move: None,
            };
        }

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for pos in moves {
            board.set(pos, Square::Occupied(marker));
            let score = self.minimax(board, optimize_for, !maximizing).score;
            board.set(pos, Square::Empty);

            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if !improved {
                continue;
            }

            best_score = score;
            best_move = Some(pos);

            // Strict comparison means no later sibling can replace an extremal score.
            let extremal = if maximizing { WIN_SCORE } else { LOSS_SCORE };
            if best_score == extremal {
                self.stats.short_circuits += 1;
                break;
            }
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }
}

/// Searches `board` for the best score attainable by `optimize_for`.
pub fn search(board: &Board, optimize_for: Marker, maximizing: bool) -> SearchResult {
    Searcher::new()
        .search(board, optimize_for, maximizing)
        .result
}

/// Returns the best move for whichever marker is to act.
///
/// Returns `None` when the board has no empty square. A board that is
/// already decided but not full still yields `None`, since the root is
/// terminal.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn find_best_move(board: &Board) -> Option<Position> {
    let marker = acting_marker(board);
    let best = search(board, marker, true).best_move;
    debug!(marker = %marker, best_move = ?best, "Best move selected");
    best
}
