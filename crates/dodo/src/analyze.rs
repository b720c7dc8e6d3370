//! One-shot analysis of a board given on the command line.

use dodo_tictactoe::{
    Board, Marker, Outcome, Position, SearchStats, Searcher, acting_marker, evaluate,
    is_game_over, legal_moves,
};
use serde::Serialize;
use tracing::instrument;

/// Everything the engine can say about a board.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Compact text form of the board.
    pub board: String,
    /// Empty squares, row-major.
    pub legal_moves: Vec<Position>,
    /// Marker to act, by empty-square parity.
    pub to_move: Marker,
    /// Classification from X's point of view.
    pub outcome_x: Outcome,
    /// Classification from O's point of view.
    pub outcome_o: Outcome,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Engine's choice for the side to act.
    pub best_move: Option<Position>,
    /// Backed-up score for the side to act.
    pub score: i32,
    /// Result the side to act can force with perfect play.
    pub expected: Option<Outcome>,
    /// Search counters.
    pub stats: SearchStats,
}

impl Analysis {
    /// Analyzes `board` for the side to act.
    #[instrument(skip(board), fields(board = %board))]
    pub fn of(board: &Board) -> Self {
        let to_move = acting_marker(board);
        let report = Searcher::new().search(board, to_move, true);

        Self {
            board: board.to_string(),
            legal_moves: legal_moves(board),
            to_move,
            outcome_x: evaluate(board, Marker::X),
            outcome_o: evaluate(board, Marker::O),
            game_over: is_game_over(board),
            best_move: report.result.best_move,
            score: report.result.score,
            expected: Outcome::from_score(report.result.score),
            stats: report.stats,
        }
    }
}

/// Human-readable report.
impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let moves: Vec<String> = self.legal_moves.iter().map(ToString::to_string).collect();
        writeln!(f, "Board:       {}", self.board)?;
        writeln!(f, "Legal moves: {}", moves.join(" "))?;
        writeln!(f, "To move:     {}", self.to_move)?;
        writeln!(f, "X:           {}", self.outcome_x)?;
        writeln!(f, "O:           {}", self.outcome_o)?;
        writeln!(f, "Game over:   {}", self.game_over)?;
        match self.best_move {
            Some(pos) => writeln!(f, "Best move:   {} {}", pos, pos.label())?,
            None => writeln!(f, "Best move:   none")?,
        }
        if let Some(expected) = self.expected {
            writeln!(f, "Expected:    {} ({})", expected, self.score)?;
        }
        write!(f, "Nodes:       {}", self.stats.nodes)
    }
}
