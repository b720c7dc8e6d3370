//! A single console game between a human and the engine.

use crate::config::FirstPlayer;
use dodo_tictactoe::{
    Board, Marker, Outcome, Position, Square, acting_marker, evaluate, find_best_move,
    is_game_over, is_occupied,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Error returned when a human move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The coordinates are not on the 3x3 board.
    #[display("The position ({}, {}) is off the board. Rows and columns run 0-2", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The square already holds a marker.
    #[display("The position {} is occupied. Try another one...", _0)]
    Occupied(Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for SessionError {}

/// What happened during one human turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Where the human played.
    pub human: Position,
    /// Where the engine replied, if the game was still going.
    pub reply: Option<Position>,
    /// Whether the game is over after this turn.
    pub finished: bool,
}

/// Board plus marker assignment for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    human: Marker,
    ai: Marker,
}

impl GameSession {
    /// Starts a game. When the engine moves first it plays X and opens at once.
    #[instrument]
    pub fn new(first_player: FirstPlayer) -> Self {
        let human = match first_player {
            FirstPlayer::Human => Marker::FIRST,
            FirstPlayer::Ai => Marker::FIRST.opponent(),
        };
        let mut session = Self {
            board: Board::new(),
            human,
            ai: human.opponent(),
        };
        info!(human = %session.human, ai = %session.ai, "Starting game session");

        if first_player == FirstPlayer::Ai {
            session.play_ai();
        }
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker played by the human.
    pub fn human(&self) -> Marker {
        self.human
    }

    /// Marker played by the engine.
    pub fn ai(&self) -> Marker {
        self.ai
    }

    /// Checks whether the game has ended.
    pub fn is_over(&self) -> bool {
        is_game_over(&self.board)
    }

    /// Result from the human's point of view, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| evaluate(&self.board, self.human))
    }

    /// Places the human marker at `(row, col)` and lets the engine reply.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] once the game has ended,
    /// [`SessionError::OutOfBounds`] for coordinates off the board, and
    /// [`SessionError::Occupied`] for a square that already holds a marker.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn play_human(&mut self, row: i64, col: i64) -> Result<Turn, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        let pos = Position::from_coords(row, col).ok_or_else(|| {
            warn!(row, col, "Move off the board");
            SessionError::OutOfBounds { row, col }
        })?;
        if is_occupied(&self.board, row, col) {
            warn!(position = %pos, "Square already occupied");
            return Err(SessionError::Occupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.human));
        info!(position = %pos, marker = %self.human, "Human move");

        let reply = if self.is_over() { None } else { self.play_ai() };

        Ok(Turn {
            human: pos,
            reply,
            finished: self.is_over(),
        })
    }

    /// Applies the engine's best move for the side to act.
    fn play_ai(&mut self) -> Option<Position> {
        debug_assert_eq!(acting_marker(&self.board), self.ai);
        let pos = find_best_move(&self.board)?;
        self.board.set(pos, Square::Occupied(self.ai));
        info!(position = %pos, marker = %self.ai, "Engine move");
        debug!(board = %self.board, "Board after engine move");
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_first_plays_x() {
        let session = GameSession::new(FirstPlayer::Human);
        assert_eq!(session.human(), Marker::X);
        assert_eq!(session.ai(), Marker::O);
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_errors_leave_board_unchanged() {
        let mut session = GameSession::new(FirstPlayer::Human);
        let turn = session.play_human(1, 1).unwrap();
        let before = *session.board();

        assert_eq!(
            session.play_human(1, 1),
            Err(SessionError::Occupied(Position::Center))
        );
        if let Some(reply) = turn.reply {
            assert_eq!(
                session.play_human(reply.row() as i64, reply.col() as i64),
                Err(SessionError::Occupied(reply))
            );
        }
        assert_eq!(
            session.play_human(-1, 0),
            Err(SessionError::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(*session.board(), before);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SessionError::Occupied(Position::TopRight).to_string(),
            "The position (0, 2) is occupied. Try another one..."
        );
        assert!(
            SessionError::OutOfBounds { row: 3, col: 1 }
                .to_string()
                .contains("(3, 1)")
        );
    }
}
