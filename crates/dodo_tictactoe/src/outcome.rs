//! Board outcomes and their search scores.

use serde::{Deserialize, Serialize};

/// Score of a board won by the marker being optimized for.
pub const WIN_SCORE: i32 = 1000;

/// Score of a drawn or undecided board.
pub const DRAW_SCORE: i32 = 0;

/// Score of a board lost by the marker being optimized for.
pub const LOSS_SCORE: i32 = -1000;

/// Classification of a board from one marker's point of view.
///
/// `Draw` covers both a full board with no line and a game still in
/// progress; use [`crate::is_game_over`] to tell them apart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Outcome {
    /// The marker holds a winning line.
    #[strum(serialize = "WIN")]
    Win,
    /// Neither marker holds a winning line.
    #[strum(serialize = "DRAW")]
    Draw,
    /// The opponent holds a winning line.
    #[strum(serialize = "LOSS")]
    Loss,
}

impl Outcome {
    /// Search score for this outcome.
    pub fn score(self) -> i32 {
        match self {
            Outcome::Win => WIN_SCORE,
            Outcome::Draw => DRAW_SCORE,
            Outcome::Loss => LOSS_SCORE,
        }
    }

    /// Maps one of the three outcome scores back to its outcome.
    pub fn from_score(score: i32) -> Option<Self> {
        match score {
            WIN_SCORE => Some(Outcome::Win),
            DRAW_SCORE => Some(Outcome::Draw),
            LOSS_SCORE => Some(Outcome::Loss),
            _ => None,
        }
    }

    /// The same board seen from the other marker.
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Draw => Outcome::Draw,
            Outcome::Loss => Outcome::Win,
        }
    }
}
