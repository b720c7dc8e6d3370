//! Board analysis rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here mutates the board
//! it is handed, and every function is total: odd inputs produce a
//! degenerate answer rather than an error.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_full, is_game_over};
pub use moves::{is_occupied, legal_moves, occupied_by};
pub use win::{WINNING_LINES, evaluate, is_winning_set};
