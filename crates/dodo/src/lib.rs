//! Console front end for the dodo tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for a game
//! - **Session**: one human-versus-engine game with move validation
//! - **Console**: the prompt/print loop over any reader and writer
//! - **Analyze**: one-shot board report for the `analyze` command

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod console;
mod render;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DodoConfig, FirstPlayer};

// Crate-level exports - Game session
pub use session::{GameSession, SessionError, Turn};

// Crate-level exports - Front end
pub use analyze::Analysis;
pub use console::play;
pub use render::{render_banner, render_board, render_outcome};
