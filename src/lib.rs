//! # rust-ttt
//!
//! A tic-tac-toe engine with a computer opponent, meant to sit behind a
//! presentation layer (GUI, TUI, web) that owns all rendering.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Rules are functions from a state and a cell index
//!    to a new state and an outcome. A rejected move leaves the caller's
//!    state untouched.
//!
//! 2. **No rendering references**: The core never holds a widget or window.
//!    The presentation layer drives it through `session::Session` events.
//!
//! 3. **Deterministic opponents**: The easy opponent draws from a seedable
//!    ChaCha8 RNG; the hard opponent is an exhaustive minimax search.
//!
//! ## Modules
//!
//! - `core`: Symbols, board, win lines, game state, RNG, configuration
//! - `rules`: Move application, win/draw detection, rematch, scores
//! - `search`: Random and minimax move selection
//! - `session`: Event dispatcher for a presentation layer

pub mod core;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Configuration, Difficulty, GameRng, GameState, GameStatus, Mode, Symbol, WinLine,
    WIN_LINES,
};

pub use crate::rules::{apply_move, new_game, record_result, rematch, GameResult, MoveError, Outcome, ScoreBoard};

pub use crate::search::{choose_minimax, choose_random, MoveSelector, SearchConfig, SearchStats, SelectError};

pub use crate::session::{MoveReport, Session, SessionError};
