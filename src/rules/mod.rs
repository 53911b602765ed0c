//! Tic-tac-toe rules.
//!
//! - `engine`: move legality, move application, win/draw detection, rematch
//! - `score`: win tallies that survive rematches
//!
//! All operations are pure functions over `core` types. Nothing here holds
//! state between calls.

pub mod engine;
pub mod score;

pub use engine::{apply_move, check_move, evaluate, rematch, GameResult, MoveError, Outcome};
pub use score::{new_game, record_result, ScoreBoard};
