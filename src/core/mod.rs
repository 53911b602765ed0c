//! Core types: symbols, board, game state, RNG, configuration.
//!
//! These are plain data. Rules live in `rules`, move choice in `search`.

pub mod symbol;
pub mod board;
pub mod state;
pub mod rng;
pub mod config;

pub use symbol::{Symbol, SymbolMap};
pub use board::{Board, Cell, CellList, WinLine, CELL_COUNT, WIN_LINES};
pub use state::{GameState, GameStatus};
pub use rng::GameRng;
pub use config::{Configuration, Difficulty, Mode};
