//! Computer opponent move selection.
//!
//! ## Overview
//!
//! Two strategies, picked by `Difficulty`:
//!
//! - **Easy**: a uniformly random empty cell (`choose_random`)
//! - **Hard**: exhaustive depth-first minimax (`choose_minimax`), scoring
//!   wins as `10 - depth` and losses as `depth - 10` from the mover's view
//!
//! The 3x3 game tree is small enough to search completely on every move, so
//! there is no depth limit, memoization or move ordering. Alpha-beta pruning
//! can be switched on with `SearchConfig` and picks the same cell.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, GameRng, Symbol};
//! use rust_ttt::search::choose_minimax;
//!
//! let mut rng = GameRng::new(42);
//! let index = choose_minimax(&Board::new(), Symbol::X, Symbol::O, &mut rng).unwrap();
//! assert!(index < 9);
//! ```

pub mod config;
pub mod minimax;
pub mod policy;
pub mod random;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{choose_minimax, Minimax, WIN_SCORE};
pub use policy::{selector_for, MinimaxSelector, MoveSelector, RandomSelector};
pub use random::{choose_random, SelectError};
pub use stats::SearchStats;
