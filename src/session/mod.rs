//! In-process event interface for a presentation layer.
//!
//! The presentation layer owns windows, widgets and timing. It forwards user
//! actions to a `Session` and renders from the session's outputs:
//!
//! - `cell_selected`, `rematch_requested`, `new_game_requested`
//! - `set_mode`, `set_difficulty`, `set_human_symbol`
//! - `computer_to_move` / `play_computer_turn` for the computer opponent
//!
//! ```
//! use rust_ttt::core::{Configuration, Mode, Symbol};
//! use rust_ttt::session::Session;
//!
//! let config = Configuration::default()
//!     .with_mode(Mode::HumanVsComputer)
//!     .with_seed(1);
//! let mut session = Session::new(config);
//!
//! session.cell_selected(4).unwrap();
//! if session.computer_to_move() {
//!     session.play_computer_turn().unwrap();
//! }
//! assert_eq!(session.state().current(), Symbol::X);
//! ```

mod dispatcher;
mod error;

pub use dispatcher::{MoveReport, Session};
pub use error::SessionError;
