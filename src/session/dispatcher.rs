//! Event dispatcher for a presentation layer.
//!
//! `Session` owns the current game, the scores, the configuration and the
//! computer opponent. Each presentation event maps onto one method, which
//! delegates to the pure functions in `rules` and `search`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Configuration, Difficulty, GameRng, GameState, Mode, Symbol};
use crate::rules::{self, MoveError, Outcome, ScoreBoard};
use crate::search::{selector_for, MoveSelector, SearchConfig, SearchStats};

use super::error::SessionError;

/// A move that was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Cell that was marked.
    pub index: usize,
    /// Symbol that moved.
    pub symbol: Symbol,
    /// What the move did.
    pub outcome: Outcome,
}

/// One play session: a sequence of games sharing a scoreboard.
#[derive(Debug)]
pub struct Session {
    config: Configuration,
    search_config: SearchConfig,
    state: GameState,
    scores: ScoreBoard,
    rng: GameRng,
    selector: Box<dyn MoveSelector>,
}

impl Session {
    /// Start a session with a fresh game and zeroed scores.
    pub fn new(config: Configuration) -> Self {
        let search_config = SearchConfig::default();
        let rng = rng_for(&config);
        let selector = selector_for(config.difficulty, &search_config);
        debug!(?config, seed = rng.seed(), "session created");

        Self {
            config,
            search_config,
            state: GameState::new(),
            scores: ScoreBoard::new(),
            rng,
            selector,
        }
    }

    /// Replace the search configuration used by the hard opponent.
    #[must_use]
    pub fn with_search_config(mut self, search_config: SearchConfig) -> Self {
        self.selector = selector_for(self.config.difficulty, &search_config);
        self.search_config = search_config;
        self
    }

    // === Rendering outputs ===

    /// Current game: board, turn and status.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Wins per symbol since the last new game.
    #[must_use]
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Current configuration.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Statistics from the hard opponent's last search.
    #[must_use]
    pub fn last_search_stats(&self) -> Option<&SearchStats> {
        self.selector.stats()
    }

    // === Move events ===

    /// A cell was picked, by a human or a scheduled computer turn.
    ///
    /// Places the current symbol and tallies a win. On error nothing changes.
    #[instrument(level = "debug", skip(self))]
    pub fn cell_selected(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        let symbol = self.state.current();
        let (next, outcome) = rules::apply_move(&self.state, index)?;

        self.state = next;
        self.scores = rules::record_result(&self.scores, &outcome);

        match outcome {
            Outcome::Win(winner, line) => {
                info!(%winner, line = ?line.cells(), x = self.scores[Symbol::X], o = self.scores[Symbol::O], "game won");
            }
            Outcome::Draw => info!("game drawn"),
            Outcome::Continue => {}
        }

        Ok(MoveReport { index, symbol, outcome })
    }

    /// Check whether the presentation layer should schedule a computer turn.
    #[must_use]
    pub fn computer_to_move(&self) -> bool {
        self.config.mode == Mode::HumanVsComputer
            && !self.state.is_terminal()
            && self.state.current() == self.config.computer_symbol()
    }

    /// Pick and play the computer's move.
    #[instrument(level = "debug", skip(self))]
    pub fn play_computer_turn(&mut self) -> Result<MoveReport, SessionError> {
        if !self.computer_to_move() {
            return Err(SessionError::NotComputerTurn);
        }

        let acting = self.config.computer_symbol();
        let index = self.selector.select(self.state.board(), acting, &mut self.rng)?;
        debug!(index, difficulty = ?self.config.difficulty, "computer chose cell");

        Ok(self.cell_selected(index)?)
    }

    // === Game lifecycle events ===

    /// Clear the board and keep the scores.
    #[instrument(level = "debug", skip(self))]
    pub fn rematch_requested(&mut self) {
        self.state = rules::rematch(&self.state);
    }

    /// Clear the board and the scores.
    #[instrument(level = "debug", skip(self))]
    pub fn new_game_requested(&mut self) {
        self.scores = rules::new_game(&self.scores);
        self.state = rules::rematch(&self.state);
    }

    // === Configuration events ===

    /// Switch between two humans and human against computer. Rematches.
    pub fn set_mode(&mut self, mode: Mode) {
        let config = self.config.clone().with_mode(mode);
        self.set_configuration(config);
    }

    /// Change the computer's strength. The current game continues.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        let config = self.config.clone().with_difficulty(difficulty);
        self.set_configuration(config);
    }

    /// Change the human's symbol. Rematches so the right side opens.
    pub fn set_human_symbol(&mut self, symbol: Symbol) {
        let config = self.config.clone().with_human_symbol(symbol);
        self.set_configuration(config);
    }

    /// Apply a full configuration.
    ///
    /// A change of mode or human symbol rematches (scores kept). A change of
    /// difficulty swaps the selector. A change of seed reseeds the RNG.
    #[instrument(level = "debug", skip(self))]
    pub fn set_configuration(&mut self, config: Configuration) {
        let old = std::mem::replace(&mut self.config, config);

        if old.difficulty != self.config.difficulty {
            self.selector = selector_for(self.config.difficulty, &self.search_config);
        }
        if old.seed != self.config.seed {
            self.rng = rng_for(&self.config);
        }
        if old.mode != self.config.mode || old.human_symbol != self.config.human_symbol {
            debug!(mode = ?self.config.mode, human = %self.config.human_symbol, "setup changed, rematching");
            self.rematch_requested();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

fn rng_for(config: &Configuration) -> GameRng {
    match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    }
}
