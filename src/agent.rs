//! Move sources that a game driver can ask for a column

use log::{debug, trace, warn};

use std::time::{Duration, Instant};

use crate::{
    board::Player,
    error::EngineError,
    search::{SearchConfig, SearchMode, SearchResult, Searcher, MAX_RECOMMENDED_DEPTH},
    state::GameState,
};

/// Anything that can choose a column for the player to move
pub trait Agent {
    /// Returns a legal column for `state.current_player()`
    fn get_move(&mut self, state: &GameState) -> Result<usize, EngineError>;

    /// The agent's display name
    fn name(&self) -> &str;
}

/// An agent backed by a depth-bounded minimax search
pub struct MinimaxAgent {
    config: SearchConfig,
    last_search: Option<(SearchResult, Duration)>,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        if config.max_depth > MAX_RECOMMENDED_DEPTH {
            warn!(
                "search depth {} is above {}, moves may take a very long time",
                config.max_depth, MAX_RECOMMENDED_DEPTH
            );
        }
        Self {
            config,
            last_search: None,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// The result and duration of the most recent search, if any
    pub fn last_search(&self) -> Option<(SearchResult, Duration)> {
        self.last_search
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Agent for MinimaxAgent {
    fn get_move(&mut self, state: &GameState) -> Result<usize, EngineError> {
        if state.is_terminal() {
            return Err(EngineError::NoLegalMoves);
        }

        // the search runs on its own copy so the caller's state is never touched
        let mut scratch = *state;
        let maximizing = state.current_player() == Player::PlayerOne;

        let start_time = Instant::now();
        let result = Searcher::new(&mut scratch, self.config).search(maximizing);
        let elapsed = start_time.elapsed();
        debug_assert_eq!(&scratch, state);

        debug!(
            "{} selected {:?} (score {}) in {:.4}s, nodes: {}, leaves: {}",
            self.name(),
            result.best_move,
            result.score,
            elapsed.as_secs_f64(),
            result.node_count,
            result.leaf_count
        );
        trace!("board searched:\n{}", state.board());
        self.last_search = Some((result, elapsed));

        result.best_move.ok_or(EngineError::DepthMisconfiguration {
            max_depth: self.config.max_depth,
        })
    }

    fn name(&self) -> &str {
        match self.config.mode {
            SearchMode::Minimax => "Minimax",
            SearchMode::AlphaBeta => "Alpha-Beta",
        }
    }
}
