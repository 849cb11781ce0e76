//! Depth-bounded game tree search

use crate::{board::Player, evaluator::value, state::GameState, terminal::is_terminal, WIDTH};

pub use crate::evaluator::{LOSS_SCORE, WIN_SCORE};

/// Depths beyond this are allowed but take a very long time on an open board
pub const MAX_RECOMMENDED_DEPTH: usize = 10;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SearchMode {
    /// Visit every node down to the depth limit
    Minimax,
    /// Skip subtrees that cannot change the result
    AlphaBeta,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchConfig {
    /// Plies to look ahead, 0 evaluates the current position only
    pub max_depth: usize,
    pub mode: SearchMode,
}

impl SearchConfig {
    pub fn new(max_depth: usize, mode: SearchMode) -> Self {
        Self { max_depth, mode }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            mode: SearchMode::Minimax,
        }
    }
}

/// The outcome of one search
///
/// `score` is from player one's point of view. `best_move` is `None` only
/// when the root itself was terminal or the depth limit was 0.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
    /// Positions visited, including the root
    pub node_count: usize,
    /// Positions scored by the evaluator
    pub leaf_count: usize,
}

/// Runs a minimax search over a single game state
///
/// Every candidate move is played on the borrowed state and undone again
/// before the next one, so the state is unchanged once the search returns.
pub struct Searcher<'a> {
    state: &'a mut GameState,
    config: SearchConfig,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
    /// The number of leaf evaluations made by this `Searcher` so far
    pub leaf_count: usize,
}

impl<'a> Searcher<'a> {
    pub fn new(state: &'a mut GameState, config: SearchConfig) -> Self {
        Self {
            state,
            config,
            node_count: 0,
            leaf_count: 0,
        }
    }

    /// Searches the position, with player one maximizing and player two minimizing
    pub fn search(&mut self, maximizing: bool) -> SearchResult {
        self.node_count = 0;
        self.leaf_count = 0;

        let (score, best_move) = match self.config.mode {
            SearchMode::Minimax => self.minimax(0, maximizing),
            SearchMode::AlphaBeta => self.alpha_beta(0, maximizing, LOSS_SCORE, WIN_SCORE),
        };

        SearchResult {
            score,
            best_move,
            node_count: self.node_count,
            leaf_count: self.leaf_count,
        }
    }

    fn evaluate(&mut self) -> i32 {
        self.leaf_count += 1;
        value(self.state.board())
    }

    /// Plain minimax, returns the score and the move that achieves it
    fn minimax(&mut self, depth: usize, maximizing: bool) -> (i32, Option<usize>) {
        self.node_count += 1;

        if depth >= self.config.max_depth || is_terminal(self.state.board()) {
            return (self.evaluate(), None);
        }

        let mut best: Option<(i32, usize)> = None;
        // ascending column order, so equal scores keep the lowest column
        for column in 0..WIDTH {
            let row = match self.state.board().next_open_row(column) {
                Some(row) => row,
                None => continue,
            };

            self.state.place(row, column);
            let (score, _) = self.minimax(depth + 1, !maximizing);
            self.state.undo(row, column);

            if improves(best, score, maximizing) {
                best = Some((score, column));
            }
        }

        match best {
            Some((score, column)) => (score, Some(column)),
            // a non-terminal position always has a legal move
            None => (self.evaluate(), None),
        }
    }

    /// Minimax with alpha-beta pruning
    ///
    /// `alpha` is the score the maximizer is already guaranteed on this path
    /// and `beta` the score the minimizer is guaranteed. Once they cross, no
    /// remaining sibling can be chosen by both players and the node is cut off.
    fn alpha_beta(
        &mut self,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<usize>) {
        self.node_count += 1;

        if depth >= self.config.max_depth || is_terminal(self.state.board()) {
            return (self.evaluate(), None);
        }

        let mut best: Option<(i32, usize)> = None;
        for column in 0..WIDTH {
            let row = match self.state.board().next_open_row(column) {
                Some(row) => row,
                None => continue,
            };

            self.state.place(row, column);
            let (score, _) = self.alpha_beta(depth + 1, !maximizing, alpha, beta);
            self.state.undo(row, column);

            if improves(best, score, maximizing) {
                best = Some((score, column));
            }

            let best_score = best.map_or(score, |(best_score, _)| best_score);
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break;
            }
        }

        match best {
            Some((score, column)) => (score, Some(column)),
            None => (self.evaluate(), None),
        }
    }
}

// the first move always counts, later ones only when strictly better
fn improves(best: Option<(i32, usize)>, score: i32, maximizing: bool) -> bool {
    match best {
        None => true,
        Some((best_score, _)) if maximizing => score > best_score,
        Some((best_score, _)) => score < best_score,
    }
}

/// Searches `state` to `max_depth` plies with the side to move taken from the state
pub fn search(state: &mut GameState, max_depth: usize, mode: SearchMode) -> SearchResult {
    let maximizing = state.current_player() == Player::PlayerOne;
    Searcher::new(state, SearchConfig::new(max_depth, mode)).search(maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_scores_the_root() {
        let mut state = GameState::from_moves("4455").unwrap();
        let result = search(&mut state, 0, SearchMode::AlphaBeta);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, value(state.board()));
        assert_eq!((result.node_count, result.leaf_count), (1, 1));
    }

    #[test]
    fn terminal_root_has_no_move() {
        let mut state = GameState::from_moves("1212121").unwrap();
        for &mode in &[SearchMode::Minimax, SearchMode::AlphaBeta] {
            let result = search(&mut state, 3, mode);
            assert_eq!(result.best_move, None);
            assert_eq!(result.score, WIN_SCORE);
        }
    }

    #[test]
    fn depth_one_counts_every_child() {
        let mut state = GameState::new();
        let result = search(&mut state, 1, SearchMode::Minimax);
        assert_eq!(result.node_count, 1 + WIDTH);
        assert_eq!(result.leaf_count, WIDTH);
    }

    #[test]
    fn search_restores_the_state() {
        let mut state = GameState::from_moves("44536").unwrap();
        let before = state;
        for &mode in &[SearchMode::Minimax, SearchMode::AlphaBeta] {
            search(&mut state, 4, mode);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn improves_prefers_first_on_ties() {
        assert!(improves(None, LOSS_SCORE, true));
        assert!(!improves(Some((3, 0)), 3, true));
        assert!(improves(Some((3, 0)), 4, true));
        assert!(!improves(Some((3, 0)), 3, false));
        assert!(improves(Some((3, 0)), 2, false));
    }
}
