//! A depth-bounded minimax agent for playing the board game 'Connect 4'
//!
//! This agent searches the game tree a fixed number of plies ahead, scoring
//! the positions it cannot see past with a window-counting heuristic. Plain
//! minimax and alpha-beta pruning are both available and always agree on the
//! chosen move; alpha-beta just gets there visiting fewer positions.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{search::*, state::GameState};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three in a row along the bottom, open at both ends
//! let mut state = GameState::from_moves("223347")?;
//! let result = search(&mut state, 2, SearchMode::AlphaBeta);
//!
//! assert_eq!(result.score, WIN_SCORE);
//! assert_eq!(result.best_move, Some(0));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod state;

pub mod terminal;

pub mod evaluator;

pub mod search;

pub mod agent;


pub use agent::{Agent, MinimaxAgent};
pub use board::{Board, Cell, Player};
pub use error::EngineError;
pub use search::{SearchConfig, SearchMode, SearchResult};
pub use state::GameState;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WINDOW: usize = 4;

// a window has to fit along every axis or the scans below index out of bounds
const_assert!(WINDOW <= WIDTH);
const_assert!(WINDOW <= HEIGHT);
