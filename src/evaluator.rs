//! Heuristic scoring of positions the search cannot see past

use crate::{
    board::{Board, Cell, Player},
    terminal::winner,
    WINDOW,
};

/// The score of a position won by player one
pub const WIN_SCORE: i32 = i32::MAX;
/// The score of a position won by player two
pub const LOSS_SCORE: i32 = -i32::MAX;

/// A window filled with the player's pieces
pub const FOUR_SCORE: i32 = 100;
/// One piece short of a full window, with the gap still open
pub const THREE_SCORE: i32 = 5;
/// Half a window, the rest open
pub const TWO_SCORE: i32 = 2;
/// The opponent is one piece short of a full window and needs blocking
pub const OPPONENT_THREE_SCORE: i32 = -4;

/// Scores a single window from `perspective`'s point of view
pub fn evaluate_window(cells: &[Cell; WINDOW], perspective: Player, opponent: Player) -> i32 {
    let own_count = cells.iter().filter(|&&c| c == perspective.to_cell()).count();
    let opponent_count = cells.iter().filter(|&&c| c == opponent.to_cell()).count();
    let empty_count = cells.iter().filter(|c| c.is_empty()).count();

    if own_count == WINDOW {
        FOUR_SCORE
    } else if own_count == WINDOW - 1 && empty_count == 1 {
        THREE_SCORE
    } else if own_count == WINDOW - 2 && empty_count == 2 {
        TWO_SCORE
    } else if opponent_count == WINDOW - 1 && empty_count == 1 {
        OPPONENT_THREE_SCORE
    } else {
        0
    }
}

/// Sums [`evaluate_window`] over every window on the board
pub fn evaluate_board(board: &Board, perspective: Player) -> i32 {
    let opponent = perspective.other();
    Board::windows()
        .map(|window| evaluate_window(&board.window_cells(&window), perspective, opponent))
        .sum()
}

/// The leaf score used by the search, always from player one's point of view
///
/// Won positions score [`WIN_SCORE`] or [`LOSS_SCORE`], full boards score 0
/// and anything else falls back to the heuristic.
pub fn value(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::PlayerOne) => WIN_SCORE,
        Some(Player::PlayerTwo) => LOSS_SCORE,
        None if board.is_full() => 0,
        None => evaluate_board(board, Player::PlayerOne),
    }
}
