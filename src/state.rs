use crate::{
    board::{Board, Player},
    error::EngineError,
    terminal::{self, Status},
    WIDTH,
};

/// A board together with the player whose turn it is
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// An empty board with player one to move
    pub fn new() -> Self {
        Self::with_player(Board::new(), Player::PlayerOne)
    }

    pub fn with_player(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Replays a string of 1-indexed column numbers, e.g. `"4453"`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, EngineError> {
        let mut state = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    state.play_checked(column - 1)?;
                }
                _ => return Err(EngineError::UnparsableMove(column_char)),
            }
        }
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.legal_moves().collect()
    }

    pub fn status(&self) -> Status {
        terminal::status(&self.board)
    }

    pub fn is_terminal(&self) -> bool {
        terminal::is_terminal(&self.board)
    }

    /// Plays the current player's piece into `column` after validating the move
    ///
    /// Returns the status of the game after the move.
    pub fn play_checked(&mut self, column: usize) -> Result<Status, EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameOver);
        }
        let player = self.current_player;
        let row = self.board.drop_checked(column, player)?;
        self.current_player = player.other();

        // the board had no winner before this piece, so only its lines matter
        if terminal::is_winning_placement(&self.board, row, column, player) {
            Ok(match player {
                Player::PlayerOne => Status::PlayerOneWin,
                Player::PlayerTwo => Status::PlayerTwoWin,
            })
        } else if self.board.is_full() {
            Ok(Status::Draw)
        } else {
            Ok(Status::Playing)
        }
    }

    /// Places the current player's piece at a cell from [`Board::next_open_row`]
    /// and passes the turn
    pub fn place(&mut self, row: usize, column: usize) {
        self.board.drop_piece(row, column, self.current_player);
        self.current_player = self.current_player.other();
    }

    /// Exact inverse of [`place`](#method.place)
    pub fn undo(&mut self, row: usize, column: usize) {
        let previous = self.current_player.other();
        assert!(
            self.board.get(row, column) == previous.to_cell(),
            "({}, {}) was not placed by the previous player",
            row,
            column
        );
        self.board.remove_piece(row, column);
        self.current_player = previous;
    }

    /// Clears the board for a new game, player one to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::PlayerOne;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
