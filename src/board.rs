use std::fmt;

use crate::{error::EngineError, HEIGHT, WIDTH, WINDOW};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }

    /// 1 for the first player, 2 for the second
    pub fn number(self) -> usize {
        match self {
            Player::PlayerOne => 1,
            Player::PlayerTwo => 2,
        }
    }
}

/// The (row, column) coordinates of one line of `WINDOW` cells
pub type Window = [(usize, usize); WINDOW];

// row and column steps for horizontal, vertical, diagonal / and diagonal \ lines
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A Connect 4 grid
///
/// Row 0 is the bottom of the board and row `HEIGHT - 1` the top, so a
/// column is full once its top cell is taken and pieces always land on the
/// lowest empty row.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
    num_moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            num_moves: 0,
        }
    }

    /// Empties every cell
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The cell at `(row, column)`, row 0 being the bottom
    ///
    /// Panics if either coordinate is off the board.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < HEIGHT && column < WIDTH,
            "cell ({}, {}) is off the board",
            row,
            column
        );
        self.cells[column + WIDTH * row]
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && self.get(HEIGHT - 1, column).is_empty()
    }

    /// The row a piece dropped into `column` would land on, if any
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        if self.is_valid_move(column) {
            Some(self.heights[column])
        } else {
            None
        }
    }

    /// Playable columns in ascending order
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.is_valid_move(column))
    }

    pub fn is_full(&self) -> bool {
        self.num_moves == WIDTH * HEIGHT
    }

    /// Writes `piece` into a cell previously returned by [`next_open_row`]
    ///
    /// # Panics
    /// If the cell is not the next open cell of its column
    ///
    /// [`next_open_row`]: #method.next_open_row
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Player) {
        assert!(
            self.next_open_row(column) == Some(row),
            "drop at ({}, {}) is not the next open cell",
            row,
            column
        );
        self.cells[column + WIDTH * row] = piece.to_cell();
        self.heights[column] += 1;
        self.num_moves += 1;
    }

    /// Empties the top piece of a column, undoing [`drop_piece`]
    ///
    /// # Panics
    /// If `row` is not the topmost occupied row of `column`
    ///
    /// [`drop_piece`]: #method.drop_piece
    pub fn remove_piece(&mut self, row: usize, column: usize) {
        assert!(
            column < WIDTH && self.heights[column] == row + 1,
            "({}, {}) is not the top piece of its column",
            row,
            column
        );
        self.cells[column + WIDTH * row] = Cell::Empty;
        self.heights[column] -= 1;
        self.num_moves -= 1;
    }

    /// Drops a piece into `column`, returning the row it landed on
    pub fn drop_checked(&mut self, column: usize, piece: Player) -> Result<usize, EngineError> {
        if column >= WIDTH {
            return Err(EngineError::out_of_range(column));
        }
        let row = self
            .next_open_row(column)
            .ok_or_else(|| EngineError::full(column))?;
        self.drop_piece(row, column, piece);
        Ok(row)
    }

    /// Every horizontal, vertical and diagonal line of `WINDOW` cells on the board
    pub fn windows() -> impl Iterator<Item = Window> {
        DIRECTIONS.into_iter().flat_map(|(d_row, d_col)| {
            (0..HEIGHT).flat_map(move |row| {
                (0..WIDTH).filter_map(move |column| window_from(row, column, d_row, d_col))
            })
        })
    }

    pub fn window_cells(&self, window: &Window) -> [Cell; WINDOW] {
        let mut cells = [Cell::Empty; WINDOW];
        for (cell, &(row, column)) in cells.iter_mut().zip(window.iter()) {
            *cell = self.get(row, column);
        }
        cells
    }
}

fn window_from(row: usize, column: usize, d_row: isize, d_col: isize) -> Option<Window> {
    let span = WINDOW as isize - 1;
    let end_row = row as isize + d_row * span;
    let end_col = column as isize + d_col * span;
    if end_row < 0 || end_row >= HEIGHT as isize || end_col < 0 || end_col >= WIDTH as isize {
        return None;
    }

    let mut window = [(0, 0); WINDOW];
    for (i, coords) in window.iter_mut().enumerate() {
        *coords = (
            (row as isize + d_row * i as isize) as usize,
            (column as isize + d_col * i as isize) as usize,
        );
    }
    Some(window)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// player one is drawn as A and player two as B so they don't read as column numbers
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            write!(f, "|")?;
            for column in 0..WIDTH {
                let symbol = match self.get(row, column) {
                    Cell::PlayerOne => 'A',
                    Cell::PlayerTwo => 'B',
                    Cell::Empty => '.',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f, " |")?;
        }
        write!(f, " ")?;
        for column in 1..=WIDTH {
            write!(f, " {}", column)?;
        }
        Ok(())
    }
}
