//! Win and draw detection

use crate::{
    board::{Board, Player, DIRECTIONS},
    HEIGHT, WIDTH, WINDOW,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Status {
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::PlayerOneWin => Some(Player::PlayerOne),
            Status::PlayerTwoWin => Some(Player::PlayerTwo),
            _ => None,
        }
    }

    pub fn is_over(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// Whether every cell of some window holds `player`'s piece
pub fn has_won(board: &Board, player: Player) -> bool {
    let piece = player.to_cell();
    Board::windows().any(|window| {
        board
            .window_cells(&window)
            .iter()
            .all(|&cell| cell == piece)
    })
}

/// Scans the whole board for four in a row
pub fn winner(board: &Board) -> Option<Player> {
    if has_won(board, Player::PlayerOne) {
        Some(Player::PlayerOne)
    } else if has_won(board, Player::PlayerTwo) {
        Some(Player::PlayerTwo)
    } else {
        None
    }
}

pub fn is_draw(board: &Board) -> bool {
    board.legal_moves().next().is_none() && winner(board).is_none()
}

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_draw(board)
}

pub fn status(board: &Board) -> Status {
    match winner(board) {
        Some(Player::PlayerOne) => Status::PlayerOneWin,
        Some(Player::PlayerTwo) => Status::PlayerTwoWin,
        None if board.legal_moves().next().is_none() => Status::Draw,
        None => Status::Playing,
    }
}

/// Checks only the four lines through `(row, column)` for a run of `player`'s pieces
///
/// Equivalent to [`winner`] returning `player` on a board that had no winner
/// before the piece at `(row, column)` was placed. Returns false if that cell
/// does not hold `player`'s piece.
pub fn is_winning_placement(board: &Board, row: usize, column: usize, player: Player) -> bool {
    let piece = player.to_cell();
    if row >= HEIGHT || column >= WIDTH || board.get(row, column) != piece {
        return false;
    }

    for &(d_row, d_col) in DIRECTIONS.iter() {
        // count the placed piece, then walk outwards both ways
        let mut run = 1;
        for sign in [-1isize, 1].iter() {
            let mut y = row as isize + sign * d_row;
            let mut x = column as isize + sign * d_col;
            loop {
                if x < 0
                    || x >= WIDTH as isize
                    || y < 0
                    || y >= HEIGHT as isize
                    || board.get(y as usize, x as usize) != piece
                {
                    break;
                }
                y += sign * d_row;
                x += sign * d_col;
                run += 1;
            }
        }
        if run >= WINDOW {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn place(board: &mut Board, cells: &[(usize, usize)], player: Player) {
        // fill the columns below each target with the other player
        for &(row, column) in cells {
            while board.next_open_row(column) != Some(row) {
                board.drop_checked(column, player.other()).unwrap();
            }
            board.drop_checked(column, player).unwrap();
        }
    }

    #[test]
    fn every_window_of_four_wins() {
        for window in Board::windows() {
            for &player in &[Player::PlayerOne, Player::PlayerTwo] {
                let mut board = Board::new();
                place(&mut board, &window, player);
                assert!(has_won(&board, player), "{:?} should win\n{}", window, board);
                assert!(winner(&board).is_some());
                assert!(is_terminal(&board));
            }
        }
    }

    #[test]
    fn mixed_window_does_not_win() {
        let mut board = Board::new();
        board.drop_checked(0, Player::PlayerOne).unwrap();
        board.drop_checked(1, Player::PlayerOne).unwrap();
        board.drop_checked(2, Player::PlayerTwo).unwrap();
        board.drop_checked(3, Player::PlayerOne).unwrap();
        assert_eq!(winner(&board), None);
        assert_eq!(status(&board), Status::Playing);
    }

    #[test]
    fn gapped_window_does_not_win() {
        let mut board = Board::new();
        for &column in &[0, 1, 3, 4] {
            board.drop_checked(column, Player::PlayerTwo).unwrap();
        }
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
    }

    // stacks columns from the bottom, 1 for player one and 2 for player two
    fn stack(columns: &[&[u8]]) -> Board {
        let mut board = Board::new();
        for (column, pieces) in columns.iter().enumerate() {
            for &piece in pieces.iter() {
                let player = if piece == 1 { Player::PlayerOne } else { Player::PlayerTwo };
                board.drop_checked(column, player).unwrap();
            }
        }
        board
    }

    #[test]
    fn mixed_column_does_not_win() {
        let board = stack(&[&[1, 1, 2, 1, 1]]);
        assert_eq!(winner(&board), None);
        assert_eq!(status(&board), Status::Playing);
    }

    #[test]
    fn mixed_diagonal_does_not_win() {
        // (0, 0), (1, 1) and (3, 3) belong to player one, (2, 2) to player two
        let board = stack(&[&[1], &[2, 1], &[1, 1, 2], &[2, 2, 1, 1]]);
        assert_eq!(board.get(2, 2), Cell::PlayerTwo);
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn gapped_diagonal_does_not_win() {
        // player one on (0, 0), (1, 1), (3, 3) and (4, 4) with (2, 2) still empty
        let board = stack(&[&[1], &[2, 1], &[2, 1], &[2, 1, 2, 1], &[1, 2, 2, 1, 1]]);
        assert_eq!(board.get(2, 2), Cell::Empty);
        assert_eq!(board.get(4, 4), Cell::PlayerOne);
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn placement_check_guards_cell_owner() {
        let mut board = Board::new();
        for &column in &[0, 1, 2, 3] {
            board.drop_checked(column, Player::PlayerOne).unwrap();
        }
        assert!(is_winning_placement(&board, 0, 3, Player::PlayerOne));
        assert!(!is_winning_placement(&board, 0, 3, Player::PlayerTwo));
        assert!(!is_winning_placement(&board, 1, 3, Player::PlayerOne));
        assert!(!is_winning_placement(&board, HEIGHT, 3, Player::PlayerOne));
    }

    #[test]
    fn placement_check_finds_middle_of_run() {
        let mut board = Board::new();
        for &column in &[1, 2, 4] {
            board.drop_checked(column, Player::PlayerTwo).unwrap();
        }
        let row = board.drop_checked(3, Player::PlayerTwo).unwrap();
        assert!(is_winning_placement(&board, row, 3, Player::PlayerTwo));
    }
}
