use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use log::debug;

use std::io::{stdout, Write};

use connect4_minimax::{Board, Cell, HEIGHT, WIDTH};

/// Draws the board with coloured tiles, falling back to plain text when the
/// terminal cannot report the cursor position (e.g. output is piped)
pub fn show(board: &Board) {
    if let Err(err) = draw(board) {
        debug!("coloured board unavailable: {}", err);
        println!("{}", board);
    }
}

fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    // the blank lines printed above hold the rows, the bottom row directly above the cursor
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let (pos_x, pos_y) = (origin_x + column as u16, origin_y.saturating_sub(1 + row as u16));

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.get(row, column) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout.queue(MoveTo(origin_x, origin_y))?;
    stdout.flush()?;
    Ok(())
}
