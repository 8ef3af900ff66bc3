//! Four-in-a-row detection.
//!
//! [`has_winning_line`] is the exhaustive scan: every cell is tried as the
//! start of a line in each of four directions. [`has_line_through`] only walks
//! the lines crossing one cell and is what the session runs after each drop.

use super::{Board, Cell, PlayerId, Position};

pub const LINE_LENGTH: usize = 4;

/// (row step, column step): horizontal, vertical, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Whether `player` holds four in a row anywhere on the board.
pub fn has_winning_line(board: &Board, player: PlayerId) -> bool {
    winning_line(board, player).is_some()
}

/// First winning line for `player`, in scan order (rows top to bottom, then
/// columns left to right, then direction).
pub fn winning_line(board: &Board, player: PlayerId) -> Option<[Position; LINE_LENGTH]> {
    for row in 0..board.height() {
        for column in 0..board.width() {
            for (d_row, d_col) in DIRECTIONS {
                if let Some(line) = line_from(board, row, column, d_row, d_col) {
                    if line
                        .iter()
                        .all(|p| board.get_checked(p.row, p.column) == Some(Cell::Taken(player)))
                    {
                        return Some(line);
                    }
                }
            }
        }
    }
    None
}

/// Whether the piece at (row, column) is part of a four-in-a-row.
/// Empty or out-of-bounds cells never are.
pub fn has_line_through(board: &Board, row: usize, column: usize) -> bool {
    let Some(Cell::Taken(player)) = board.get_checked(row, column) else {
        return false;
    };

    DIRECTIONS.iter().any(|&(d_row, d_col)| {
        let forward = run_length(board, row, column, d_row, d_col, player);
        let backward = run_length(board, row, column, -d_row, -d_col, player);
        1 + forward + backward >= LINE_LENGTH
    })
}

/// Four coordinates starting at (row, column) along a direction, or `None`
/// as soon as one leaves the board.
fn line_from(
    board: &Board,
    row: usize,
    column: usize,
    d_row: isize,
    d_col: isize,
) -> Option<[Position; LINE_LENGTH]> {
    let mut line = [Position::new(row, column); LINE_LENGTH];
    for (step, slot) in line.iter_mut().enumerate().skip(1) {
        *slot = offset(board, row, column, d_row * step as isize, d_col * step as isize)?;
    }
    Some(line)
}

/// Count of consecutive `player` pieces after (row, column), exclusive.
fn run_length(
    board: &Board,
    row: usize,
    column: usize,
    d_row: isize,
    d_col: isize,
    player: PlayerId,
) -> usize {
    (1..LINE_LENGTH)
        .take_while(|&step| {
            offset(board, row, column, d_row * step as isize, d_col * step as isize)
                .and_then(|p| board.get_checked(p.row, p.column))
                == Some(Cell::Taken(player))
        })
        .count()
}

fn offset(board: &Board, row: usize, column: usize, d_row: isize, d_col: isize) -> Option<Position> {
    let row = row.checked_add_signed(d_row)?;
    let column = column.checked_add_signed(d_col)?;
    (row < board.height() && column < board.width()).then_some(Position::new(row, column))
}
