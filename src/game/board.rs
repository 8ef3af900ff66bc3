use std::fmt;

use super::PlayerId;
use crate::error::GameError;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;

/// Smallest side length on which a four-in-a-row fits in every direction.
pub const MIN_SIZE: usize = 4;
pub const MAX_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(PlayerId),
}

impl Cell {
    pub fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A (row, column) coordinate. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

/// Row-major grid of cells. Columns fill bottom-up, so no empty cell ever
/// sits below a taken one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 7x6 board
    pub fn new() -> Self {
        Board {
            width: WIDTH,
            height: HEIGHT,
            cells: vec![Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Create an empty board with custom dimensions, each in
    /// `MIN_SIZE..=MAX_SIZE`.
    pub fn with_size(width: usize, height: usize) -> Result<Self, GameError> {
        let valid = MIN_SIZE..=MAX_SIZE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(GameError::InvalidArgument(format!(
                "board dimensions {width}x{height} not supported \
                 (each side must be in {MIN_SIZE}..={MAX_SIZE})"
            )));
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        self.get_checked(row, column)
            .ok_or_else(|| GameError::cell_out_of_range(row, column, self.width, self.height))
    }

    /// Like [`cell_at`](Self::cell_at) but `None` for out-of-bounds
    /// coordinates.
    pub fn get_checked(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.height && column < self.width {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// Lowest empty row in `column`, or `None` if the column is full.
    pub fn drop_target(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.check_column(column)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_empty()))
    }

    /// Mark a cell as taken by `player`. The cell must come from
    /// [`drop_target`](Self::drop_target): an occupied cell, or one with an
    /// empty cell below it, is a caller bug.
    pub fn place(&mut self, row: usize, column: usize, player: PlayerId) -> Result<(), GameError> {
        let cell = self.cell_at(row, column)?;
        if !cell.is_empty() {
            return Err(GameError::cell_occupied(row, column));
        }
        if self.drop_target(column)? != Some(row) {
            return Err(GameError::cell_unsupported(row, column));
        }
        self.cells[row * self.width + column] = Cell::Taken(player);
        Ok(())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> Result<bool, GameError> {
        self.check_column(column)?;
        Ok(!self.cells[column].is_empty())
    }

    /// Columns that still accept a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&column| self.cells[column].is_empty())
            .collect()
    }

    /// Whole board is full. Only the top row is inspected since pieces
    /// never leave holes underneath.
    pub fn is_full(&self) -> bool {
        self.cells[..self.width].iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.width {
            return Err(GameError::column_out_of_range(column, self.width));
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                let symbol = match cell.occupant() {
                    None => '.',
                    Some(PlayerId::One) => '1',
                    Some(PlayerId::Two) => '2',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
