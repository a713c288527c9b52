use std::fmt;

use crate::error::GameError;

use super::player::Player;
use super::snapshot::BoardSnapshot;

/// Smallest row or column count that can hold a line.
pub const MIN_DIMENSION: usize = 4;
/// Number of aligned discs that wins the game.
pub const LINE_LENGTH: usize = 4;

/// Scan orientations as (row step, column step), in evaluation order:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owning player, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("Empty"),
            Cell::Occupied(player) => write!(f, "{player}"),
        }
    }
}

/// A cell coordinate. Row 0 is the top, column 0 the left edge.
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

/// Row-major grid whose dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
            return Err(GameError::InvalidDimensions { rows, columns });
        }
        let len = rows
            .checked_mul(columns)
            .ok_or(GameError::InvalidDimensions { rows, columns })?;

        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.columns + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.columns + col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_disc(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        if col >= self.columns {
            return Err(GameError::ColumnOutOfRange {
                column: col as isize,
                columns: self.columns,
            });
        }

        if self.is_column_full(col) {
            return Err(GameError::ColumnFull { column: col });
        }

        // Find the lowest empty row in this column
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(GameError::ColumnFull { column: col })?;
        self.set(row, col, player.to_cell());
        Ok(row)
    }

    /// Check if the board is completely full. Looking at the top row is
    /// enough because columns fill from the bottom without gaps.
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Scan the whole board for four of `player`'s discs in a row.
    ///
    /// Windows are tried horizontally, vertically, then along both
    /// diagonals, each orientation row by row from the top-left. The first
    /// qualifying window is returned.
    pub fn find_line(&self, player: Player) -> Option<[Position; LINE_LENGTH]> {
        let target = player.to_cell();

        for (dr, dc) in DIRECTIONS {
            for row in 0..self.rows {
                for col in 0..self.columns {
                    let Some(window) = self.window(row, col, dr, dc) else {
                        continue;
                    };
                    if window.iter().all(|p| self.get(p.row, p.column) == target) {
                        return Some(window);
                    }
                }
            }
        }

        None
    }

    /// The four positions starting at (row, col) in direction (dr, dc), or
    /// `None` if the window leaves the board.
    fn window(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<[Position; LINE_LENGTH]> {
        let span = LINE_LENGTH as isize - 1;
        let end_row = row as isize + dr * span;
        let end_col = col as isize + dc * span;
        let rows = self.rows as isize;
        let columns = self.columns as isize;
        if !(0..rows).contains(&end_row) || !(0..columns).contains(&end_col) {
            return None;
        }

        let mut window = [Position::new(row, col); LINE_LENGTH];
        for (i, pos) in window.iter_mut().enumerate() {
            let step = i as isize;
            *pos = Position::new(
                (row as isize + dr * step) as usize,
                (col as isize + dc * step) as usize,
            );
        }
        Some(window)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Owned copy of the grid
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.rows, self.columns, self.cells.clone())
    }
}
