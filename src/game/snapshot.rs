use std::fmt;

use super::board::Cell;

/// An owned copy of the board grid, handed to renderers.
///
/// A snapshot never aliases live game state: changing the game afterwards
/// leaves it untouched, and nothing done to it reaches the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl BoardSnapshot {
    pub(crate) fn new(rows: usize, columns: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        BoardSnapshot {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell at (row, col); row 0 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.columns + col]
    }

    /// One row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Consume the snapshot into a nested, freely mutable grid.
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.columns)
            .map(|row| row.to_vec())
            .collect()
    }
}

/// One line per row, cells separated by `", "`.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn sample() -> BoardSnapshot {
        let mut cells = vec![Cell::Empty; 16];
        cells[12] = Cell::Occupied(Player::Red);
        cells[13] = Cell::Occupied(Player::Yellow);
        BoardSnapshot::new(4, 4, cells)
    }

    #[test]
    fn test_row_access() {
        let snapshot = sample();
        assert_eq!(snapshot.rows(), 4);
        assert_eq!(snapshot.columns(), 4);
        assert_eq!(
            snapshot.row(3),
            &[
                Cell::Occupied(Player::Red),
                Cell::Occupied(Player::Yellow),
                Cell::Empty,
                Cell::Empty,
            ]
        );
        assert_eq!(snapshot.get(3, 1), Cell::Occupied(Player::Yellow));
        assert_eq!(snapshot.iter_rows().count(), 4);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Empty, Empty, Empty, Empty");
        assert_eq!(lines[3], "RED, YELLOW, Empty, Empty");
    }

    #[test]
    fn test_into_rows() {
        let rows = sample().into_rows();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 4));
        assert_eq!(rows[3][0], Cell::Occupied(Player::Red));
    }
}
