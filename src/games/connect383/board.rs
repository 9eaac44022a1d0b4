//! Connect 383 board storage and text form.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Player;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Piece(Player),
    Blocked,
}

impl Cell {
    /// Character used in the text form.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(Player::One) => 'X',
            Cell::Piece(Player::Two) => 'O',
            Cell::Blocked => '#',
        }
    }

    /// Parse a text-form character.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Piece(Player::One)),
            'O' => Some(Cell::Piece(Player::Two)),
            '#' => Some(Cell::Blocked),
            _ => None,
        }
    }

    #[must_use]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Piece(player) => Some(player),
            Cell::Empty | Cell::Blocked => None,
        }
    }
}

/// Errors building or parsing a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board needs at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("invalid cell '{symbol}' at row {row}, column {col}")]
    InvalidCell { symbol: char, row: usize, col: usize },

    #[error("cell ({row}, {col}) is outside a {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("impossible piece counts: {x_count} X and {o_count} O")]
    PieceCounts { x_count: usize, o_count: usize },
}

/// Row-major grid of cells. Row 0 is the top.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Empty board of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::Empty { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: std::iter::repeat(Cell::Empty).take(rows * cols).collect(),
        })
    }

    /// Parse rows of `.`, `X`, `O` and `#`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut board = Self::new(rows.len(), cols)?;

        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let got = line.chars().count();
            if got != cols {
                return Err(BoardError::Ragged {
                    row: r,
                    got,
                    expected: cols,
                });
            }
            for (c, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(BoardError::InvalidCell {
                    symbol,
                    row: r,
                    col: c,
                })?;
                board.cells.set(r * cols + c, cell);
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`. Panics when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Cell at `(row, col)`, `None` when out of bounds.
    #[must_use]
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.get(row, col))
    }

    /// Copy of this board with `(row, col)` set to `cell`.
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Result<Self, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut next = self.clone();
        next.cells.set(row * self.cols + col, cell);
        Ok(next)
    }

    /// Row a piece dropped into `col` comes to rest on, or `None` if the
    /// column is closed or out of range.
    #[must_use]
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols || self.get(0, col) != Cell::Empty {
            return None;
        }
        let mut row = 0;
        while row + 1 < self.rows && self.get(row + 1, col) == Cell::Empty {
            row += 1;
        }
        Some(row)
    }

    /// Columns that still accept a piece, ascending.
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(|&col| self.get(0, col) == Cell::Empty)
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Piece(player))
            .count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                write!(f, "{}", self.get(row, col).symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board = Board::from_rows(&["..#", "XO."]).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.get(0, 2), Cell::Blocked);
        assert_eq!(board.get(1, 1), Cell::Piece(Player::Two));
        assert_eq!(board.to_string(), "..#\nXO.");
    }

    #[test]
    fn test_parse_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Board::from_rows(&empty),
            Err(BoardError::Empty { rows: 0, cols: 0 })
        );
        assert_eq!(
            Board::from_rows(&["...", ".."]),
            Err(BoardError::Ragged {
                row: 1,
                got: 2,
                expected: 3
            })
        );
        assert_eq!(
            Board::from_rows(&[".x."]),
            Err(BoardError::InvalidCell {
                symbol: 'x',
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn test_landing_row() {
        let board = Board::from_rows(&["...#", "..X.", ".#..", "O..."]).unwrap();
        assert_eq!(board.landing_row(0), Some(2));
        assert_eq!(board.landing_row(1), Some(1));
        assert_eq!(board.landing_row(2), Some(0));
        assert_eq!(board.landing_row(3), None);
        assert_eq!(board.landing_row(4), None);
        assert_eq!(board.playable_columns().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_with_cell_leaves_original() {
        let board = Board::new(2, 2).unwrap();
        let next = board.with_cell(1, 0, Cell::Piece(Player::One)).unwrap();
        assert_eq!(board.count(Player::One), 0);
        assert_eq!(next.count(Player::One), 1);
        assert!(matches!(
            board.with_cell(2, 0, Cell::Blocked),
            Err(BoardError::OutOfBounds { .. })
        ));
    }
}
