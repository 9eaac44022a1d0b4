//! Connect 383 game state.

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, Successors};
use crate::eval::Grid;

use super::board::{Board, BoardError, Cell};
use super::scoring;

/// Default board height.
pub const DEFAULT_ROWS: usize = 5;

/// Default board width.
pub const DEFAULT_COLS: usize = 6;

/// A Connect 383 position.
///
/// Player 1 (`X`) moves first. Moves are column indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connect383 {
    board: Board,
}

impl Connect383 {
    /// Empty board of the given size.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
        })
    }

    /// Parse a position from rows of `.`, `X`, `O` and `#`, top row first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        Self::from_board(Board::from_rows(rows)?)
    }

    /// Wrap a board, checking that it can arise from alternating play.
    pub fn from_board(board: Board) -> Result<Self, BoardError> {
        let x_count = board.count(Player::One);
        let o_count = board.count(Player::Two);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(BoardError::PieceCounts { x_count, o_count });
        }
        Ok(Self { board })
    }

    /// Start building a board.
    pub fn builder() -> Connect383Builder {
        Connect383Builder::new()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns that still accept a piece, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.playable_columns().collect()
    }

    /// Drop the mover's piece into `col`. `None` if the column is closed.
    #[must_use]
    pub fn play(&self, col: usize) -> Option<Self> {
        let row = self.board.landing_row(col)?;
        let board = self
            .board
            .with_cell(row, col, Cell::Piece(self.next_player()))
            .ok()?;
        Some(Self { board })
    }

    /// Run points for each player, indexed by `Player::index()`.
    #[must_use]
    pub fn points(&self) -> [i64; 2] {
        scoring::points(&self.board)
    }
}

impl GameState for Connect383 {
    type Move = usize;
    type Error = Infallible;

    fn successors(&self) -> Result<Successors<Self>, Self::Error> {
        Ok(self
            .board
            .playable_columns()
            .filter_map(|col| self.play(col).map(|next| (col, next)))
            .collect())
    }

    fn is_full(&self) -> bool {
        self.board.playable_columns().next().is_none()
    }

    fn score(&self) -> Result<i64, Self::Error> {
        Ok(scoring::score(&self.board))
    }

    fn next_player(&self) -> Player {
        if self.board.count(Player::One) == self.board.count(Player::Two) {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl Grid for Connect383 {
    fn rows(&self) -> usize {
        self.board.rows()
    }

    fn cols(&self) -> usize {
        self.board.cols()
    }

    fn owner(&self, row: usize, col: usize) -> Option<Player> {
        self.board.get(row, col).owner()
    }
}

impl fmt::Display for Connect383 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

/// Builder for an empty Connect 383 board with optional blocked cells.
#[derive(Clone, Debug)]
pub struct Connect383Builder {
    rows: usize,
    cols: usize,
    blocked: Vec<(usize, usize)>,
}

impl Default for Connect383Builder {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            blocked: Vec::new(),
        }
    }
}

impl Connect383Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Block the cell at `(row, col)`.
    pub fn block(mut self, row: usize, col: usize) -> Self {
        self.blocked.push((row, col));
        self
    }

    pub fn build(self) -> Result<Connect383, BoardError> {
        let mut board = Board::new(self.rows, self.cols)?;
        for (row, col) in self.blocked {
            board = board.with_cell(row, col, Cell::Blocked)?;
        }
        Ok(Connect383 { board })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let game = Connect383::builder().build().unwrap();
        assert_eq!(game.rows(), DEFAULT_ROWS);
        assert_eq!(game.cols(), DEFAULT_COLS);
        assert_eq!(game.next_player(), Player::One);
        assert_eq!(game.legal_moves(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_builder_blocks() {
        let game = Connect383::builder().rows(2).cols(3).block(0, 1).block(1, 2).build().unwrap();
        assert_eq!(game.to_string(), ".#.\n..#");
        assert_eq!(game.legal_moves(), vec![0, 2]);

        let err = Connect383::builder().rows(2).cols(2).block(5, 0).build().unwrap_err();
        assert!(matches!(err, BoardError::OutOfBounds { row: 5, .. }));
    }

    #[test]
    fn test_piece_counts_checked() {
        assert!(Connect383::from_rows(&["XX."]).is_err());
        assert!(Connect383::from_rows(&["O.."]).is_err());
        assert!(Connect383::from_rows(&["X.."]).is_ok());
    }

    #[test]
    fn test_pieces_stack_and_alternate() {
        let game = Connect383::empty(3, 2).unwrap();
        let game = game.play(0).unwrap();
        let game = game.play(0).unwrap();
        assert_eq!(game.to_string(), "..\nO.\nX.");
        assert_eq!(game.next_player(), Player::One);
    }

    #[test]
    fn test_successors_ascending() {
        let game = Connect383::from_rows(&["#..", "X.O"]).unwrap();
        let moves: Vec<usize> = game.successors().unwrap().into_iter().map(|(mv, _)| mv).collect();
        assert_eq!(moves, vec![1, 2]);

        let (_, after) = &game.successors().unwrap()[1];
        assert_eq!(after.to_string(), "#.X\nX.O");
    }

    #[test]
    fn test_full_board() {
        let game = Connect383::from_rows(&["XOX", "OXO"]).unwrap();
        assert!(game.is_full());
        assert!(game.successors().unwrap().is_empty());
        assert_eq!(game.score().unwrap(), 0);
        assert!(game.play(0).is_none());
    }

    #[test]
    fn test_score_uses_runs() {
        let game = Connect383::from_rows(&["XXXOO."]).unwrap();
        assert_eq!(game.score().unwrap(), 9);
        assert_eq!(game.points(), [9, 0]);
    }
}
