//! Connect 383.
//!
//! A gravity board game on a grid that may contain blocked cells:
//! - Players alternately drop a piece into a column; it lands on top of the
//!   highest occupied cell or on the floor
//! - A column is closed once its top cell is taken
//! - When no column is open, every run of three or more pieces in a line
//!   scores its length squared for its owner
//!
//! Player 1 (`X`) wins with a positive final score.

mod board;
mod game;
pub mod scoring;

pub use board::{Board, BoardError, Cell};
pub use game::{Connect383, Connect383Builder, DEFAULT_COLS, DEFAULT_ROWS};
