//! Run scoring.
//!
//! Every maximal run of one player's pieces along a row, column or diagonal
//! that is at least `MIN_RUN` long earns that player `length²` points.

use crate::core::Player;

use super::board::{Board, Cell};

/// Shortest run that scores.
pub const MIN_RUN: usize = 3;

/// Run directions as `(row, col)` steps: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Points for each player, indexed by `Player::index()`.
#[must_use]
pub fn points(board: &Board) -> [i64; 2] {
    let mut points = [0i64; 2];

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Some(owner) = board.get(row, col).owner() else {
                continue;
            };
            for (dr, dc) in DIRECTIONS {
                // Only count from the first cell of a run.
                if step(board, row, col, -dr, -dc) == Some(Cell::Piece(owner)) {
                    continue;
                }
                let len = run_length(board, row, col, dr, dc, owner);
                if len >= MIN_RUN {
                    points[owner.index()] += (len * len) as i64;
                }
            }
        }
    }

    points
}

/// Final score: player 1 points minus player 2 points.
#[must_use]
pub fn score(board: &Board) -> i64 {
    let [p1, p2] = points(board);
    p1 - p2
}

fn run_length(board: &Board, row: usize, col: usize, dr: isize, dc: isize, owner: Player) -> usize {
    let mut len = 1;
    let (mut r, mut c) = (row, col);
    while let Some((nr, nc)) = offset(board, r, c, dr, dc) {
        if board.get(nr, nc) != Cell::Piece(owner) {
            break;
        }
        len += 1;
        r = nr;
        c = nc;
    }
    len
}

fn step(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> Option<Cell> {
    offset(board, row, col, dr, dc).map(|(r, c)| board.get(r, c))
}

fn offset(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < board.rows() && c < board.cols()).then_some((r, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_short_runs_score_nothing() {
        assert_eq!(points(&board(&["XX.OO"])), [0, 0]);
    }

    #[test]
    fn test_row_runs() {
        assert_eq!(points(&board(&["XXX.OOOO"])), [9, 16]);
        assert_eq!(score(&board(&["XXX.OOOO"])), -7);
    }

    #[test]
    fn test_run_is_scored_once_at_full_length() {
        assert_eq!(points(&board(&["XXXXX"])), [25, 0]);
    }

    #[test]
    fn test_blocked_cell_breaks_run() {
        assert_eq!(points(&board(&["XX#XX"])), [0, 0]);
    }

    #[test]
    fn test_column_and_diagonals() {
        let column = board(&["X..", "X..", "X.."]);
        assert_eq!(points(&column), [9, 0]);

        let diagonal = board(&["O..", ".O.", "..O"]);
        assert_eq!(points(&diagonal), [0, 9]);

        let anti = board(&["..X", ".X.", "X.."]);
        assert_eq!(points(&anti), [9, 0]);
    }

    #[test]
    fn test_crossing_runs_both_count() {
        let cross = board(&["XXX", ".X.", ".X."]);
        assert_eq!(points(&cross), [18, 0]);
    }
}
