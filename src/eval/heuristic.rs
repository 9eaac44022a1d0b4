//! Static evaluation of non-terminal states.
//!
//! Evaluators are consulted at the depth horizon of a bounded search. They
//! must not expand successors: cost is bounded by the board size, never by
//! the size of the game tree.

use crate::core::Player;

/// Heuristic estimate of a non-terminal state, from player 1's point of view.
///
/// Search code only calls `evaluate` on states where `is_full()` is false.
pub trait Evaluator<G> {
    /// Estimate the utility of `state`.
    fn evaluate(&self, state: &G) -> i64;
}

impl<G, F> Evaluator<G> for F
where
    F: Fn(&G) -> i64,
{
    fn evaluate(&self, state: &G) -> i64 {
        self(state)
    }
}

/// Zero evaluator (baseline for exact search and testing).
///
/// Exact search never reaches a horizon, so it never consults this.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<G> Evaluator<G> for ZeroHeuristic {
    fn evaluate(&self, _state: &G) -> i64 {
        0
    }
}

/// Read-only view of a rectangular board.
pub trait Grid {
    /// Number of rows. Row 0 is the top.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Owner of the piece at `(row, col)`, `None` for empty or blocked cells.
    fn owner(&self, row: usize, col: usize) -> Option<Player>;
}

/// The eight neighbor offsets as `(row, col)` deltas.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),  // left
    (-1, -1), // upper-left
    (-1, 0),  // up
    (-1, 1),  // upper-right
    (0, 1),   // right
    (1, 1),   // lower-right
    (1, 0),   // down
    (1, -1),  // lower-left
];

/// Material-adjacency heuristic.
///
/// Every occupied cell earns its owner one point per same-owner neighbor in
/// each of the eight directions. The result is `p1_points - p2_points`.
/// Neighbors outside the board never match.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdjacencyHeuristic;

impl AdjacencyHeuristic {
    /// Points earned by each player, indexed by `Player::index()`.
    #[must_use]
    pub fn points<G: Grid>(&self, grid: &G) -> [i64; 2] {
        let mut points = [0i64; 2];

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let Some(owner) = grid.owner(row, col) else {
                    continue;
                };
                let matches = NEIGHBOR_OFFSETS
                    .iter()
                    .filter(|&&(dr, dc)| neighbor(grid, row, col, dr, dc) == Some(owner))
                    .count();
                points[owner.index()] += matches as i64;
            }
        }

        points
    }
}

impl<G: Grid> Evaluator<G> for AdjacencyHeuristic {
    fn evaluate(&self, state: &G) -> i64 {
        let [p1, p2] = self.points(state);
        p1 - p2
    }
}

fn neighbor<G: Grid>(grid: &G, row: usize, col: usize, dr: isize, dc: isize) -> Option<Player> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    if r >= grid.rows() || c >= grid.cols() {
        return None;
    }
    grid.owner(r, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Row-major grid of +1 / -1 / 0 cells.
    struct TestGrid {
        cells: Vec<Vec<i8>>,
    }

    impl TestGrid {
        fn new(cells: &[&[i8]]) -> Self {
            Self {
                cells: cells.iter().map(|r| r.to_vec()).collect(),
            }
        }
    }

    impl Grid for TestGrid {
        fn rows(&self) -> usize {
            self.cells.len()
        }

        fn cols(&self) -> usize {
            self.cells.first().map_or(0, Vec::len)
        }

        fn owner(&self, row: usize, col: usize) -> Option<Player> {
            Player::from_sign(self.cells[row][col])
        }
    }

    #[test]
    fn test_offsets_are_distinct() {
        for (i, a) in NEIGHBOR_OFFSETS.iter().enumerate() {
            assert_ne!(*a, (0, 0));
            for b in &NEIGHBOR_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_empty_board_is_zero() {
        let grid = TestGrid::new(&[&[0, 0], &[0, 0]]);
        assert_eq!(AdjacencyHeuristic.evaluate(&grid), 0);
    }

    #[test]
    fn test_horizontal_pair_counts_from_both_ends() {
        let grid = TestGrid::new(&[&[0, 0, 0], &[1, 1, 0]]);
        assert_eq!(AdjacencyHeuristic.points(&grid), [2, 0]);
        assert_eq!(AdjacencyHeuristic.evaluate(&grid), 2);
    }

    #[test]
    fn test_each_direction_is_checked() {
        // Center piece surrounded by eight friendly pieces: center earns 8,
        // every corner earns 3, every edge-middle earns 5.
        let grid = TestGrid::new(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        assert_eq!(AdjacencyHeuristic.points(&grid), [8 + 4 * 3 + 4 * 5, 0]);
    }

    #[test]
    fn test_diagonals_count() {
        let grid = TestGrid::new(&[&[-1, 0], &[0, -1]]);
        assert_eq!(AdjacencyHeuristic.evaluate(&grid), -2);

        let anti = TestGrid::new(&[&[0, 1], &[1, 0]]);
        assert_eq!(AdjacencyHeuristic.evaluate(&anti), 2);
    }

    #[test]
    fn test_opponent_neighbors_do_not_count() {
        let grid = TestGrid::new(&[&[1, -1, 1]]);
        assert_eq!(AdjacencyHeuristic.points(&grid), [0, 0]);
    }

    #[test]
    fn test_closure_evaluator() {
        let grid = TestGrid::new(&[&[1]]);
        let constant = |_: &TestGrid| 7i64;
        assert_eq!(constant.evaluate(&grid), 7);
    }
}
