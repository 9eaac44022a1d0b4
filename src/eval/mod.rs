//! Evaluation heuristics for depth-limited search.

pub mod heuristic;

pub use heuristic::{AdjacencyHeuristic, Evaluator, Grid, NEIGHBOR_OFFSETS, ZeroHeuristic};
