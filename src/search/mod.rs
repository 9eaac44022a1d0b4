//! Minimax search for rust-minimax.
//!
//! ## Overview
//!
//! Three strategies share one traversal and differ only in how far they
//! expand and whether they prune:
//!
//! - **Exact**: full-depth minimax, the correctness reference
//! - **Depth-limited**: minimax that evaluates states at a horizon
//! - **Alpha-beta**: depth-limited minimax that skips refuted siblings,
//!   always returning the depth-limited value
//!
//! Player 1 maximizes and player 2 minimizes. Successors are visited in the
//! order the game returns them.
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::eval::AdjacencyHeuristic;
//! use rust_minimax::games::connect383::Connect383;
//! use rust_minimax::search::{select_move, SearchConfig};
//!
//! let game = Connect383::from_rows(&["....", "X.O."]).unwrap();
//! let decision = select_move(&game, &SearchConfig::alpha_beta(2), AdjacencyHeuristic).unwrap();
//! println!("play column {} (utility {})", decision.mv, decision.utility);
//! ```

pub mod cancel;
pub mod config;
pub mod searcher;
pub mod selector;
pub mod stats;

pub use cancel::CancelFlag;
pub use config::{Depth, SearchConfig, Strategy};
pub use searcher::{Searcher, Window};
pub use selector::{select_move, Decision, MoveSelector};
pub use stats::SearchStats;

use crate::core::GameState;
use crate::error::SearchResult;
use crate::eval::{Evaluator, ZeroHeuristic};

/// Minimax value of a state. Player 1 maximizes.
pub type Utility = f64;

/// Exact minimax value of a non-terminal `state`.
pub fn minimax<G: GameState>(state: &G) -> SearchResult<Utility> {
    Strategy::Exact.search(state, Depth::Unbounded, &ZeroHeuristic)
}

/// Minimax value of `state`, evaluating states `depth` plies below it.
pub fn minimax_depth<G, E>(state: &G, depth: Depth, evaluator: &E) -> SearchResult<Utility>
where
    G: GameState,
    E: Evaluator<G>,
{
    Strategy::DepthLimited.search(state, depth, evaluator)
}

/// Same value as [`minimax_depth`], with alpha-beta pruning.
pub fn minimax_prune<G, E>(state: &G, depth: Depth, evaluator: &E) -> SearchResult<Utility>
where
    G: GameState,
    E: Evaluator<G>,
{
    Strategy::AlphaBeta.search(state, depth, evaluator)
}
