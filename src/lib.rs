//! # rust-minimax
//!
//! Move selection for two-player, zero-sum, perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Search only talks to a `GameState` oracle
//!    (successors, terminal test, score, player to move).
//!
//! 2. **One Traversal, Three Strategies**: Exact minimax, depth-limited
//!    minimax and alpha-beta share one iterative traversal, so deep games
//!    never exhaust the call stack.
//!
//! 3. **No Hidden State**: Work counters live in `SearchStats` per search,
//!    never in globals.
//!
//! ## Conventions
//!
//! - Player 1 maximizes, player 2 minimizes
//! - Scores and heuristic estimates are `i64` from player 1's view
//! - Successors are searched in the order the game returns them, and ties
//!   keep the first-seen move
//!
//! ## Modules
//!
//! - `core`: players, the `GameState` trait, RNG
//! - `eval`: evaluators for depth-limited search
//! - `search`: strategies, configuration, move selection, statistics
//! - `games`: Connect 383 and explicit game trees
//! - `agents`: random, human and search-driven agents
//! - `play`: the two-agent game loop
//! - `error`: error types

pub mod agents;
pub mod core;
pub mod error;
pub mod eval;
pub mod games;
pub mod play;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, GameState, Player, Successors};

pub use crate::error::{AgentError, OracleError, SearchError, SearchResult};

pub use crate::eval::{AdjacencyHeuristic, Evaluator, Grid, ZeroHeuristic};

pub use crate::search::{
    minimax, minimax_depth, minimax_prune, select_move, CancelFlag, Decision, Depth, MoveSelector,
    SearchConfig, SearchStats, Searcher, Strategy, Utility,
};

pub use crate::agents::{Agent, HumanAgent, MinimaxAgent, RandomAgent};

pub use crate::play::{play_game, GameRecord, Outcome};
