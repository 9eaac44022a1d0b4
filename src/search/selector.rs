//! Move selection at the root of the game tree.

use std::time::Instant;

use log::debug;

use crate::core::GameState;
use crate::error::{SearchError, SearchResult};
use crate::eval::Evaluator;

use super::cancel::CancelFlag;
use super::config::{Depth, SearchConfig, Strategy};
use super::searcher::{Searcher, Window};
use super::stats::SearchStats;
use super::Utility;

/// The move chosen at a root, with the state it leads to.
#[derive(Clone, Debug)]
pub struct Decision<G: GameState> {
    /// The chosen move.
    pub mv: G::Move,

    /// The state reached by playing `mv`.
    pub state: G,

    /// Minimax value of `state` under the configured strategy.
    pub utility: Utility,

    /// Statistics for the whole root search.
    pub stats: SearchStats,
}

impl<G: GameState> Decision<G> {
    /// Split into the `(move, state)` pair.
    pub fn into_pair(self) -> (G::Move, G) {
        (self.mv, self.state)
    }
}

/// Picks the extremal successor of a root with a configured strategy.
///
/// The configuration is validated once, up front, so that an invalid depth
/// never reaches the traversal.
#[derive(Clone, Debug)]
pub struct MoveSelector<E> {
    config: SearchConfig,
    depth: Depth,
    evaluator: E,
    cancel: Option<CancelFlag>,
}

impl<E> MoveSelector<E> {
    /// Create a selector, failing on an invalid configuration.
    pub fn new(config: SearchConfig, evaluator: E) -> SearchResult<Self> {
        let depth = config.validate()?;
        Ok(Self {
            config,
            depth,
            evaluator,
            cancel: None,
        })
    }

    /// Exact-search selector. Cannot fail validation.
    pub fn exact(evaluator: E) -> Self {
        Self {
            config: SearchConfig::exact(),
            depth: Depth::Unbounded,
            evaluator,
            cancel: None,
        }
    }

    /// Stop searches with `SearchError::Cancelled` once `flag` is raised.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the validated depth bound.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Get the evaluator reference.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Choose the best successor of `state` for the player to move.
    ///
    /// Every successor is searched with the configured depth, in oracle
    /// order. A successor replaces the incumbent only when strictly better,
    /// so ties keep the first-seen move.
    pub fn select<G>(&self, state: &G) -> SearchResult<Decision<G>>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        if state.is_full() {
            return Err(SearchError::TerminalState);
        }

        let start = Instant::now();
        let strategy = self.config.strategy;
        let mut searcher = Searcher::new(strategy, &self.evaluator);
        if let Some(flag) = &self.cancel {
            searcher = searcher.with_cancel(flag.clone());
        }

        let children = state.successors().map_err(SearchError::oracle)?;
        if children.is_empty() {
            return Err(SearchError::NoSuccessors);
        }
        searcher.note_root(children.len());

        let nextp = state.next_player();
        let mut best_util = nextp.worst_utility();
        let mut best = None;
        let mut window = Window::FULL;

        for (mv, child) in children {
            let util = searcher.search_window(&child, self.depth, window, 1)?;
            if nextp.prefers(util, best_util) {
                best_util = util;
                best = Some((mv, child));
            }
            if strategy.prunes() {
                window.narrow(nextp, best_util);
            }
        }

        let (mv, child) = best.ok_or(SearchError::NoSuccessors)?;
        let mut stats = searcher.stats().clone();
        stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            "{} search (depth {}) chose {:?} for {} with utility {}: {}",
            strategy, self.depth, mv, nextp, best_util, stats
        );

        Ok(Decision {
            mv,
            state: child,
            utility: best_util,
            stats,
        })
    }
}

/// Choose the best successor of `state` under `config`.
pub fn select_move<G, E>(state: &G, config: &SearchConfig, evaluator: E) -> SearchResult<Decision<G>>
where
    G: GameState,
    E: Evaluator<G>,
{
    MoveSelector::new(config.clone(), evaluator)?.select(state)
}

impl Strategy {
    /// Selector running this strategy at `depth`.
    pub fn selector<E>(self, depth: Option<i64>, evaluator: E) -> SearchResult<MoveSelector<E>> {
        MoveSelector::new(
            SearchConfig {
                strategy: self,
                depth,
            },
            evaluator,
        )
    }
}
