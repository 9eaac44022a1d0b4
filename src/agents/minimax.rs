//! Search-driven agent.

use crate::core::GameState;
use crate::error::{AgentError, SearchResult};
use crate::eval::{AdjacencyHeuristic, Evaluator, ZeroHeuristic};
use crate::search::{MoveSelector, SearchConfig, SearchStats, Strategy};

use super::Agent;

/// Chooses moves with a `MoveSelector`.
#[derive(Clone, Debug)]
pub struct MinimaxAgent<E> {
    selector: MoveSelector<E>,
    last_stats: Option<SearchStats>,
}

impl MinimaxAgent<ZeroHeuristic> {
    /// Exact minimax over the whole game tree.
    pub fn minimax() -> Self {
        Self::new(MoveSelector::exact(ZeroHeuristic))
    }
}

impl MinimaxAgent<AdjacencyHeuristic> {
    /// Depth-limited minimax with the adjacency heuristic.
    pub fn heuristic(depth: i64) -> SearchResult<Self> {
        Ok(Self::new(Strategy::DepthLimited.selector(Some(depth), AdjacencyHeuristic)?))
    }

    /// Alpha-beta with the adjacency heuristic. Chooses the same moves as
    /// `heuristic` at the same depth.
    pub fn prune(depth: i64) -> SearchResult<Self> {
        Ok(Self::new(Strategy::AlphaBeta.selector(Some(depth), AdjacencyHeuristic)?))
    }
}

impl<E> MinimaxAgent<E> {
    pub fn new(selector: MoveSelector<E>) -> Self {
        Self {
            selector,
            last_stats: None,
        }
    }

    /// Agent for an arbitrary configuration and evaluator.
    pub fn with_config(config: SearchConfig, evaluator: E) -> SearchResult<Self> {
        Ok(Self::new(MoveSelector::new(config, evaluator)?))
    }

    pub fn selector(&self) -> &MoveSelector<E> {
        &self.selector
    }

    /// Statistics of the most recent move search.
    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

impl<G, E> Agent<G> for MinimaxAgent<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn name(&self) -> &str {
        self.selector.config().strategy.name()
    }

    fn get_move(&mut self, state: &G) -> Result<(G::Move, G), AgentError> {
        let decision = self.selector.select(state)?;
        self.last_stats = Some(decision.stats.clone());
        Ok(decision.into_pair())
    }
}
