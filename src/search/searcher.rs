//! Minimax traversal shared by the three strategies.
//!
//! The traversal runs on an explicit frame stack instead of native
//! recursion, so unbounded searches over tall trees cannot overflow the
//! thread stack. Each frame owns its children iterator, running extremum and
//! `(alpha, beta)` window; nothing is shared between sibling branches.

use std::time::Instant;

use log::trace;

use crate::core::{GameState, Player};
use crate::error::{SearchError, SearchResult};
use crate::eval::Evaluator;

use super::cancel::CancelFlag;
use super::config::{Depth, Strategy};
use super::stats::SearchStats;
use super::Utility;

/// Alpha-beta bounds inherited from the ancestors of a node.
///
/// `alpha` is the value the maximizer can already guarantee, `beta` the value
/// the minimizer can already guarantee.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub alpha: Utility,
    pub beta: Utility,
}

impl Window {
    /// The window at the top of a search.
    pub const FULL: Window = Window {
        alpha: Utility::NEG_INFINITY,
        beta: Utility::INFINITY,
    };

    /// Tighten the bound owned by `player` after it settled on `best`.
    #[inline]
    pub fn narrow(&mut self, player: Player, best: Utility) {
        match player {
            Player::One => self.alpha = self.alpha.max(best),
            Player::Two => self.beta = self.beta.min(best),
        }
    }

    /// Can an ancestor already ignore a node where `player` reached `best`?
    #[inline]
    #[must_use]
    pub fn cuts_off(&self, player: Player, best: Utility) -> bool {
        match player {
            Player::One => best >= self.beta,
            Player::Two => best <= self.alpha,
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

impl Strategy {
    /// Minimax value of a non-terminal `state`.
    ///
    /// `depth` is ignored by `Strategy::Exact`. Fails with
    /// `SearchError::TerminalState` when `state` is already over.
    pub fn search<G, E>(self, state: &G, depth: Depth, evaluator: &E) -> SearchResult<Utility>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        Searcher::new(self, evaluator).search(state, depth)
    }
}

/// A search in progress or finished, with its statistics.
pub struct Searcher<'e, E> {
    strategy: Strategy,
    evaluator: &'e E,
    cancel: Option<CancelFlag>,
    stats: SearchStats,
}

enum Node<G: GameState> {
    Leaf(Utility),
    Interior(Frame<G>),
}

struct Frame<G: GameState> {
    children: smallvec::IntoIter<[(G::Move, G); 8]>,
    player: Player,
    depth: Depth,
    ply: u32,
    best: Utility,
    window: Window,
}

impl<G: GameState> Frame<G> {
    /// Fold a child's value into the running extremum.
    ///
    /// Returns true when the remaining children can be skipped.
    fn fold(&mut self, value: Utility, prune: bool) -> bool {
        if self.player.prefers(value, self.best) {
            self.best = value;
        }
        if !prune {
            return false;
        }
        if self.window.cuts_off(self.player, self.best) {
            return true;
        }
        self.window.narrow(self.player, self.best);
        false
    }
}

impl<'e, E> Searcher<'e, E> {
    /// Create a new searcher for `strategy`.
    pub fn new(strategy: Strategy, evaluator: &'e E) -> Self {
        Self {
            strategy,
            evaluator,
            cancel: None,
            stats: SearchStats::default(),
        }
    }

    /// Stop with `SearchError::Cancelled` once `flag` is raised.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The strategy this searcher runs.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Statistics accumulated over every search run so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Forget accumulated statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Minimax value of a non-terminal `state`.
    pub fn search<G>(&mut self, state: &G, depth: Depth) -> SearchResult<Utility>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        if state.is_full() {
            return Err(SearchError::TerminalState);
        }
        self.search_window(state, depth, Window::FULL, 0)
    }

    /// Value of `state` (terminal or not) within `window`, starting at `ply`.
    pub(crate) fn search_window<G>(
        &mut self,
        state: &G,
        depth: Depth,
        window: Window,
        ply: u32,
    ) -> SearchResult<Utility>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        let depth = match self.strategy {
            Strategy::Exact => Depth::Unbounded,
            Strategy::DepthLimited | Strategy::AlphaBeta => depth,
        };

        let start = Instant::now();
        let result = self.run(state, depth, window, ply);
        self.stats.time_us += start.elapsed().as_micros() as u64;
        result
    }

    /// Record the expansion of a root handled by the move selector.
    pub(crate) fn note_root(&mut self, children: usize) {
        self.stats.nodes_visited += 1;
        self.stats.nodes_expanded += 1;
        self.stats.states_generated += children as u64;
    }

    fn run<G>(&mut self, root: &G, depth: Depth, window: Window, ply: u32) -> SearchResult<Utility>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        let prune = self.strategy.prunes();
        let mut stack: Vec<Frame<G>> = Vec::new();

        let mut returned = match self.enter(root, depth, window, ply)? {
            Node::Leaf(value) => return Ok(value),
            Node::Interior(frame) => {
                stack.push(frame);
                None
            }
        };

        while let Some(frame) = stack.last_mut() {
            if let Some(value) = returned.take() {
                if frame.fold(value, prune) {
                    self.stats.cutoffs += 1;
                    trace!(
                        "cutoff at ply {}: {} reached {} against {:?}",
                        frame.ply,
                        frame.player,
                        frame.best,
                        frame.window
                    );
                    returned = Some(frame.best);
                    stack.pop();
                    continue;
                }
            }

            match frame.children.next() {
                Some((_, child)) => {
                    let (depth, window, ply) = (frame.depth.child(), frame.window, frame.ply + 1);
                    match self.enter(&child, depth, window, ply)? {
                        Node::Leaf(value) => returned = Some(value),
                        Node::Interior(next) => stack.push(next),
                    }
                }
                None => {
                    returned = Some(frame.best);
                    stack.pop();
                }
            }
        }

        returned.ok_or(SearchError::NoSuccessors)
    }

    fn enter<G>(&mut self, state: &G, depth: Depth, window: Window, ply: u32) -> SearchResult<Node<G>>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        // Terminal score beats any heuristic estimate.
        if state.is_full() {
            self.stats.terminal_nodes += 1;
            let score = state.score().map_err(SearchError::oracle)?;
            return Ok(Node::Leaf(score as Utility));
        }

        if depth.is_horizon() {
            self.stats.evaluations += 1;
            return Ok(Node::Leaf(self.evaluator.evaluate(state) as Utility));
        }

        if let Some(flag) = &self.cancel {
            if flag.is_cancelled() {
                return Err(SearchError::Cancelled {
                    nodes_visited: self.stats.nodes_visited,
                });
            }
        }

        let children = state.successors().map_err(SearchError::oracle)?;
        if children.is_empty() {
            return Err(SearchError::NoSuccessors);
        }
        self.stats.nodes_expanded += 1;
        self.stats.states_generated += children.len() as u64;

        let player = state.next_player();
        Ok(Node::Interior(Frame {
            children: children.into_iter(),
            player,
            depth,
            ply,
            best: player.worst_utility(),
            window,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::ZeroHeuristic;
    use crate::games::tree::{TreeGame, TreeNode};

    fn two_level() -> TreeGame {
        // Max root over two min nodes: min(3, 5) = 3, min(2, 9) = 2.
        TreeGame::new(TreeNode::branch(vec![
            TreeNode::branch(vec![TreeNode::leaf(3), TreeNode::leaf(5)]),
            TreeNode::branch(vec![TreeNode::leaf(2), TreeNode::leaf(9)]),
        ]))
    }

    #[test]
    fn test_window_narrow_and_cutoff() {
        let mut window = Window::FULL;
        window.narrow(Player::One, 3.0);
        assert_eq!(window.alpha, 3.0);
        assert!(window.cuts_off(Player::Two, 2.0));
        assert!(window.cuts_off(Player::Two, 3.0));
        assert!(!window.cuts_off(Player::Two, 4.0));
        assert!(!window.cuts_off(Player::One, 100.0));
    }

    #[test]
    fn test_each_strategy_finds_value() {
        let game = two_level();
        for strategy in Strategy::ALL {
            let value = strategy.search(&game, Depth::Unbounded, &ZeroHeuristic).unwrap();
            assert_eq!(value, 3.0, "{strategy}");
        }
    }

    #[test]
    fn test_alpha_beta_skips_refuted_sibling() {
        let game = two_level();

        let mut plain = Searcher::new(Strategy::DepthLimited, &ZeroHeuristic);
        plain.search(&game, Depth::Unbounded).unwrap();

        let mut pruned = Searcher::new(Strategy::AlphaBeta, &ZeroHeuristic);
        pruned.search(&game, Depth::Unbounded).unwrap();

        // The 9 leaf is never visited once the 2 leaf refutes the second branch.
        assert_eq!(plain.stats().nodes_visited, 7);
        assert_eq!(pruned.stats().nodes_visited, 6);
        assert_eq!(pruned.stats().cutoffs, 1);
    }

    #[test]
    fn test_terminal_root_rejected() {
        let game = TreeGame::new(TreeNode::leaf(4));
        let err = Strategy::Exact
            .search(&game, Depth::Unbounded, &ZeroHeuristic)
            .unwrap_err();
        assert!(matches!(err, SearchError::TerminalState));
    }

    #[test]
    fn test_exact_ignores_depth() {
        let game = two_level();
        let mut searcher = Searcher::new(Strategy::Exact, &ZeroHeuristic);
        let value = searcher.search(&game, Depth::Bounded(0)).unwrap();
        assert_eq!(value, 3.0);
        assert_eq!(searcher.stats().evaluations, 0);
    }

    #[test]
    fn test_cancelled_search() {
        let flag = CancelFlag::new();
        flag.cancel();
        let mut searcher = Searcher::new(Strategy::AlphaBeta, &ZeroHeuristic).with_cancel(flag);
        let err = searcher.search(&two_level(), Depth::Unbounded).unwrap_err();
        assert!(matches!(err, SearchError::Cancelled { .. }));
    }

    /// Single-line game that ends after `remaining` forced moves.
    #[derive(Clone, Debug)]
    struct Countdown {
        remaining: u32,
    }

    impl GameState for Countdown {
        type Move = u32;
        type Error = std::convert::Infallible;

        fn successors(&self) -> Result<crate::core::Successors<Self>, Self::Error> {
            let mut children = crate::core::Successors::<Self>::new();
            children.push((
                self.remaining,
                Countdown {
                    remaining: self.remaining - 1,
                },
            ));
            Ok(children)
        }

        fn is_full(&self) -> bool {
            self.remaining == 0
        }

        fn score(&self) -> Result<i64, Self::Error> {
            Ok(1)
        }

        fn next_player(&self) -> Player {
            if self.remaining % 2 == 0 {
                Player::One
            } else {
                Player::Two
            }
        }
    }

    #[test]
    fn test_deep_line_does_not_overflow() {
        let game = Countdown { remaining: 50_000 };
        let mut searcher = Searcher::new(Strategy::Exact, &ZeroHeuristic);
        assert_eq!(searcher.search(&game, Depth::Unbounded).unwrap(), 1.0);
        assert_eq!(searcher.stats().max_ply, 50_000);
        assert_eq!(searcher.stats().terminal_nodes, 1);
    }
}
