//! Explicit game trees.
//!
//! `TreeGame` walks a hand-built tree of leaves (terminal scores), branches
//! (with a heuristic estimate) and failing nodes. Every state produced from
//! one root shares an `ExpansionCounter`, so tests can see exactly how much
//! work a search did without any global state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::core::{GameState, Player, Successors};

/// A node of an explicit game tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    /// Terminal state with its score.
    Leaf(i64),
    /// Interior state; `estimate` is what a heuristic would return here.
    Branch {
        estimate: i64,
        children: Vec<Arc<TreeNode>>,
    },
    /// Interior state whose oracle calls fail.
    Failing,
}

impl TreeNode {
    /// Terminal node.
    pub fn leaf(score: i64) -> Self {
        TreeNode::Leaf(score)
    }

    /// Interior node with estimate 0.
    pub fn branch(children: Vec<TreeNode>) -> Self {
        TreeNode::Branch {
            estimate: 0,
            children: children.into_iter().map(Arc::new).collect(),
        }
    }

    /// Set the heuristic estimate of a branch. Other nodes are unchanged.
    #[must_use]
    pub fn with_estimate(self, estimate: i64) -> Self {
        match self {
            TreeNode::Branch { children, .. } => TreeNode::Branch { estimate, children },
            other => other,
        }
    }

    /// Same tree with every branch's children in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            TreeNode::Branch { estimate, children } => TreeNode::Branch {
                estimate: *estimate,
                children: children
                    .iter()
                    .rev()
                    .map(|child| Arc::new(child.reversed()))
                    .collect(),
            },
            other => other.clone(),
        }
    }

    /// Number of plies on the longest path to a leaf.
    #[must_use]
    pub fn height(&self) -> u32 {
        match self {
            TreeNode::Branch { children, .. } => {
                1 + children.iter().map(|child| child.height()).max().unwrap_or(0)
            }
            TreeNode::Leaf(_) | TreeNode::Failing => 0,
        }
    }
}

/// Counts oracle work across every state derived from one root.
///
/// Clones share the same counters.
#[derive(Clone, Debug, Default)]
pub struct ExpansionCounter {
    expansions: Arc<AtomicU64>,
    states: Arc<AtomicU64>,
}

impl ExpansionCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `successors()` calls on branches.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.expansions.load(Ordering::Relaxed)
    }

    /// Number of child states created.
    #[must_use]
    pub fn states(&self) -> u64 {
        self.states.load(Ordering::Relaxed)
    }

    /// Reset both counts to zero.
    pub fn reset(&self) {
        self.expansions.store(0, Ordering::Relaxed);
        self.states.store(0, Ordering::Relaxed);
    }

    fn record(&self, generated: usize) {
        self.expansions.fetch_add(1, Ordering::Relaxed);
        self.states.fetch_add(generated as u64, Ordering::Relaxed);
    }
}

/// Oracle failures raised by `TreeGame`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("score requested for a non-terminal node")]
    NotTerminal,

    #[error("oracle unavailable at failing node")]
    Unavailable,
}

/// A position in an explicit game tree.
///
/// Player 1 moves at even plies, player 2 at odd plies. Moves are child
/// indices.
#[derive(Clone, Debug)]
pub struct TreeGame {
    node: Arc<TreeNode>,
    ply: u32,
    counter: ExpansionCounter,
}

impl TreeGame {
    /// Root of `tree` with a fresh counter.
    pub fn new(tree: TreeNode) -> Self {
        Self::with_counter(tree, ExpansionCounter::new())
    }

    /// Root of `tree` reporting to `counter`.
    pub fn with_counter(tree: TreeNode, counter: ExpansionCounter) -> Self {
        Self {
            node: Arc::new(tree),
            ply: 0,
            counter,
        }
    }

    /// The counter shared by this state and everything derived from it.
    #[must_use]
    pub fn counter(&self) -> &ExpansionCounter {
        &self.counter
    }

    /// The node this state sits on.
    #[must_use]
    pub fn node(&self) -> &TreeNode {
        &self.node
    }

    /// Plies from the root.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Heuristic estimate: the branch estimate, or the leaf score.
    #[must_use]
    pub fn estimate(&self) -> i64 {
        match *self.node {
            TreeNode::Leaf(score) => score,
            TreeNode::Branch { estimate, .. } => estimate,
            TreeNode::Failing => 0,
        }
    }
}

impl GameState for TreeGame {
    type Move = usize;
    type Error = TreeError;

    fn successors(&self) -> Result<Successors<Self>, Self::Error> {
        match &*self.node {
            TreeNode::Branch { children, .. } => {
                self.counter.record(children.len());
                Ok(children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| {
                        let state = TreeGame {
                            node: Arc::clone(child),
                            ply: self.ply + 1,
                            counter: self.counter.clone(),
                        };
                        (i, state)
                    })
                    .collect())
            }
            TreeNode::Leaf(_) => Ok(Successors::<Self>::new()),
            TreeNode::Failing => Err(TreeError::Unavailable),
        }
    }

    fn is_full(&self) -> bool {
        matches!(*self.node, TreeNode::Leaf(_))
    }

    fn score(&self) -> Result<i64, Self::Error> {
        match *self.node {
            TreeNode::Leaf(score) => Ok(score),
            TreeNode::Branch { .. } => Err(TreeError::NotTerminal),
            TreeNode::Failing => Err(TreeError::Unavailable),
        }
    }

    fn next_player(&self) -> Player {
        if self.ply % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}
