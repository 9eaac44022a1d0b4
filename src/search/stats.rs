//! Search statistics for diagnostics and pruning comparisons.

use serde::{Deserialize, Serialize};

/// Statistics collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States entered (terminal, horizon and interior).
    pub nodes_visited: u64,

    /// Interior states whose successors were generated.
    pub nodes_expanded: u64,

    /// Child states produced by the oracle.
    pub states_generated: u64,

    /// Terminal states scored.
    pub terminal_nodes: u64,

    /// Heuristic evaluations at the horizon.
    pub evaluations: u64,

    /// Interior nodes abandoned by an alpha-beta cutoff.
    pub cutoffs: u64,

    /// Deepest ply entered, relative to the search root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold another search's statistics into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_visited += other.nodes_visited;
        self.nodes_expanded += other.nodes_expanded;
        self.states_generated += other.states_generated;
        self.terminal_nodes += other.terminal_nodes;
        self.evaluations += other.evaluations;
        self.cutoffs += other.cutoffs;
        self.max_ply = self.max_ply.max(other.max_ply);
        self.time_us += other.time_us;
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate the average number of children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.states_generated as f64 / self.nodes_expanded as f64
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes ({} expanded, {} terminal, {} evaluated, {} cutoffs), max ply {}, {}us",
            self.nodes_visited,
            self.nodes_expanded,
            self.terminal_nodes,
            self.evaluations,
            self.cutoffs,
            self.max_ply,
            self.time_us
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 1000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_branching_factor() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.branching_factor(), 0.0);

        stats.nodes_expanded = 4;
        stats.states_generated = 10;
        assert_eq!(stats.branching_factor(), 2.5);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats::new();
        let mut part = SearchStats::new();
        part.nodes_visited = 5;
        part.max_ply = 3;
        part.cutoffs = 1;

        total.merge(&part);
        part.max_ply = 1;
        total.merge(&part);

        assert_eq!(total.nodes_visited, 10);
        assert_eq!(total.cutoffs, 2);
        assert_eq!(total.max_ply, 3);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 100;
        stats.evaluations = 50;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.nodes_expanded = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
