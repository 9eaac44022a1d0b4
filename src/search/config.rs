//! Search configuration: strategy choice and depth bound.

use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};

/// The closed set of search strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Full-depth minimax. Ignores any depth bound.
    Exact,
    /// Minimax that falls back to the evaluator at the horizon.
    DepthLimited,
    /// Depth-limited minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

impl Strategy {
    /// All strategies, in increasing order of sophistication.
    pub const ALL: [Strategy; 3] = [Strategy::Exact, Strategy::DepthLimited, Strategy::AlphaBeta];

    /// Kebab-case name, as used in config files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::DepthLimited => "depth-limited",
            Strategy::AlphaBeta => "alpha-beta",
        }
    }

    /// Does this strategy accept a depth bound?
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Strategy::Exact)
    }

    /// Does this strategy prune with an alpha-beta window?
    #[must_use]
    pub const fn prunes(self) -> bool {
        matches!(self, Strategy::AlphaBeta)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                SearchError::invalid_config(format!(
                    "unknown strategy '{s}' (expected one of: exact, depth-limited, alpha-beta)"
                ))
            })
    }
}

/// Remaining search depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    /// Expand at most this many more plies.
    Bounded(u32),
    /// Search to terminal states.
    Unbounded,
}

impl Depth {
    /// Has the search reached its horizon?
    #[inline]
    #[must_use]
    pub const fn is_horizon(self) -> bool {
        matches!(self, Depth::Bounded(0))
    }

    /// Depth for the children of a node searched at `self`.
    ///
    /// Unbounded stays unbounded.
    #[inline]
    #[must_use]
    pub const fn child(self) -> Self {
        match self {
            Depth::Bounded(d) => Depth::Bounded(d.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl From<Option<u32>> for Depth {
    fn from(depth: Option<u32>) -> Self {
        depth.map_or(Depth::Unbounded, Depth::Bounded)
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Depth::Bounded(d) => write!(f, "{d}"),
            Depth::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Search configuration parameters.
///
/// `depth` is kept signed and unvalidated so that configuration read from
/// users or files can be rejected with a proper error; call
/// [`SearchConfig::validate`] before searching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Which strategy to run.
    pub strategy: Strategy,

    /// Maximum plies to expand before evaluating (None = unbounded).
    /// Must be absent for `Strategy::Exact`.
    pub depth: Option<i64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            depth: Some(4),
        }
    }
}

impl SearchConfig {
    /// Exact full-depth minimax.
    pub fn exact() -> Self {
        Self {
            strategy: Strategy::Exact,
            depth: None,
        }
    }

    /// Depth-limited minimax with the given horizon.
    pub fn depth_limited(depth: i64) -> Self {
        Self {
            strategy: Strategy::DepthLimited,
            depth: Some(depth),
        }
    }

    /// Alpha-beta search with the given horizon.
    pub fn alpha_beta(depth: i64) -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            depth: Some(depth),
        }
    }

    /// Create a new config with a custom strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with a custom depth.
    pub fn with_depth(mut self, depth: i64) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Create a new config that searches to terminal states.
    pub fn unbounded(mut self) -> Self {
        self.depth = None;
        self
    }

    /// Check the configuration and resolve the depth bound.
    pub fn validate(&self) -> SearchResult<Depth> {
        match (self.strategy, self.depth) {
            (_, None) => Ok(Depth::Unbounded),
            (Strategy::Exact, Some(depth)) => Err(SearchError::invalid_config(format!(
                "exact search is always unbounded, but depth {depth} was given"
            ))),
            (_, Some(depth)) if depth < 0 => Err(SearchError::invalid_config(format!(
                "depth must be non-negative, got {depth}"
            ))),
            (_, Some(depth)) => u32::try_from(depth).map(Depth::Bounded).map_err(|_| {
                SearchError::invalid_config(format!("depth {depth} exceeds {}", u32::MAX))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.strategy, Strategy::AlphaBeta);
        assert_eq!(config.validate().unwrap(), Depth::Bounded(4));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::exact()
            .with_strategy(Strategy::DepthLimited)
            .with_depth(3);
        assert_eq!(config, SearchConfig::depth_limited(3));

        let config = config.unbounded();
        assert_eq!(config.validate().unwrap(), Depth::Unbounded);
    }

    #[test]
    fn test_negative_depth_rejected() {
        let err = SearchConfig::alpha_beta(-1).validate().unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_exact_with_depth_rejected() {
        let err = SearchConfig::exact().with_depth(2).validate().unwrap_err();
        assert!(err.to_string().contains("always unbounded"));
    }

    #[test]
    fn test_oversized_depth_rejected() {
        let config = SearchConfig::depth_limited(i64::from(u32::MAX) + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_depth_child() {
        assert_eq!(Depth::Bounded(2).child(), Depth::Bounded(1));
        assert!(Depth::Bounded(1).child().is_horizon());
        assert_eq!(Depth::Unbounded.child(), Depth::Unbounded);
        assert!(!Depth::Unbounded.is_horizon());
        assert_eq!(Depth::from(None), Depth::Unbounded);
    }

    #[test]
    fn test_strategy_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert!("negamax".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::depth_limited(5);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"depth-limited\""));
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
