//! Error types for search and agents.

use thiserror::Error;

/// Boxed error raised by a game-state oracle.
pub type OracleError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the search strategies and the move selector.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SearchError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("search invoked on terminal state")]
    TerminalState,

    #[error("non-terminal state has no successors")]
    NoSuccessors,

    #[error("search cancelled after {nodes_visited} nodes")]
    Cancelled { nodes_visited: u64 },

    #[error("game state oracle failed: {0}")]
    Oracle(#[source] OracleError),
}

impl SearchError {
    /// Wrap an oracle failure without altering it.
    pub fn oracle<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SearchError::Oracle(Box::new(err))
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        SearchError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Errors raised while an agent chooses a move.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AgentError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("no legal moves available")]
    NoMoves,

    #[error("input closed before a legal move was entered")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for search results.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
