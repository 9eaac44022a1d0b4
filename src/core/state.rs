//! Game state oracle trait.
//!
//! Games implement `GameState` to expose:
//! - Legal successors in a deterministic order
//! - The terminal test and the terminal score
//! - Which player moves next
//!
//! Search code calls into `GameState` but never interprets moves or boards
//! directly, and never mutates a state: children are always produced by
//! `successors()`.

use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use super::player::Player;

/// Ordered `(move, child)` pairs produced by [`GameState::successors`].
///
/// SmallVec optimizes for typical board widths without heap allocation.
pub type Successors<G> = SmallVec<[(<G as GameState>::Move, G); 8]>;

/// Game state oracle.
///
/// ## Implementation Notes
///
/// - `successors`: must return children in the same order on every call
/// - `is_full`: `true` exactly when the game is over
/// - `score`: only meaningful on terminal states; positive favors player 1
/// - `next_player`: the player to move from this state
pub trait GameState: Clone + Sized {
    /// Opaque move identifier.
    type Move: Clone + Debug + Eq + Hash + Ord;

    /// Error raised by a failing oracle.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Enumerate `(move, child)` pairs in the oracle's order.
    fn successors(&self) -> Result<Successors<Self>, Self::Error>;

    /// Is the game over?
    fn is_full(&self) -> bool;

    /// Terminal score from player 1's point of view.
    fn score(&self) -> Result<i64, Self::Error>;

    /// Player to move.
    fn next_player(&self) -> Player;
}
