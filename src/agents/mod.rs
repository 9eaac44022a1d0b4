//! Agents that choose moves in a game.
//!
//! - `RandomAgent`: uniform over legal moves, seeded
//! - `HumanAgent`: reads moves from a text stream
//! - `MinimaxAgent`: searches with a configured strategy

mod human;
mod minimax;
mod random;

pub use human::{HumanAgent, StdinLines};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use crate::core::GameState;
use crate::error::AgentError;

/// Something that picks a move for the player to move.
pub trait Agent<G: GameState> {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Choose a move from `state`, returning it with the resulting state.
    fn get_move(&mut self, state: &G) -> Result<(G::Move, G), AgentError>;
}

impl<G: GameState, A: Agent<G> + ?Sized> Agent<G> for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get_move(&mut self, state: &G) -> Result<(G::Move, G), AgentError> {
        (**self).get_move(state)
    }
}
