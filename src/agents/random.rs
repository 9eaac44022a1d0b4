//! Uniformly random agent.

use crate::core::{GameRng, GameState};
use crate::error::{AgentError, SearchError};

use super::Agent;

/// Plays a uniformly random legal move. Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl<G: GameState> Agent<G> for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn get_move(&mut self, state: &G) -> Result<(G::Move, G), AgentError> {
        let mut children = state.successors().map_err(SearchError::oracle)?;
        let index = self.rng.choose_index(children.len()).ok_or(AgentError::NoMoves)?;
        Ok(children.swap_remove(index))
    }
}
