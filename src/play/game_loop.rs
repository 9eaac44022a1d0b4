//! Turn-by-turn game loop.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::{GameState, Player};
use crate::error::{AgentError, SearchError};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Player1,
    Player2,
    Draw,
}

impl Outcome {
    /// Outcome for a final score: positive favors player 1.
    #[must_use]
    pub fn from_score(score: i64) -> Self {
        match score.signum() {
            1 => Outcome::Player1,
            -1 => Outcome::Player2,
            _ => Outcome::Draw,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Player1 => Some(Player::One),
            Outcome::Player2 => Some(Player::Two),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "{player} wins"),
            None => write!(f, "draw"),
        }
    }
}

/// One move of a played game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord<M> {
    pub player: Player,
    pub mv: M,
}

/// A finished game.
#[derive(Clone, Debug)]
pub struct GameRecord<G: GameState> {
    /// Moves in the order they were played.
    pub moves: Vec<MoveRecord<G::Move>>,
    /// The terminal state.
    pub final_state: G,
    /// Final score, positive for player 1.
    pub score: i64,
    pub outcome: Outcome,
}

/// Play from `initial` until the state is full.
///
/// `agents[0]` moves for player 1 and `agents[1]` for player 2.
pub fn play_game<G: GameState>(
    initial: G,
    agents: [&mut dyn Agent<G>; 2],
) -> Result<GameRecord<G>, AgentError> {
    let mut agents = agents;
    let mut state = initial;
    let mut moves = Vec::new();

    while !state.is_full() {
        let player = state.next_player();
        let agent = &mut agents[player.index()];
        let (mv, next) = agent.get_move(&state)?;
        info!("{} ({}) plays {:?}", player, agent.name(), mv);
        moves.push(MoveRecord { player, mv });
        state = next;
    }

    let score = state.score().map_err(SearchError::oracle)?;
    let outcome = Outcome::from_score(score);
    info!("game over after {} moves: score {}, {}", moves.len(), score, outcome);

    Ok(GameRecord {
        moves,
        final_state: state,
        score,
        outcome,
    })
}
