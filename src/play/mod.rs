//! Playing whole games between two agents.

mod game_loop;

pub use game_loop::{play_game, GameRecord, MoveRecord, Outcome};
