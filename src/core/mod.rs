//! Core types: players, the game state oracle, RNG.
//!
//! This module contains the game-agnostic building blocks. Games plug in by
//! implementing `GameState`; nothing here knows about boards or moves.

pub mod player;
pub mod rng;
pub mod state;

pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Successors};
