//! Player identification for two-player zero-sum games.
//!
//! ## Player
//!
//! `Player::One` maximizes utility and `Player::Two` minimizes it. The sign
//! convention (+1 / -1) matches terminal scores: positive favors player 1.

use serde::{Deserialize, Serialize};

use crate::search::Utility;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, the maximizer (+1).
    One,
    /// Second player, the minimizer (-1).
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The +1 / -1 sign of this player.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Player for a +1 / -1 sign.
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Does this player maximize utility?
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::One)
    }

    /// Starting value of a running extremum for this player.
    ///
    /// `-inf` for the maximizer, `+inf` for the minimizer, so that the first
    /// finite candidate always improves on it.
    #[must_use]
    pub fn worst_utility(self) -> Utility {
        match self {
            Player::One => Utility::NEG_INFINITY,
            Player::Two => Utility::INFINITY,
        }
    }

    /// Does `candidate` strictly improve on `incumbent` for this player?
    ///
    /// Ties never improve, so the first-seen value wins.
    #[inline]
    #[must_use]
    pub fn prefers(self, candidate: Utility, incumbent: Utility) -> bool {
        match self {
            Player::One => candidate > incumbent,
            Player::Two => candidate < incumbent,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
