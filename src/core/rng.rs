//! Seeded move randomness.
//!
//! Random agents draw from a `GameRng` so a whole game replays exactly from
//! one seed. Each player gets its own stream via `for_player`, so the moves
//! of one side never depend on how many draws the other side made.
//!
//! ```
//! use rust_minimax::core::{GameRng, Player};
//!
//! let table = GameRng::new(42);
//! let mut a = table.for_player(Player::One);
//! let mut b = GameRng::new(42).for_player(Player::One);
//! assert_eq!(a.choose_index(7), b.choose_index(7));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::player::Player;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for `player`, derived from the seed only.
    #[must_use]
    pub fn for_player(&self, player: Player) -> Self {
        Self::new(mix(self.seed, player.index() as u64 + 1))
    }

    /// Uniform index into `len` items, `None` when there are none.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }

    /// Capture the stream position.
    #[must_use]
    pub fn snapshot(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured by `snapshot`.
    #[must_use]
    pub fn restore(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Serializable position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
}

// SplitMix64 finalizer over the seed and a stream id.
fn mix(seed: u64, stream: u64) -> u64 {
    let mut z = seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng) -> Vec<Option<usize>> {
        (0..16).map(|_| rng.choose_index(1000)).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(draws(&mut GameRng::new(9)), draws(&mut GameRng::new(9)));
    }

    #[test]
    fn test_player_streams_differ() {
        let table = GameRng::new(9);
        let one = table.for_player(Player::One);
        let two = table.for_player(Player::Two);
        assert_ne!(one.seed(), two.seed());
        assert_ne!(draws(&mut one.clone()), draws(&mut two.clone()));
    }

    #[test]
    fn test_player_stream_ignores_parent_draws() {
        let mut used = GameRng::new(3);
        draws(&mut used);
        assert_eq!(
            used.for_player(Player::Two).seed(),
            GameRng::new(3).for_player(Player::Two).seed()
        );
    }

    #[test]
    fn test_choose_index_bounds() {
        let mut rng = GameRng::new(7);
        assert_eq!(rng.choose_index(0), None);
        assert_eq!(rng.choose_index(1), Some(0));
        assert!(draws(&mut rng).iter().all(|d| d.is_some_and(|i| i < 1000)));
    }

    #[test]
    fn test_snapshot_resumes_stream() {
        let mut rng = GameRng::new(42);
        draws(&mut rng);

        let snapshot = rng.snapshot();
        let expected = draws(&mut rng);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(draws(&mut GameRng::restore(&restored)), expected);
    }
}
