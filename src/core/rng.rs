//! Seeded randomness for card draws and playouts.
//!
//! Every random choice in the crate goes through a [`GameRng`], so a game
//! (or a search) is reproduced exactly by reusing its seed.
//!
//! ```
//! use sorry_mcts::core::GameRng;
//!
//! let mut table = GameRng::new(42);
//! let mut first_game = table.fork();
//! let mut replay = GameRng::new(42).fork();
//! assert_eq!(first_game.index_below(45), replay.index_below(45));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Multiplier spreading fork seeds apart (the 64-bit golden ratio).
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// A ChaCha8 stream plus the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Derive a new stream. The n-th fork of a given seed is always the
    /// same, and forking never advances this stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed ^ self.forks.wrapping_mul(FORK_STRIDE))
    }

    #[inline]
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[inline]
    pub fn index_below(&mut self, len: usize) -> usize {
        self.stream.gen_range(0..len)
    }

    /// Uniform element of `items`, or `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }
}
