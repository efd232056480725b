//! Random sources for tile spawning.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine draws through the [`RandomSource`] trait, so
//!   tests can substitute a scripted sequence
//! - **Deterministic**: same seed produces an identical game
//! - **Serializable**: O(1) state capture and restore via [`GameRngState`]
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! assert_eq!(rng.next_below(16), replay.next_below(16));
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Resolution used by [`RandomSource::next_chance`].
pub const CHANCE_SCALE: u64 = 1000;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Uniform value in `[0, modulus)`. Returns 0 when `modulus` is 0.
    fn next_below(&mut self, modulus: u64) -> u64;

    /// True with the given probability, at a resolution of 1/[`CHANCE_SCALE`].
    fn next_chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        let threshold = (probability * CHANCE_SCALE as f64).round() as u64;
        self.next_below(CHANCE_SCALE) < threshold
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, modulus: u64) -> u64 {
        (**self).next_below(modulus)
    }
}

/// Seeded game RNG.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// Falls back to the wall clock when no OS entropy is available.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Restart the stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, modulus: u64) -> u64 {
        if modulus == 0 {
            return 0;
        }
        self.inner.gen_range(0..modulus)
    }
}

fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(err) => {
            warn!(error = %err, "OS entropy unavailable, seeding from clock; randomness will be limited");
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of
/// how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed cycle of raw values, each reduced modulo the request.
///
/// Meant for tests that need to place tiles at known cells.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<u64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source cycling through `values`. An empty script always yields 0.
    #[must_use]
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, modulus: u64) -> u64 {
        if modulus == 0 || self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let raw = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        raw % modulus
    }
}
