//! Game configuration types.
//!
//! A game is configured once at construction by providing:
//! - `size`: side length of the square grid
//! - `initial_tiles`: how many tiles `initialize()` seeds
//! - `spawn_per_move`: how many tiles a changed move may spawn
//! - `four_probability`: chance that a spawned tile is a 4 rather than a 2
//!
//! The engine never hardcodes the spawn counts - configs define them.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Largest supported side length.
pub const MAX_SIZE: usize = 64;

/// Default side length.
pub const DEFAULT_SIZE: usize = 4;

/// Default chance that a spawned tile is a 4.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// A tile count that may scale with the board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileCount {
    /// Exactly this many tiles.
    Fixed(u32),
    /// `size / 2`, at least one.
    HalfSize,
    /// `size / 4`, at least one.
    QuarterSize,
}

impl TileCount {
    /// Resolve to a concrete count for a board of `size`.
    #[must_use]
    pub fn resolve(self, size: usize) -> usize {
        match self {
            TileCount::Fixed(n) => n as usize,
            TileCount::HalfSize => (size >> 1).max(1),
            TileCount::QuarterSize => (size >> 2).max(1),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the grid.
    pub size: usize,

    /// Tiles seeded by `initialize()`.
    pub initial_tiles: TileCount,

    /// Upper bound on tiles spawned after a changed move.
    /// Spawning also stops early once the grid is full.
    pub spawn_per_move: TileCount,

    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            initial_tiles: TileCount::Fixed(2),
            spawn_per_move: TileCount::Fixed(1),
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }
}

impl GameConfig {
    /// The classic 4x4 game: two seeded tiles, one spawn per move.
    #[must_use]
    pub fn classic() -> Self {
        Self::default()
    }

    /// Seeding and spawn budgets that grow with the board (8x8, 16x16, ...).
    #[must_use]
    pub fn scaled(size: usize) -> Self {
        Self {
            size,
            initial_tiles: TileCount::HalfSize,
            spawn_per_move: TileCount::QuarterSize,
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }

    /// Set the side length.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the seeded tile count.
    pub fn with_initial_tiles(mut self, count: TileCount) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Set the per-move spawn budget.
    pub fn with_spawn_per_move(mut self, count: TileCount) -> Self {
        self.spawn_per_move = count;
        self
    }

    /// Set the probability of spawning a 4.
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Resolved seeded tile count.
    #[must_use]
    pub fn initial_tile_count(&self) -> usize {
        self.initial_tiles.resolve(self.size)
    }

    /// Resolved per-move spawn budget.
    #[must_use]
    pub fn spawn_budget(&self) -> usize {
        self.spawn_per_move.resolve(self.size)
    }

    /// Check that this config describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(GameError::config(format!(
                "size must be at least 2, got {}",
                self.size
            )));
        }
        if self.size > MAX_SIZE {
            return Err(GameError::config(format!(
                "size must be at most {MAX_SIZE}, got {}",
                self.size
            )));
        }
        let initial = self.initial_tile_count();
        if initial == 0 {
            return Err(GameError::config("initial tile count must be positive"));
        }
        // A freshly seeded board must leave room to move.
        if initial >= self.cell_count() {
            return Err(GameError::config(format!(
                "initial tile count {initial} must be below cell count {}",
                self.cell_count()
            )));
        }
        if self.spawn_budget() == 0 {
            return Err(GameError::config("spawn budget must be positive"));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::config(format!(
                "four probability must lie in [0, 1], got {}",
                self.four_probability
            )));
        }
        Ok(())
    }
}
