//! Random cell spawner.
//!
//! A spawn attempt picks a cell uniformly from the whole board. If that cell
//! is occupied the attempt fails without retrying; callers retry until a tile
//! lands or the board is provably full. After `RETRY_FACTOR * cell_count`
//! misses the random source is treated as degenerate and the tile goes to a
//! pick among the empty cells instead. The new tile is a 4 with the
//! configured probability (0.1 by default), otherwise a 2.

use tracing::{trace, warn};

use crate::core::config::DEFAULT_FOUR_PROBABILITY;
use crate::core::grid::{Grid, Tile};
use crate::core::rng::RandomSource;

/// Full-board attempts allowed per cell before falling back to an
/// empty-cell pick.
pub const RETRY_FACTOR: usize = 8;

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    /// Row of the new tile.
    pub row: usize,
    /// Column of the new tile.
    pub col: usize,
    /// Value placed, 2 or 4.
    pub value: Tile,
}

/// Places new tiles on a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spawner {
    four_probability: f64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(DEFAULT_FOUR_PROBABILITY)
    }
}

impl Spawner {
    /// Create a spawner producing a 4 with the given probability.
    #[must_use]
    pub fn new(four_probability: f64) -> Self {
        Self { four_probability }
    }

    /// Probability of a 4.
    #[must_use]
    pub fn four_probability(&self) -> f64 {
        self.four_probability
    }

    /// Draw the value of a new tile.
    pub fn draw_value<R: RandomSource>(&self, rng: &mut R) -> Tile {
        if rng.next_chance(self.four_probability) {
            4
        } else {
            2
        }
    }

    /// One attempt: pick any cell, fill it only if it is empty.
    pub fn try_spawn_one<R: RandomSource>(&self, grid: &mut Grid, rng: &mut R) -> Option<Spawn> {
        let size = grid.size();
        let idx = rng.next_below(grid.cell_count() as u64) as usize;
        if grid.get_flat(idx) != Some(0) {
            return None;
        }
        let value = self.draw_value(rng);
        grid.set_flat(idx, value);
        let spawn = Spawn {
            row: idx / size,
            col: idx % size,
            value,
        };
        trace!(row = spawn.row, col = spawn.col, value, "spawned tile");
        Some(spawn)
    }

    /// Retry until a tile lands. Returns `None` only when the grid is full.
    ///
    /// Attempts are bounded; see [`RETRY_FACTOR`].
    pub fn spawn_until_placed<R: RandomSource>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Option<Spawn> {
        if grid.is_full() {
            return None;
        }
        let attempts = grid.cell_count().saturating_mul(RETRY_FACTOR);
        for _ in 0..attempts {
            if let Some(spawn) = self.try_spawn_one(grid, rng) {
                return Some(spawn);
            }
        }
        warn!(attempts, "random source keeps hitting occupied cells; picking among empty cells");
        self.spawn_in_empty(grid, rng)
    }

    /// Place a tile in a uniformly chosen empty cell. `None` if the grid is full.
    pub fn spawn_in_empty<R: RandomSource>(&self, grid: &mut Grid, rng: &mut R) -> Option<Spawn> {
        let empty: Vec<usize> = grid
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(idx, &t)| (t == 0).then_some(idx))
            .collect();
        if empty.is_empty() {
            return None;
        }
        let pick = rng.next_below(empty.len() as u64) as usize;
        let idx = empty[pick.min(empty.len() - 1)];
        let value = self.draw_value(rng);
        grid.set_flat(idx, value);
        let size = grid.size();
        let spawn = Spawn {
            row: idx / size,
            col: idx % size,
            value,
        };
        trace!(row = spawn.row, col = spawn.col, value, "spawned tile in empty cell");
        Some(spawn)
    }

    /// Place up to `budget` tiles, stopping early once the grid is full.
    ///
    /// Returns the number of tiles placed.
    pub fn spawn_up_to<R: RandomSource>(&self, grid: &mut Grid, rng: &mut R, budget: usize) -> usize {
        let mut placed = 0;
        while placed < budget && self.spawn_until_placed(grid, rng).is_some() {
            placed += 1;
        }
        placed
    }
}
