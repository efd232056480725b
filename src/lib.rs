//! # rust-2048
//!
//! The rule engine of the 2048 sliding-tile puzzle: a square grid of
//! numeric tiles that slides and merges in four directions, spawns new
//! tiles, keeps score, and detects when no legal move remains.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: a `GameState` is an ordinary value owned by the
//!    caller. There are no process-wide singletons for grid, score, or RNG.
//!
//! 2. **Injectable Randomness**: the random source is a type parameter, so
//!    tests can replay an exact spawn sequence.
//!
//! 3. **Pure Algorithms**: line merging, loss detection, and spawning are
//!    free of hidden state and testable in isolation.
//!
//! ## Modules
//!
//! - `core`: errors, configuration, RNG, moves, grid, game state
//! - `rules`: line merge, loss check, tile spawner
//! - `playout`: headless policies and a game loop for end-to-end runs
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, GameState};
//!
//! let mut game = GameState::with_seed(4, 12345).unwrap();
//! game.initialize();
//!
//! for direction in [Direction::Left, Direction::Up, Direction::Right] {
//!     let result = game.apply_move(direction);
//!     if result.changed {
//!         assert!(result.spawned);
//!     }
//! }
//! assert!(game.grid().occupied_count() >= 2);
//! ```

pub mod core;
pub mod playout;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameError, GameRng, GameRngState, GameSnapshot, GameState, Grid,
    LineRef, MoveResult, RandomSource, Result, ScriptedSource, Tile, TileCount,
};

pub use crate::rules::{is_terminal, merge_line, MergedLine, Spawn, Spawner, Toward};

pub use crate::playout::{CyclePolicy, PlayoutConfig, PlayoutRunner, Policy, RandomPolicy, Trajectory};
