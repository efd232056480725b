//! Core engine types: errors, configuration, RNG, moves, grid, state.
//!
//! This module holds the game's owned state. The algorithms it drives
//! live in `rules` and carry no state of their own.

pub mod action;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::{Direction, MoveResult};
pub use config::{GameConfig, TileCount, DEFAULT_SIZE, MAX_SIZE};
pub use error::{GameError, Result};
pub use grid::{Grid, Line, LineRef, Tile, MAX_TILE};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
pub use snapshot::GameSnapshot;
pub use state::GameState;
