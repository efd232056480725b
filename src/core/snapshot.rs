//! Read-only snapshot of a game for rendering and logging.
//!
//! A snapshot is a plain owned copy: taking one never borrows the
//! `GameState`, so a front end can hold it across moves.

use serde::{Deserialize, Serialize};

use super::grid::Tile;

/// Owned view of everything a front end renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Side length of the board.
    pub size: usize,
    /// Tiles row by row, top to bottom; 0 is empty.
    pub rows: Vec<Vec<Tile>>,
    /// Accumulated merge score.
    pub score: u64,
    /// No legal slide remains.
    pub lost: bool,
    /// Largest tile on the board.
    pub max_tile: Tile,
    /// Slides that changed the board since the last restart.
    pub moves_applied: u64,
}

impl GameSnapshot {
    /// True while slides can still change the board.
    #[must_use]
    pub fn playable(&self) -> bool {
        !self.lost
    }

    /// Tile at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}
