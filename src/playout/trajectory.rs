//! Trajectory recording for headless games.
//!
//! A trajectory records a complete game, capturing:
//! - Each move requested and what it did
//! - The running score after every move
//! - The final score, best tile, and whether the game ended in a loss

use serde::{Deserialize, Serialize};

use crate::core::{Direction, MoveResult, Tile};

/// A single move in a trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The move that was requested.
    pub direction: Direction,

    /// What the engine reported for it.
    pub result: MoveResult,

    /// Score after the move.
    pub score_after: u64,
}

/// A complete recorded game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Seed of the game's spawn stream.
    pub seed: u64,

    /// All moves in order.
    pub steps: Vec<Step>,

    /// Score at the end of the game.
    pub final_score: u64,

    /// Largest tile reached.
    pub max_tile: Tile,

    /// True if play stopped because no move was left.
    pub lost: bool,
}

impl Trajectory {
    /// Create an empty trajectory.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            steps: Vec::new(),
            final_score: 0,
            max_tile: 0,
            lost: false,
        }
    }

    /// Add a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Record the final position.
    pub fn finish(&mut self, final_score: u64, max_tile: Tile, lost: bool) {
        self.final_score = final_score;
        self.max_tile = max_tile;
        self.lost = lost;
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no moves were recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Moves that changed the board.
    #[must_use]
    pub fn effective_moves(&self) -> usize {
        self.steps.iter().filter(|s| s.result.changed).count()
    }
}
