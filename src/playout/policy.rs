//! Move-selection policies for headless play.

use crate::core::{Direction, GameRng, GameState, RandomSource};

/// Picks the next move for a game in progress.
pub trait Policy {
    /// Choose a direction for `state`.
    ///
    /// Only called while the game is not lost.
    fn choose<R: RandomSource>(&mut self, state: &GameState<R>) -> Direction;
}

/// Uniformly random among the slides that would change the board.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a policy with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose<R: RandomSource>(&mut self, state: &GameState<R>) -> Direction {
        let legal = state.legal_slides();
        if legal.is_empty() {
            return Direction::Up;
        }
        let idx = self.rng.next_below(legal.len() as u64) as usize;
        legal[idx]
    }
}

/// Rotates Up, Right, Down, Left, skipping slides that would do nothing.
#[derive(Clone, Debug, Default)]
pub struct CyclePolicy {
    next: usize,
}

impl CyclePolicy {
    /// Start the rotation at Up.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Policy for CyclePolicy {
    fn choose<R: RandomSource>(&mut self, state: &GameState<R>) -> Direction {
        for offset in 0..Direction::SLIDES.len() {
            let idx = (self.next + offset) % Direction::SLIDES.len();
            let direction = Direction::SLIDES[idx];
            if state.can_move(direction) {
                self.next = idx + 1;
                return direction;
            }
        }
        Direction::Up
    }
}
