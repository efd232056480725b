//! Headless game loop.
//!
//! Runs a fresh game to completion (or a move cap) with a [`Policy`],
//! recording every move into a [`Trajectory`].

use tracing::debug;

use crate::core::{GameConfig, GameRng, GameState, Result};

use super::policy::Policy;
use super::trajectory::{Step, Trajectory};

/// Configuration for headless play.
#[derive(Clone, Debug)]
pub struct PlayoutConfig {
    /// Maximum moves per game (to bound runaway games).
    pub max_moves: usize,

    /// Seed offset for RNG (combined with game index for unique seeds).
    pub seed_offset: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_moves: 10_000,
            seed_offset: 0,
        }
    }
}

impl PlayoutConfig {
    /// Create a new playout config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Plays games under a fixed rule configuration.
#[derive(Clone, Debug)]
pub struct PlayoutRunner {
    game: GameConfig,
    config: PlayoutConfig,
}

impl PlayoutRunner {
    /// Create a runner. Fails if `game` is not a valid configuration.
    pub fn new(game: GameConfig, config: PlayoutConfig) -> Result<Self> {
        game.validate()?;
        Ok(Self { game, config })
    }

    /// Rule configuration used for every game.
    pub fn game_config(&self) -> &GameConfig {
        &self.game
    }

    /// Play one game from a fresh board seeded with `seed`.
    pub fn play_game<P: Policy>(&self, policy: &mut P, seed: u64) -> Result<Trajectory> {
        let mut state = GameState::with_config(self.game.clone(), GameRng::new(seed))?;
        state.initialize();

        let mut trajectory = Trajectory::new(seed);
        for _ in 0..self.config.max_moves {
            if state.is_lost() {
                break;
            }
            let direction = policy.choose(&state);
            let result = state.apply_move(direction);
            trajectory.push(Step {
                direction,
                result,
                score_after: state.score(),
            });
        }

        trajectory.finish(state.score(), state.max_tile(), state.is_lost());
        debug!(
            seed,
            moves = trajectory.len(),
            score = trajectory.final_score,
            max_tile = trajectory.max_tile,
            "playout finished"
        );
        Ok(trajectory)
    }

    /// Play `count` games, seeding game `i` with `seed_offset + i`.
    pub fn play_games<P: Policy>(&self, policy: &mut P, count: usize) -> Result<Vec<Trajectory>> {
        (0..count)
            .map(|i| {
                let seed = self.config.seed_offset.wrapping_add(i as u64);
                self.play_game(policy, seed)
            })
            .collect()
    }
}
