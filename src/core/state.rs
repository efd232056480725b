//! Game state: grid, score, terminal flag, and the move entry point.
//!
//! ## Move pipeline
//!
//! `apply_move(direction)`:
//! 1. Slides: extract each row/column, run `merge_line`, write it back and
//!    add the merge score.
//! 2. If anything changed and the grid has room, spawn up to the configured
//!    budget of new tiles.
//! 3. Rescan for the terminal condition.
//!
//! Once the game is lost, slides are no-ops until `Restart`/`initialize()`.
//!
//! ## Randomness
//!
//! The random source is an explicit type parameter owned by the state.
//! Production code uses the entropy-seeded [`GameRng`]; tests inject a
//! fixed seed or a [`ScriptedSource`](super::rng::ScriptedSource).

use tracing::{debug, info};

use super::action::{Direction, MoveResult};
use super::config::GameConfig;
use super::error::{GameError, Result};
use super::grid::{Grid, LineRef, Tile};
use super::rng::{GameRng, RandomSource};
use super::snapshot::GameSnapshot;
use crate::rules::{is_terminal, merge_line, Spawner, Toward};

/// Orientation of the lines a slide operates on.
#[derive(Clone, Copy, Debug)]
enum Axis {
    Rows,
    Columns,
}

impl Axis {
    fn line(self, idx: usize) -> LineRef {
        match self {
            Axis::Rows => LineRef::Row(idx),
            Axis::Columns => LineRef::Column(idx),
        }
    }
}

fn slide_plan(direction: Direction) -> Option<(Axis, Toward)> {
    match direction {
        Direction::Up => Some((Axis::Columns, Toward::Start)),
        Direction::Down => Some((Axis::Columns, Toward::End)),
        Direction::Left => Some((Axis::Rows, Toward::Start)),
        Direction::Right => Some((Axis::Rows, Toward::End)),
        Direction::Restart | Direction::GenerateOnly => None,
    }
}

/// Complete game state.
///
/// ## Example
///
/// ```
/// use rust_2048::core::{Direction, GameState};
///
/// let mut game = GameState::with_seed(4, 42).unwrap();
/// game.initialize();
/// assert_eq!(game.grid().occupied_count(), 2);
///
/// let result = game.apply_move(Direction::Left);
/// assert!(!game.is_lost());
/// # let _ = result;
/// ```
#[derive(Clone, Debug)]
pub struct GameState<R = GameRng> {
    config: GameConfig,
    grid: Grid,
    score: u64,
    lost: bool,
    moves_applied: u64,
    spawner: Spawner,
    rng: R,
}

impl GameState<GameRng> {
    /// Classic rules on a `size` x `size` board, seeded from OS entropy.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_config(GameConfig::classic().with_size(size), GameRng::from_entropy())
    }

    /// Classic rules with a fixed seed.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self> {
        Self::with_config(GameConfig::classic().with_size(size), GameRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create an empty board for `config`, drawing randomness from `rng`.
    ///
    /// No tiles are seeded until [`initialize`](Self::initialize).
    pub fn with_config(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.size),
            score: 0,
            lost: false,
            moves_applied: 0,
            spawner: Spawner::new(config.four_probability),
            config,
            rng,
        })
    }

    /// Reset score and terminal flag, clear the grid, and seed fresh tiles.
    ///
    /// Safe to call at any point, including after a loss.
    pub fn initialize(&mut self) {
        self.score = 0;
        self.lost = false;
        self.moves_applied = 0;
        self.grid.clear();

        let count = self.config.initial_tile_count();
        let placed = self.spawner.spawn_up_to(&mut self.grid, &mut self.rng, count);
        debug!(size = self.config.size, tiles = placed, "initialized board");
    }

    /// Apply one move and report what happened.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if direction == Direction::Restart {
            self.initialize();
            return MoveResult::new(true, true);
        }
        if self.lost && direction.is_slide() {
            return MoveResult::NOOP;
        }

        let result = match slide_plan(direction) {
            Some((axis, toward)) => {
                let changed = self.slide(axis, toward);
                let spawned = if changed && !self.grid.is_full() {
                    let budget = self.config.spawn_budget();
                    self.spawner.spawn_up_to(&mut self.grid, &mut self.rng, budget) > 0
                } else {
                    false
                };
                if changed {
                    self.moves_applied += 1;
                }
                MoveResult::new(changed, spawned)
            }
            None => {
                let spawned = self
                    .spawner
                    .spawn_until_placed(&mut self.grid, &mut self.rng)
                    .is_some();
                MoveResult::new(false, spawned)
            }
        };

        self.refresh_lost();
        debug!(
            %direction,
            changed = result.changed,
            spawned = result.spawned,
            score = self.score,
            lost = self.lost,
            "applied move"
        );
        result
    }

    /// Apply a move given by its numeric code (Up = 1 .. GenerateOnly = 6).
    pub fn apply_code(&mut self, code: u8) -> Result<MoveResult> {
        let direction = Direction::try_from(code)?;
        Ok(self.apply_move(direction))
    }

    /// Would `direction` do anything right now? Does not mutate.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        match slide_plan(direction) {
            Some((axis, toward)) => {
                !self.lost
                    && (0..self.grid.size())
                        .any(|i| merge_line(&self.grid.line(axis.line(i)), toward).changed)
            }
            None if direction == Direction::Restart => true,
            None => !self.grid.is_full(),
        }
    }

    /// Slides that would change the grid.
    #[must_use]
    pub fn legal_slides(&self) -> Vec<Direction> {
        Direction::SLIDES
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    fn slide(&mut self, axis: Axis, toward: Toward) -> bool {
        let mut changed = false;
        for i in 0..self.grid.size() {
            let line = axis.line(i);
            let merged = merge_line(&self.grid.line(line), toward);
            if merged.changed {
                self.grid.write_line(line, &merged.tiles);
                changed = true;
            }
            self.score = self.score.saturating_add(merged.score);
        }
        changed
    }

    fn refresh_lost(&mut self) {
        let was_lost = self.lost;
        self.lost = is_terminal(&self.grid);
        if self.lost && !was_lost {
            info!(score = self.score, max_tile = self.grid.max_tile(), "no moves left");
        }
    }

    /// Switch to a new configuration (e.g. a larger board) and restart.
    ///
    /// On error the current game is left untouched.
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.grid = Grid::new(config.size);
        self.spawner = Spawner::new(config.four_probability);
        self.config = config;
        self.initialize();
        Ok(())
    }

    /// Replace the board and score, e.g. to resume a position.
    ///
    /// The terminal flag is recomputed from the new grid.
    pub fn load_grid(&mut self, grid: Grid, score: u64) -> Result<()> {
        if grid.size() != self.config.size || grid.cell_count() != self.config.cell_count() {
            return Err(GameError::argument(format!(
                "grid size {} ({} cells) does not match configured size {}",
                grid.size(),
                grid.cell_count(),
                self.config.size
            )));
        }
        self.grid = grid;
        self.score = score;
        self.moves_applied = 0;
        self.lost = is_terminal(&self.grid);
        Ok(())
    }

    // === Accessors ===

    /// Current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Accumulated merge score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// True once no legal move remains.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Slides that changed the grid since the last `initialize()`.
    #[must_use]
    pub fn moves_applied(&self) -> u64 {
        self.moves_applied
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Mutable access to the random source, e.g. to reseed it.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Owned, serializable view of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.config.size,
            rows: self.grid.rows(),
            score: self.score,
            lost: self.lost,
            max_tile: self.grid.max_tile(),
            moves_applied: self.moves_applied,
        }
    }
}
