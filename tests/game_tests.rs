//! GameState integration tests.
//!
//! These drive the public move entry point through the scenarios and
//! invariants the engine guarantees: scoring, spawn legality, terminal
//! behaviour, and restarts.

use proptest::prelude::*;
use rust_2048::core::LineRef;
use rust_2048::{
    Direction, GameConfig, GameError, GameRng, GameState, Grid, MoveResult, ScriptedSource, Tile,
    TileCount,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn game_at(rows: Vec<Vec<Tile>>, seed: u64) -> GameState {
    let mut game = GameState::with_seed(rows.len(), seed).unwrap();
    game.load_grid(Grid::from_rows(rows).unwrap(), 0).unwrap();
    game
}

fn diff_cells(before: &Grid, after: &Grid) -> Vec<usize> {
    before
        .cells()
        .iter()
        .zip(after.cells())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_left_merges_pair_and_scores() {
    init_tracing();
    let mut game = game_at(
        vec![
            vec![0, 0, 2, 2],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ],
        1,
    );

    let result = game.apply_move(Direction::Left);

    assert!(result.changed);
    assert!(result.spawned);
    assert_eq!(game.grid().get(0, 0), Some(4));
    assert_eq!(game.score(), 4);
    // The merged 4 plus exactly one spawned tile
    assert_eq!(game.grid().occupied_count(), 2);
}

#[test]
fn test_identical_rows_left_is_noop_but_not_terminal() {
    let mut game = game_at(vec![vec![2, 4, 2, 4]; 4], 1);

    let result = game.apply_move(Direction::Left);

    assert_eq!(result, MoveResult::NOOP);
    assert_eq!(game.score(), 0);
    // Equal vertical neighbours keep Up/Down available
    assert!(!game.is_lost());
    assert!(game.can_move(Direction::Up));
}

#[test]
fn test_identical_rows_up_merges_columns() {
    let mut game = game_at(vec![vec![2, 4, 2, 4]; 4], 1);

    let result = game.apply_move(Direction::Up);

    assert!(result.changed);
    assert_eq!(game.grid().line(LineRef::Column(0)).as_slice()[..2], [4, 4]);
    assert_eq!(game.grid().line(LineRef::Column(1)).as_slice()[..2], [8, 8]);
    assert_eq!(game.score(), 2 * (4 + 8 + 4 + 8));
}

#[test]
fn test_compacted_row_reports_unchanged() {
    let mut game = game_at(
        vec![
            vec![2, 4, 8, 16],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ],
        1,
    );
    let before = game.grid().clone();

    assert_eq!(game.apply_move(Direction::Left), MoveResult::NOOP);
    assert_eq!(game.grid(), &before);
}

#[test]
fn test_checkerboard_is_terminal_on_load() {
    let game = game_at(
        vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ],
        1,
    );
    assert!(game.is_lost());
    assert!(game.legal_slides().is_empty());
}

#[test]
fn test_move_into_loss() {
    // Left merges the 2s; the spawn (script: cell 3, value 4) seals the board
    let rows = vec![vec![2, 2, 8], vec![16, 32, 64], vec![128, 256, 512]];
    let mut game =
        GameState::with_config(GameConfig::classic().with_size(3), ScriptedSource::new(vec![2, 0]))
            .unwrap();
    game.load_grid(Grid::from_rows(rows).unwrap(), 0).unwrap();

    let result = game.apply_move(Direction::Left);

    assert_eq!(result, MoveResult::new(true, true));
    assert_eq!(game.grid().rows()[0], vec![4, 8, 4]);
    assert!(game.is_lost());

    // Terminal: further slides are ignored
    let snapshot = game.snapshot();
    for direction in Direction::SLIDES {
        assert_eq!(game.apply_move(direction), MoveResult::NOOP);
    }
    assert_eq!(game.snapshot(), snapshot);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_initialize_is_reproducible_with_seed() {
    let mut a = GameState::with_seed(4, 99).unwrap();
    let mut b = GameState::with_seed(4, 99).unwrap();
    a.initialize();
    b.initialize();
    assert_eq!(a.grid(), b.grid());

    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        assert_eq!(a.apply_move(direction), b.apply_move(direction));
    }
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_initialize_clears_previous_game() {
    let mut game = game_at(
        vec![
            vec![2, 4, 8, 16],
            vec![32, 64, 128, 256],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ],
        3,
    );
    game.apply_move(Direction::Down);
    game.initialize();

    assert_eq!(game.score(), 0);
    assert_eq!(game.moves_applied(), 0);
    assert_eq!(game.grid().occupied_count(), 2);
    assert!(game.grid().max_tile() <= 4);
}

#[test]
fn test_restart_reports_changed_and_spawned() {
    let mut game = GameState::with_seed(4, 5).unwrap();
    game.initialize();
    assert_eq!(game.apply_move(Direction::Restart), MoveResult::new(true, true));
    assert_eq!(game.grid().occupied_count(), 2);
}

#[test]
fn test_entropy_seeded_games_are_playable() {
    let mut game = GameState::new(4).unwrap();
    game.initialize();
    assert_eq!(game.grid().occupied_count(), 2);
    assert!(!game.is_lost());
}

#[test]
fn test_scaled_board_spawns_quarter_size() {
    let mut game = GameState::with_config(GameConfig::scaled(16), GameRng::new(8)).unwrap();
    game.initialize();
    assert_eq!(game.grid().occupied_count(), 8);

    let direction = game.legal_slides()[0];
    let before = game.grid().occupied_count();
    let result = game.apply_move(direction);
    assert!(result.changed && result.spawned);
    // Up to 4 new tiles, minus any merges
    assert!(game.grid().occupied_count() <= before + 4);
    assert!(game.grid().occupied_count() + 4 > before);
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        GameState::with_seed(1, 0),
        Err(GameError::InvalidConfiguration { .. })
    ));
    let config = GameConfig::classic().with_spawn_per_move(TileCount::Fixed(0));
    assert!(GameState::with_config(config, GameRng::new(0)).is_err());

    let mut game = GameState::with_seed(4, 0).unwrap();
    assert!(matches!(
        game.apply_code(0),
        Err(GameError::InvalidArgument { .. })
    ));
}

#[test]
fn test_rng_checkpoint_replays_spawns() {
    let mut game = GameState::with_seed(4, 21).unwrap();
    game.initialize();
    let checkpoint_grid = game.grid().clone();
    let checkpoint_rng = game.rng().state();

    let mut replay = GameState::with_config(
        GameConfig::classic(),
        GameRng::from_state(&checkpoint_rng),
    )
    .unwrap();
    replay.load_grid(checkpoint_grid, game.score()).unwrap();

    for direction in [Direction::Left, Direction::Down, Direction::Right] {
        assert_eq!(game.apply_move(direction), replay.apply_move(direction));
    }
    assert_eq!(game.grid(), replay.grid());
}

// =============================================================================
// Properties
// =============================================================================

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        1 => Just(0u64),
        4 => (1u32..5).prop_map(|exp| 1u64 << exp),
    ]
}

fn rows(size: usize) -> impl Strategy<Value = Vec<Vec<Tile>>> {
    prop::collection::vec(prop::collection::vec(tile(), size), size)
}

fn any_rows() -> impl Strategy<Value = Vec<Vec<Tile>>> {
    (2usize..=6).prop_flat_map(rows)
}

fn slide() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::SLIDES.to_vec())
}

/// Full board of pairwise-distinct tiles: no merge and no gap anywhere.
fn terminal_rows() -> impl Strategy<Value = Vec<Vec<Tile>>> {
    (2usize..=4).prop_flat_map(|size| {
        let exps: Vec<u32> = (1..=(size * size) as u32).collect();
        Just(exps).prop_shuffle().prop_map(move |exps| {
            exps.chunks(size)
                .map(|chunk| chunk.iter().map(|&e| 1u64 << e).collect::<Vec<Tile>>())
                .collect::<Vec<_>>()
        })
    })
}

proptest! {
    #[test]
    fn move_conserves_value_up_to_spawn(rows in any_rows(), direction in slide(), seed in any::<u64>()) {
        let mut game = game_at(rows, seed);
        prop_assume!(!game.is_lost());
        let before = game.grid().total_value();

        let result = game.apply_move(direction);
        let after = game.grid().total_value();

        // Classic policy spawns at most one 2 or 4
        if result.spawned {
            prop_assert!(after == before + 2 || after == before + 4);
        } else {
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn spawn_only_follows_change(rows in any_rows(), direction in slide(), seed in any::<u64>()) {
        let mut game = game_at(rows, seed);
        let result = game.apply_move(direction);
        if !result.changed {
            prop_assert!(!result.spawned);
        }
        // A changed slide always leaves at least one gap to fill
        if result.changed {
            prop_assert!(result.spawned);
        }
    }

    #[test]
    fn generate_only_places_one_legal_tile(rows in any_rows(), seed in any::<u64>()) {
        let mut game = game_at(rows, seed);
        let before = game.grid().clone();
        let score = game.score();

        let result = game.apply_move(Direction::GenerateOnly);

        prop_assert!(!result.changed);
        prop_assert_eq!(result.spawned, !before.is_full());
        prop_assert_eq!(game.score(), score);

        let changed = diff_cells(&before, game.grid());
        if result.spawned {
            prop_assert_eq!(changed.len(), 1);
            let idx = changed[0];
            prop_assert_eq!(before.cells()[idx], 0);
            let value = game.grid().cells()[idx];
            prop_assert!(value == 2 || value == 4);
        } else {
            prop_assert!(changed.is_empty());
        }
    }

    #[test]
    fn terminal_slides_are_noops(rows in terminal_rows(), direction in slide(), seed in any::<u64>()) {
        let mut game = game_at(rows, seed);
        prop_assert!(game.is_lost());
        let before = game.snapshot();

        prop_assert_eq!(game.apply_move(direction), MoveResult::NOOP);
        prop_assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn score_never_decreases(seed in any::<u64>(), moves in prop::collection::vec(slide(), 1..60)) {
        let mut game = GameState::with_seed(4, seed).unwrap();
        game.initialize();
        let mut last = game.score();
        for direction in moves {
            game.apply_move(direction);
            prop_assert!(game.score() >= last);
            last = game.score();
        }
    }

    #[test]
    fn lost_flag_matches_legal_slides(rows in any_rows(), direction in slide(), seed in any::<u64>()) {
        let mut game = game_at(rows, seed);
        game.apply_move(direction);
        // An empty board has gaps but nothing to slide
        prop_assume!(game.grid().occupied_count() > 0);
        prop_assert_eq!(game.is_lost(), game.legal_slides().is_empty());
    }
}
