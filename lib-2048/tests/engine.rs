use lib_2048::{
    ai::random::random_direction, Board, ChangeDetection, Direction, Game, GameConfig, GameState,
    Tile,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn board(rows: [[u32; 4]; 4]) -> Board {
    Board::try_from(rows).unwrap()
}

fn seeded(rows: [[u32; 4]; 4], seed: u64) -> Game<ChaCha8Rng> {
    Game::from_board(board(rows), ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn row_examples_under_move_left() {
    let cases = [
        ([2, 2, 2, 2], [4, 4, 0, 0], 8),
        ([2, 2, 4, 4], [4, 8, 0, 0], 12),
        ([2, 0, 2, 4], [4, 4, 0, 0], 4),
    ];

    for (row, expected, gained) in cases {
        let mut game = seeded([row, [2, 4, 8, 16], [0; 4], [0; 4]], 9);

        assert!(game.move_left());

        let values = game.board().values();
        assert_eq!(values[0][..2], expected[..2]);
        // The blocked row stays put.
        assert_eq!(values[1], [2, 4, 8, 16]);
        assert_eq!(game.score(), gained);
    }
}

#[test]
fn moves_map_to_the_right_walls() {
    let start = [[0, 0, 0, 0], [0, 8, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    let expected = [
        (Direction::Left, (1, 0)),
        (Direction::Right, (1, 3)),
        (Direction::Up, (0, 1)),
        (Direction::Down, (3, 1)),
    ];

    for (direction, (row, column)) in expected {
        let mut game = seeded(start, 4);

        assert!(game.apply_move(direction));
        assert_eq!(game.board().tile(row, column).value(), 8, "{direction:?}");
        // The original tile plus one spawn.
        assert_eq!(game.empty_tile_count(), 14);
    }
}

#[test]
fn invariants_hold_over_long_play() {
    let mut game = Game::new(ChaCha8Rng::seed_from_u64(2048));
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut max_seen = game.board().max_value();
    let mut previous_max_tile = game.max_tile();

    for _ in 0..2000 {
        if !game.can_move() {
            break;
        }

        let direction = random_direction(&mut rng);

        let mut expected = *game.state();
        let slide = expected.shift(direction);

        let score_before = game.score();
        let changed = game.apply_move(direction);

        assert_eq!(changed, slide.changed);
        assert_eq!(game.score(), score_before + slide.score);

        for tile in game.board().tiles() {
            assert_eq!(Tile::new(tile.value()), Ok(tile));
        }

        max_seen = max_seen.max(game.board().max_value());
        assert!(game.max_tile() >= previous_max_tile);
        assert_eq!(game.max_tile(), max_seen);
        previous_max_tile = game.max_tile();
    }
}

#[test]
fn spawn_follows_only_changing_moves() {
    let mut game = seeded([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]], 1);

    assert!(!game.move_left());
    assert_eq!(game.empty_tile_count(), 12);

    assert!(game.move_down());
    assert_eq!(game.empty_tile_count(), 11);
}

#[test]
fn rollback_restores_exact_state() {
    let mut game = Game::new(ChaCha8Rng::seed_from_u64(77));
    let mut rng = ChaCha8Rng::seed_from_u64(78);

    for _ in 0..300 {
        if !game.can_move() {
            break;
        }

        let direction = random_direction(&mut rng);
        let board = *game.board();
        let score = game.score();

        game.apply_move(direction);
        assert!(game.rollback());
        assert_eq!(*game.board(), board);
        assert_eq!(game.score(), score);

        assert!(!game.rollback());
        assert_eq!(*game.board(), board);

        game.apply_move(direction);
    }
}

#[test]
fn rollback_keeps_max_tile() {
    let mut game = seeded([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]], 3);

    game.move_left();
    assert_eq!(game.max_tile(), 2048);

    game.rollback();
    assert_eq!(game.board().max_value(), 1024);
    assert_eq!(game.max_tile(), 2048);
}

#[test]
fn stuck_board_cannot_move() {
    let mut game = seeded([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 0);
    let before = *game.board();

    assert!(!game.can_move());
    for direction in Direction::ALL {
        assert!(!game.apply_move(direction));
    }
    assert_eq!(*game.board(), before);
    assert_eq!(game.score(), 0);
}

#[test]
fn evaluation_leaves_live_state_alone() {
    let mut game = seeded([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]], 12);
    let before = *game.state();

    let efficiencies = game.evaluate_moves();

    assert_eq!(*game.state(), before);
    assert!(!game.can_rollback());

    let ranks: Vec<_> = efficiencies
        .iter()
        .map(|e| (e.direction, e.empty_tiles, e.score))
        .collect();
    assert_eq!(
        ranks,
        [
            (Direction::Left, Some(13), 12),
            (Direction::Right, Some(13), 12),
            (Direction::Up, None, 0),
            (Direction::Down, Some(11), 0),
        ]
    );
}

#[test]
fn auto_move_prefers_merges_that_clear_cells() {
    let mut game = seeded([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]], 21);

    assert_eq!(game.auto_move(), Some(Direction::Left));
    assert_eq!(game.score(), 12);
    assert_eq!(game.board().tile(0, 0).value(), 4);
    assert_eq!(game.board().tile(0, 1).value(), 8);
    assert!(game.can_rollback());

    let mut vertical = seeded([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]], 21);

    assert_eq!(vertical.auto_move(), Some(Direction::Up));
    assert_eq!(vertical.board().tile(0, 0).value(), 4);
    assert_eq!(vertical.board().tile(1, 0).value(), 8);
}

#[test]
fn auto_play_is_reproducible() {
    let play = |seed| {
        let mut game = Game::new(ChaCha8Rng::seed_from_u64(seed));
        let moves: Vec<_> = (0..50).map_while(|_| game.auto_move()).collect();

        (moves, *game.state())
    };

    assert_eq!(play(5), play(5));
}

#[test]
fn change_detection_modes_agree_in_play() {
    let play = |change_detection| {
        let config = GameConfig { change_detection };
        let mut game = Game::with_config(ChaCha8Rng::seed_from_u64(8), config);

        for _ in 0..100 {
            game.auto_move();
        }

        *game.state()
    };

    let by_sum: GameState = play(ChangeDetection::TileSum);
    let by_layout: GameState = play(ChangeDetection::Layout);

    assert_eq!(by_sum, by_layout);
}

#[test]
fn random_move_uses_a_checkpoint() {
    let mut game = Game::new(ChaCha8Rng::seed_from_u64(6));
    let before = *game.board();

    game.random_move();
    assert!(game.can_rollback());

    game.rollback();
    assert_eq!(*game.board(), before);
}
