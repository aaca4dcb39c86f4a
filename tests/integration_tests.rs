//! Integration tests - whole turns through the public facade

use blockgrid::core::{
    compute_turn_score, is_game_over, Board, GameState, PlaceError, Shape, ShapeGenerator,
};
use blockgrid::types::{ColorTag, GameStatus, ShapeKind, BATCH_SIZE};

fn shape(kind: ShapeKind) -> Shape {
    Shape::new(kind, ColorTag::Red)
}

#[test]
fn test_new_game_initial_state() {
    let game = GameState::new(2024);
    assert!(game.board().is_empty());
    assert_eq!(game.score(), 0);
    assert_eq!(game.streak(), 0);
    assert_eq!(game.pieces().len(), BATCH_SIZE);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_place_single_block() {
    let board = Board::new();
    let mut game = GameState::from_position(
        1,
        board,
        &[shape(ShapeKind::Mono), shape(ShapeKind::T), shape(ShapeKind::L)],
    );

    let event = game.place(0, 0, 0).unwrap();
    assert_eq!(event.score.total, 10);
    assert_eq!(game.score(), 10);
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.pieces().len(), 2);
    assert_eq!(game.board().get(0, 0), Some(Some(ColorTag::Red)));
}

#[test]
fn test_whole_batch_refills_after_third_placement() {
    let mut game = GameState::new(99);
    for expected_left in [2, 1] {
        let shape = game.pieces()[0];
        let (row, col) = blockgrid::core::find_placement(game.board(), &shape).unwrap();
        let event = game.place(0, row, col).unwrap();
        assert!(!event.replenished);
        assert_eq!(game.pieces().len(), expected_left);
    }
    let shape = game.pieces()[0];
    let (row, col) = blockgrid::core::find_placement(game.board(), &shape).unwrap();
    let event = game.place(0, row, col).unwrap();
    assert!(event.replenished);
    assert_eq!(game.pieces().len(), BATCH_SIZE);
}

#[test]
fn test_rejected_placements_change_nothing() {
    let board = Board::from_rows(&["#"], ColorTag::Blue);
    let mut game = GameState::from_position(5, board, &[shape(ShapeKind::Square2)]);
    let before = game.snapshot();

    assert_eq!(game.place(0, 0, 0), Err(PlaceError::Blocked));
    assert_eq!(game.place(0, 7, 0), Err(PlaceError::OutOfBounds));
    assert_eq!(game.place(1, 2, 2), Err(PlaceError::NoSuchPiece));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_streak_builds_and_resets() {
    // Two rows that each need one block at the right edge.
    let board = Board::from_rows(&["#######.", "#######."], ColorTag::Blue);
    let mut game = GameState::from_position(
        3,
        board,
        &[
            shape(ShapeKind::Mono),
            shape(ShapeKind::Mono),
            shape(ShapeKind::Mono),
        ],
    );

    let first = game.place(0, 0, 7).unwrap();
    assert_eq!(first.score.total, 10 + 100);
    assert_eq!(game.streak(), 1);

    let second = game.place(0, 1, 7).unwrap();
    assert_eq!(second.score.total, 10 + 110);
    assert_eq!(game.streak(), 2);

    let third = game.place(0, 5, 5).unwrap();
    assert_eq!(third.score.total, 10);
    assert_eq!(game.streak(), 0);
    assert_eq!(game.score(), 240);
}

#[test]
fn test_scoring_examples() {
    let s = compute_turn_score(4, 1, 2);
    assert_eq!(s.placement_points, 40);
    assert_eq!(s.line_points, 120);
    assert_eq!(s.total, 160);
    assert_eq!(s.new_streak, 3);

    let s = compute_turn_score(5, 0, 7);
    assert_eq!(s.total, 50);
    assert_eq!(s.new_streak, 0);

    let s = compute_turn_score(3, 2, 0);
    assert_eq!(s.line_points, 200);
    assert_eq!(s.new_streak, 1);
}

#[test]
fn test_game_over_exhaustiveness() {
    let empty = Board::new();
    let full = Board::from_rows(&["########"; 8], ColorTag::Red);

    for kind in ShapeKind::ALL {
        assert!(!is_game_over(&empty, &[shape(kind)]), "{kind:?} fits an empty board");
        assert!(is_game_over(&full, &[shape(kind)]), "{kind:?} cannot fit a full board");
    }
    assert!(!is_game_over(&full, &[]));
}

#[test]
fn test_game_over_with_holes() {
    // Only isolated single holes remain.
    let rows = [
        "#.######", "########", "######.#", "########", "########", "########", "########",
        "########",
    ];
    let board = Board::from_rows(&rows, ColorTag::Red);
    assert!(is_game_over(&board, &[shape(ShapeKind::Line2H), shape(ShapeKind::Square2)]));
    assert!(!is_game_over(&board, &[shape(ShapeKind::Line2H), shape(ShapeKind::Mono)]));
}

#[test]
fn test_game_ends_and_rejects_further_placements() {
    let rows = [
        "#.#.#.#.", ".#.#.#.#", "#.#.#.#.", ".#.#.#.#", "#.#.#.#.", ".#.#.#.#", "#.#.#.#.",
        ".#.#.#.#",
    ];
    let board = Board::from_rows(&rows, ColorTag::Red);
    let mut game = GameState::from_position(
        11,
        board,
        &[shape(ShapeKind::Mono), shape(ShapeKind::Square3)],
    );

    let event = game.place(0, 0, 1).unwrap();
    assert_eq!(event.cleared_count, 0);
    assert!(event.game_over);
    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.score(), 10);
    assert_eq!(game.place(0, 1, 1), Err(PlaceError::NotPlaying));
}

#[test]
fn test_generator_is_seeded() {
    let mut a = ShapeGenerator::new(77);
    let mut b = ShapeGenerator::new(77);
    let batch = a.generate_batch(BATCH_SIZE);
    assert_eq!(batch.len(), BATCH_SIZE);
    assert_eq!(batch, b.generate_batch(BATCH_SIZE));
    assert!(a.generate_batch(0).is_empty());
}

#[test]
fn test_reset_starts_fresh_game() {
    let mut game = GameState::new(8);
    let shape = game.pieces()[0];
    game.place(0, 0, 0).unwrap();
    assert!(game.score() >= shape.block_count() * 10);

    let episode = game.episode_id();
    game.reset();
    assert!(game.board().is_empty());
    assert_eq!(game.score(), 0);
    assert_eq!(game.pieces().len(), BATCH_SIZE);
    assert_eq!(game.episode_id(), episode + 1);
}
