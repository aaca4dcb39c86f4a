//! App shell tests - actions through a session with an in-memory store

use blockgrid::core::{Board, GameState, HighScoreStore, MemoryHighScoreStore, Session, Shape};
use blockgrid::types::{ColorTag, GameAction, GameStatus, ShapeKind, BATCH_SIZE};
use blockgrid::App;

fn shape(kind: ShapeKind) -> Shape {
    Shape::new(kind, ColorTag::Purple)
}

fn app(board: Board, pieces: &[Shape], store: MemoryHighScoreStore) -> App<MemoryHighScoreStore> {
    let state = GameState::from_position(21, board, pieces);
    App::new(Session::with_state(state, store), true)
}

#[test]
fn test_new_app_selects_first_piece_with_preview() {
    let app = App::new(Session::new(5, MemoryHighScoreStore::new()), true);
    assert_eq!(app.selected(), Some(0));
    assert_eq!(app.snapshot().pieces.len(), BATCH_SIZE);
    // Every catalog piece fits at the origin of an empty board.
    assert!(app.preview().unwrap().valid);
}

#[test]
fn test_place_at_cursor() {
    let mut app = app(
        Board::new(),
        &[shape(ShapeKind::Mono), shape(ShapeKind::T), shape(ShapeKind::S)],
        MemoryHighScoreStore::new(),
    );
    app.apply_action(GameAction::CursorDown);
    app.apply_action(GameAction::CursorRight);
    assert!(app.apply_action(GameAction::Place));

    let snap = app.snapshot();
    assert_eq!(snap.score, 10);
    assert_eq!(snap.board[1][1], Some(ColorTag::Purple));
    assert_eq!(snap.pieces.len(), 2);
    assert_eq!(snap.status, GameStatus::Playing);
}

#[test]
fn test_select_and_cycle_pieces() {
    let mut app = app(
        Board::new(),
        &[shape(ShapeKind::Mono), shape(ShapeKind::T), shape(ShapeKind::S)],
        MemoryHighScoreStore::new(),
    );
    assert!(app.apply_action(GameAction::SelectPiece(2)));
    assert!(!app.apply_action(GameAction::SelectPiece(2)));
    assert!(!app.apply_action(GameAction::SelectPiece(5)));

    assert!(app.apply_action(GameAction::NextPiece));
    assert_eq!(app.selected(), Some(0));
    assert!(app.apply_action(GameAction::PrevPiece));
    assert_eq!(app.selected(), Some(2));
    assert_eq!(app.preview().unwrap().cells.len(), 4);
}

#[test]
fn test_toggle_preview() {
    let mut app = app(Board::new(), &[shape(ShapeKind::Mono)], MemoryHighScoreStore::new());
    assert!(app.show_preview());
    app.apply_action(GameAction::TogglePreview);
    assert!(!app.show_preview());
    assert!(app.hud().preview.is_some());
    assert!(!app.hud().show_preview);
}

#[test]
fn test_game_over_persists_new_best() {
    let rows = [
        "#.#.#.#.", ".#.#.#.#", "#.#.#.#.", ".#.#.#.#", "#.#.#.#.", ".#.#.#.#", "#.#.#.#.",
        ".#.#.#.#",
    ];
    let board = Board::from_rows(&rows, ColorTag::Red);
    let mut app = app(
        board,
        &[shape(ShapeKind::Mono), shape(ShapeKind::Square3)],
        MemoryHighScoreStore::with_value(5),
    );
    assert_eq!(app.snapshot().high_score, 5);

    app.apply_action(GameAction::CursorRight);
    assert!(app.apply_action(GameAction::Place));

    assert_eq!(app.snapshot().status, GameStatus::GameOver);
    assert_eq!(app.snapshot().score, 10);
    assert_eq!(app.snapshot().high_score, 10);
    assert_eq!(app.session().store().load_high_score(), Some(10));
    assert_eq!(app.toast(), Some("NEW BEST 10"));

    // Further placements are rejected and change nothing.
    let before = app.snapshot().clone();
    app.apply_action(GameAction::Place);
    assert_eq!(app.snapshot(), &before);
    assert_eq!(app.toast(), Some("GAME OVER"));
}

#[test]
fn test_restart_keeps_best_and_clear_resets_it() {
    let mut app = app(
        Board::new(),
        &[shape(ShapeKind::Mono)],
        MemoryHighScoreStore::with_value(300),
    );
    app.apply_action(GameAction::Place);
    assert_eq!(app.snapshot().score, 10);

    app.apply_action(GameAction::Restart);
    assert_eq!(app.snapshot().score, 0);
    assert_eq!(app.snapshot().high_score, 300);
    assert_eq!(app.snapshot().pieces.len(), BATCH_SIZE);
    assert_eq!(app.selected(), Some(0));

    app.apply_action(GameAction::ClearHighScore);
    assert_eq!(app.snapshot().high_score, 0);
    assert_eq!(app.session().store().load_high_score(), None);
}
