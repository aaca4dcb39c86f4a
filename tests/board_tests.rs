//! Board tests - placement validation, painting and line clearing

use blockgrid::core::{can_place, Board, Shape};
use blockgrid::types::{ColorTag, ShapeKind, BOARD_SIZE};

fn shape(kind: ShapeKind) -> Shape {
    Shape::new(kind, ColorTag::Cyan)
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);
    for r in 0..BOARD_SIZE as i8 {
        for c in 0..BOARD_SIZE as i8 {
            assert_eq!(board.get(r, c), Some(None), "cell ({r}, {c}) should be empty");
        }
    }
    assert!(board.is_empty());
}

#[test]
fn test_board_get_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_SIZE as i8, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE as i8), None);
    assert!(!board.set(8, 8, Some(ColorTag::Red)));
}

#[test]
fn test_far_off_board_anchor_is_rejected() {
    let board = Board::new();
    let s = shape(ShapeKind::S);

    assert!(!board.can_place(&s, 0, i8::MAX));
    assert!(!board.can_place(&s, i8::MAX, 0));
    assert!(!can_place(&board, &s, i8::MIN, i8::MIN));
    assert_eq!(board.apply_placement(&s, 0, i8::MAX), board);
}

#[test]
fn test_placement_must_stay_on_board() {
    let board = Board::new();
    let line = shape(ShapeKind::Line5H);

    assert!(board.can_place(&line, 0, 3));
    assert!(!board.can_place(&line, 0, 4));
    assert!(!board.can_place(&line, -1, 0));
    assert!(!can_place(&board, &shape(ShapeKind::Line5V), 4, 0));
}

#[test]
fn test_placement_must_not_overlap() {
    let board = Board::from_rows(&["..", ".#"], ColorTag::Red);
    let square = shape(ShapeKind::Square2);

    assert!(!board.can_place(&square, 0, 0));
    assert!(board.can_place(&square, 2, 2));
    assert!(!board.can_place(&shape(ShapeKind::CornerNW), 0, 0));
    // CornerSE leaves its bottom-right cell open and wraps the obstacle.
    assert!(board.can_place(&shape(ShapeKind::CornerSE), 0, 0));
}

#[test]
fn test_validation_is_idempotent() {
    let board = Board::from_rows(&["###....."], ColorTag::Blue);
    let t = shape(ShapeKind::T);
    let first = board.can_place(&t, 0, 3);
    for _ in 0..10 {
        assert_eq!(board.can_place(&t, 0, 3), first);
    }
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn test_apply_placement_paints_color() {
    let board = Board::new();
    let piece = Shape::new(ShapeKind::Line3V, ColorTag::Purple);
    let next = board.apply_placement(&piece, 2, 5);

    assert!(board.is_empty(), "source board must not change");
    assert_eq!(next.filled_count(), 3);
    for r in 2..5 {
        assert_eq!(next.get(r, 5), Some(Some(ColorTag::Purple)));
    }
}

#[test]
fn test_invalid_apply_is_noop() {
    let board = Board::from_rows(&["#"], ColorTag::Red);
    let next = board.apply_placement(&shape(ShapeKind::Mono), 0, 0);
    assert_eq!(next, board);
    let next = board.apply_placement(&shape(ShapeKind::Line2H), 7, 7);
    assert_eq!(next, board);
}

#[test]
fn test_clear_single_row() {
    let board = Board::from_rows(&["########", "#......."], ColorTag::Green);
    let clear = board.clear_completed_lines();

    assert_eq!(clear.cleared_count, 1);
    assert_eq!(clear.rows.as_slice(), &[0]);
    assert!(clear.cols.is_empty());
    assert_eq!(clear.cleared_cells.len(), 8);
    for c in 0..8 {
        assert_eq!(clear.board.get(0, c), Some(None));
    }
    // Nothing shifts: row 1 keeps its block in place.
    assert_eq!(clear.board.get(1, 0), Some(Some(ColorTag::Green)));
    assert_eq!(clear.board.filled_count(), 1);
}

#[test]
fn test_clear_row_and_column_dedups_intersection() {
    let rows = [
        "########", "#.......", "#.......", "#.......", "#.......", "#.......", "#.......",
        "#.......",
    ];
    let board = Board::from_rows(&rows, ColorTag::Yellow);
    let clear = board.clear_completed_lines();

    assert_eq!(clear.cleared_count, 2);
    assert_eq!(clear.cleared_cells.len(), 15);
    assert_eq!(clear.cleared_cells.iter().filter(|&&p| p == (0, 0)).count(), 1);
    assert!(clear.board.is_empty());
}

#[test]
fn test_clear_on_board_without_full_lines() {
    let board = Board::from_rows(&["#######.", ".#"], ColorTag::Orange);
    let clear = board.clear_completed_lines();
    assert!(clear.is_empty());
    assert_eq!(clear.cleared_count, 0);
    assert_eq!(clear.board, board);
}

#[test]
fn test_full_board_clears_everything() {
    let rows = ["########"; 8];
    let board = Board::from_rows(&rows, ColorTag::Red);
    let clear = board.clear_completed_lines();

    assert_eq!(clear.cleared_count, 16);
    assert_eq!(clear.cleared_cells.len(), 64);
    assert!(clear.board.is_empty());
}
