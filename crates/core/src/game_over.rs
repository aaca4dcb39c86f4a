//! Game-over detection - exhaustive search for any legal placement
//!
//! The board is small enough that every (piece, anchor) pair is tried; at most
//! 3 x 64 x 9 cell checks per evaluation.

use crate::board::Board;
use crate::shapes::Shape;
use crate::types::BOARD_SIZE;

/// First legal anchor for `shape` in row-major order, if any
pub fn find_placement(board: &Board, shape: &Shape) -> Option<(i8, i8)> {
    for row in 0..BOARD_SIZE as i8 {
        for col in 0..BOARD_SIZE as i8 {
            if board.can_place(shape, row, col) {
                return Some((row, col));
            }
        }
    }
    None
}

/// Check whether `shape` fits anywhere on the board
pub fn fits_anywhere(board: &Board, shape: &Shape) -> bool {
    find_placement(board, shape).is_some()
}

/// True iff no piece in `pieces` fits at any anchor.
///
/// An empty piece set is never game over, even though "no piece fits" holds
/// vacuously: with nothing left to place there is no failed placement. The
/// tray is refilled before this check runs, so the case does not arise in play.
pub fn is_game_over(board: &Board, pieces: &[Shape]) -> bool {
    !pieces.is_empty() && !pieces.iter().any(|piece| fits_anywhere(board, piece))
}
