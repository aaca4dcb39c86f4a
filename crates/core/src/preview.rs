//! Hover preview - a read-only projection of a hypothetical placement
//!
//! Computed from the authoritative board each time the pointer or selection
//! changes. Nothing here is ever written back to the board.

use arrayvec::ArrayVec;

use crate::board::{Board, CellPos};
use crate::shapes::Shape;
use crate::types::MAX_SHAPE_BLOCKS;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementPreview {
    /// Target cells that fall on the board (off-board cells are dropped)
    pub cells: ArrayVec<CellPos, MAX_SHAPE_BLOCKS>,
    /// Whether the placement is legal
    pub valid: bool,
    /// Rows the placement would complete (empty when invalid)
    pub rows: ArrayVec<u8, 8>,
    /// Columns the placement would complete (empty when invalid)
    pub cols: ArrayVec<u8, 8>,
}

impl PlacementPreview {
    pub fn compute(board: &Board, shape: &Shape, row: i8, col: i8) -> Self {
        let mut cells = ArrayVec::new();
        for (r, c) in shape.targets(row, col).flatten() {
            if !board.is_out_of_bounds(r, c) {
                cells.push((r as u8, c as u8));
            }
        }

        let valid = board.can_place(shape, row, col);
        let (rows, cols) = if valid {
            let clear = board.apply_placement(shape, row, col).clear_completed_lines();
            (clear.rows, clear.cols)
        } else {
            (ArrayVec::new(), ArrayVec::new())
        };

        Self {
            cells,
            valid,
            rows,
            cols,
        }
    }

    /// Number of lines the placement would clear
    pub fn line_count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    /// Whether (row, col) lies on a line this placement would clear
    pub fn would_clear(&self, row: u8, col: u8) -> bool {
        self.rows.contains(&row) || self.cols.contains(&col)
    }
}
