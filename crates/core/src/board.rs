//! Board module - manages the game grid
//!
//! The board is an 8x8 grid where each cell is either empty or holds a color tag.
//! Uses a flat array for cache locality; boards are small `Copy`-free values that
//! are cloned on every placement so callers always see distinct before/after states.
//! Coordinates: (row, col) where both range 0..7, row 0 at the top.

use arrayvec::ArrayVec;
use tracing::warn;

use crate::shapes::Shape;
use crate::types::{Cell, BOARD_CELLS, BOARD_SIZE};

/// Position of a single cell as `(row, col)`
pub type CellPos = (u8, u8);

/// Result of a line-clear scan.
#[derive(Debug, Clone, PartialEq)]
pub struct LineClear {
    /// Board with every cell of a complete line emptied
    pub board: Board,
    /// Complete rows plus complete columns (an intersection counts twice)
    pub cleared_count: u32,
    /// Every emptied cell, each listed once, in row-major order
    pub cleared_cells: ArrayVec<CellPos, BOARD_CELLS>,
    /// Indices of complete rows, ascending
    pub rows: ArrayVec<u8, 8>,
    /// Indices of complete columns, ascending
    pub cols: ArrayVec<u8, 8>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.cleared_count == 0
    }
}

/// The game board - 8 rows x 8 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_SIZE as i8 || col < 0 || col >= BOARD_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_SIZE as usize) + (col as usize))
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_SIZE as usize {
            return false;
        }
        let start = row * BOARD_SIZE as usize;
        let end = start + BOARD_SIZE as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= BOARD_SIZE as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(col)
            .step_by(BOARD_SIZE as usize)
            .all(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Check whether `shape` fits with its anchor at (row, col).
    ///
    /// Every target cell must be on the board and empty; a single bad cell
    /// rejects the whole placement. Never mutates the board.
    pub fn can_place(&self, shape: &Shape, row: i8, col: i8) -> bool {
        shape
            .targets(row, col)
            .all(|target| matches!(target, Some((r, c)) if self.is_valid(r, c)))
    }

    /// Return a new board with `shape` painted at (row, col).
    ///
    /// The placement is re-validated first; an illegal placement leaves the
    /// returned board identical to `self`.
    pub fn apply_placement(&self, shape: &Shape, row: i8, col: i8) -> Board {
        let mut next = self.clone();
        if !self.can_place(shape, row, col) {
            warn!(
                shape = shape.kind.as_str(),
                row, col, "apply_placement called with an illegal placement; ignoring"
            );
            return next;
        }

        for (r, c) in shape.targets(row, col).flatten() {
            next.set(r, c, Some(shape.color));
        }
        next
    }

    /// Scan all rows and columns and empty every complete line.
    ///
    /// Rows and columns are detected against the same input board, so a cell
    /// at the intersection of a full row and a full column is cleared once but
    /// both lines are counted.
    pub fn clear_completed_lines(&self) -> LineClear {
        let size = BOARD_SIZE as usize;
        let mut rows = ArrayVec::new();
        let mut cols = ArrayVec::new();

        for r in 0..size {
            if self.is_row_full(r) {
                rows.push(r as u8);
            }
        }
        for c in 0..size {
            if self.is_col_full(c) {
                cols.push(c as u8);
            }
        }

        let mut board = self.clone();
        let mut cleared_cells = ArrayVec::new();
        if !rows.is_empty() || !cols.is_empty() {
            for r in 0..size {
                for c in 0..size {
                    if rows.contains(&(r as u8)) || cols.contains(&(c as u8)) {
                        board.cells[r * size + c] = None;
                        cleared_cells.push((r as u8, c as u8));
                    }
                }
            }
        }

        LineClear {
            board,
            cleared_count: (rows.len() + cols.len()) as u32,
            cleared_cells,
            rows,
            cols,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as a row-major grid of cells
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize]) {
        let size = BOARD_SIZE as usize;
        for (r, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * size..(r + 1) * size]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from row strings, for tests and benches.
    ///
    /// `#` (or any non-`.` character) marks an occupied cell; missing rows and
    /// columns stay empty.
    pub fn from_rows(rows: &[&str], color: crate::types::ColorTag) -> Self {
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate().take(BOARD_SIZE as usize) {
            for (c, ch) in line.chars().enumerate().take(BOARD_SIZE as usize) {
                if ch != '.' {
                    board.set(r as i8, c as i8, Some(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-function form of [`Board::can_place`].
pub fn can_place(board: &Board, shape: &Shape, row: i8, col: i8) -> bool {
    board.can_place(shape, row, col)
}
