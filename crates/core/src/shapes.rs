//! Shapes module - the fixed polyomino catalog
//!
//! Every template is a list of `(row, col)` offsets from the anchor cell.
//! Offsets are normalized: the smallest row and the smallest column in each
//! template are both 0, so an anchor is always the top-left corner of the
//! shape's bounding box.

use crate::types::{ColorTag, ShapeKind};

/// Offset of a single block relative to the anchor, as `(row, col)`
pub type CellOffset = (i8, i8);

const MONO: [CellOffset; 1] = [(0, 0)];
const LINE2_H: [CellOffset; 2] = [(0, 0), (0, 1)];
const LINE2_V: [CellOffset; 2] = [(0, 0), (1, 0)];
const LINE3_H: [CellOffset; 3] = [(0, 0), (0, 1), (0, 2)];
const LINE3_V: [CellOffset; 3] = [(0, 0), (1, 0), (2, 0)];
const LINE4_H: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (0, 3)];
const LINE4_V: [CellOffset; 4] = [(0, 0), (1, 0), (2, 0), (3, 0)];
const LINE5_H: [CellOffset; 5] = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
const LINE5_V: [CellOffset; 5] = [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)];
const SQUARE2: [CellOffset; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const SQUARE3: [CellOffset; 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];
const RECT2X3: [CellOffset; 6] = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)];
const RECT3X2: [CellOffset; 6] = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)];
const CORNER_NE: [CellOffset; 3] = [(0, 0), (1, 0), (1, 1)];
const CORNER_NW: [CellOffset; 3] = [(0, 1), (1, 0), (1, 1)];
const CORNER_SE: [CellOffset; 3] = [(0, 0), (0, 1), (1, 0)];
const CORNER_SW: [CellOffset; 3] = [(0, 0), (0, 1), (1, 1)];
const L: [CellOffset; 4] = [(0, 0), (1, 0), (2, 0), (2, 1)];
const J: [CellOffset; 4] = [(0, 1), (1, 1), (2, 0), (2, 1)];
const L_FLAT: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (1, 0)];
const J_FLAT: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (1, 2)];
const T: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (1, 1)];
const T_UP: [CellOffset; 4] = [(0, 1), (1, 0), (1, 1), (1, 2)];
const S: [CellOffset; 4] = [(0, 1), (0, 2), (1, 0), (1, 1)];
const Z: [CellOffset; 4] = [(0, 0), (0, 1), (1, 1), (1, 2)];

/// Get the block offsets for a shape kind
pub fn get_shape(kind: ShapeKind) -> &'static [CellOffset] {
    match kind {
        ShapeKind::Mono => &MONO,
        ShapeKind::Line2H => &LINE2_H,
        ShapeKind::Line2V => &LINE2_V,
        ShapeKind::Line3H => &LINE3_H,
        ShapeKind::Line3V => &LINE3_V,
        ShapeKind::Line4H => &LINE4_H,
        ShapeKind::Line4V => &LINE4_V,
        ShapeKind::Line5H => &LINE5_H,
        ShapeKind::Line5V => &LINE5_V,
        ShapeKind::Square2 => &SQUARE2,
        ShapeKind::Square3 => &SQUARE3,
        ShapeKind::Rect2x3 => &RECT2X3,
        ShapeKind::Rect3x2 => &RECT3X2,
        ShapeKind::CornerNE => &CORNER_NE,
        ShapeKind::CornerNW => &CORNER_NW,
        ShapeKind::CornerSE => &CORNER_SE,
        ShapeKind::CornerSW => &CORNER_SW,
        ShapeKind::L => &L,
        ShapeKind::J => &J,
        ShapeKind::LFlat => &L_FLAT,
        ShapeKind::JFlat => &J_FLAT,
        ShapeKind::T => &T,
        ShapeKind::TUp => &T_UP,
        ShapeKind::S => &S,
        ShapeKind::Z => &Z,
    }
}

/// A placeable piece: a catalog template plus the color it will paint.
///
/// Shapes are plain `Copy` values; the catalog they point into is `'static`
/// and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: ColorTag,
}

impl Shape {
    pub fn new(kind: ShapeKind, color: ColorTag) -> Self {
        Self { kind, color }
    }

    /// Block offsets relative to the anchor
    pub fn cells(&self) -> &'static [CellOffset] {
        get_shape(self.kind)
    }

    /// Board coordinates of every block with the anchor at (row, col).
    ///
    /// A block whose coordinate does not fit in `i8` yields `None`; callers
    /// treat it as off the board.
    pub fn targets(&self, row: i8, col: i8) -> impl Iterator<Item = Option<(i8, i8)>> {
        self.cells()
            .iter()
            .map(move |&(dr, dc)| Some((row.checked_add(dr)?, col.checked_add(dc)?)))
    }

    /// Number of blocks in the shape
    pub fn block_count(&self) -> u32 {
        self.cells().len() as u32
    }

    /// Bounding box as `(rows, cols)`
    pub fn extent(&self) -> (u8, u8) {
        let mut rows = 0i8;
        let mut cols = 0i8;
        for &(dr, dc) in self.cells() {
            rows = rows.max(dr + 1);
            cols = cols.max(dc + 1);
        }
        (rows as u8, cols as u8)
    }
}
