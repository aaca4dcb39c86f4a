//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 8x8 grid addressed as `(row, col)`:
//!
//! - **Rows**: 0-7, top to bottom
//! - **Columns**: 0-7, left to right
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_BLOCK` | 10 | Awarded per placed block, always |
//! | `LINE_BASE_POINTS` | 100 | Base points per cleared line |
//! | `STREAK_STEP_POINTS` | 10 | Per-line bonus for each streak step beyond the first |
//!
//! # Presentation Timing
//!
//! Timing values are in milliseconds and only drive cosmetic effects:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | UI loop interval (~60 FPS) |
//! | `CLEAR_FLASH_MS` | 240 | Flash on cells removed by a line clear |
//! | `TOAST_MS` | 1800 | Auto-dismiss delay for HUD messages |
//!
//! # Examples
//!
//! ```
//! use blockgrid_types::{ColorTag, GameAction, ShapeKind, BOARD_SIZE};
//!
//! assert_eq!(BOARD_SIZE, 8);
//! assert_eq!(ShapeKind::Square2.as_str(), "square2");
//! assert_eq!(ColorTag::from_str("cyan"), Some(ColorTag::Cyan));
//! assert_eq!(GameAction::from_str("place"), Some(GameAction::Place));
//! ```

/// Board side length in cells (8 rows x 8 columns)
pub const BOARD_SIZE: u8 = 8;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of pieces offered to the player at once
pub const BATCH_SIZE: usize = 3;

/// Largest number of blocks in any catalog shape (3x3 square)
pub const MAX_SHAPE_BLOCKS: usize = 9;

/// Points awarded per block placed, regardless of clears
pub const POINTS_PER_BLOCK: u32 = 10;

/// Base points per cleared line
pub const LINE_BASE_POINTS: u32 = 100;

/// Per-line bonus added for every streak step after the first
pub const STREAK_STEP_POINTS: u32 = 10;

/// UI loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long cells removed by a line clear keep flashing
pub const CLEAR_FLASH_MS: u32 = 240;

/// How long a HUD message stays visible
pub const TOAST_MS: u32 = 1800;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_constants_match_rules() {
        assert_eq!(POINTS_PER_BLOCK, 10);
        assert_eq!(LINE_BASE_POINTS, 100);
        assert_eq!(STREAK_STEP_POINTS, 10);
        assert_eq!(BATCH_SIZE, 3);
        assert_eq!(BOARD_CELLS, 64);
    }

    #[test]
    fn shape_kind_roundtrips_through_str() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn color_tag_roundtrips_through_str() {
        for color in ColorTag::PALETTE {
            assert_eq!(ColorTag::from_str(color.as_str()), Some(color));
        }
        assert_eq!(ColorTag::from_str("RED"), Some(ColorTag::Red));
        assert_eq!(ColorTag::from_str("mauve"), None);
    }
}

/// Visual color tag stored in occupied cells.
///
/// Colors are metadata only: placement, clearing and scoring never look at
/// them. A shape's color is drawn independently of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl ColorTag {
    /// The fixed palette pieces are colored from
    pub const PALETTE: [ColorTag; 7] = [
        ColorTag::Red,
        ColorTag::Orange,
        ColorTag::Yellow,
        ColorTag::Green,
        ColorTag::Cyan,
        ColorTag::Blue,
        ColorTag::Purple,
    ];

    /// Parse color tag from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(ColorTag::Red),
            "orange" => Some(ColorTag::Orange),
            "yellow" => Some(ColorTag::Yellow),
            "green" => Some(ColorTag::Green),
            "cyan" => Some(ColorTag::Cyan),
            "blue" => Some(ColorTag::Blue),
            "purple" => Some(ColorTag::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Orange => "orange",
            ColorTag::Yellow => "yellow",
            ColorTag::Green => "green",
            ColorTag::Cyan => "cyan",
            ColorTag::Blue => "blue",
            ColorTag::Purple => "purple",
        }
    }
}

/// Catalog of polyomino templates.
///
/// There is no rotation, so every orientation that the game offers is its own
/// catalog entry. Offsets for each kind live in `blockgrid_core::shapes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Single block
    Mono,
    /// 1x2 horizontal bar
    Line2H,
    /// 2x1 vertical bar
    Line2V,
    Line3H,
    Line3V,
    Line4H,
    Line4V,
    Line5H,
    Line5V,
    /// 2x2 square
    Square2,
    /// 3x3 square
    Square3,
    /// 2 rows x 3 columns
    Rect2x3,
    /// 3 rows x 2 columns
    Rect3x2,
    /// 3-block corners, named by the missing quadrant of their 2x2 box
    CornerNE,
    CornerNW,
    CornerSE,
    CornerSW,
    /// Vertical bar with a foot to the right
    L,
    /// Vertical bar with a foot to the left
    J,
    /// Horizontal bar with a foot under the left end
    LFlat,
    /// Horizontal bar with a foot under the right end
    JFlat,
    /// Bar on top, stem below the middle
    T,
    /// Stem on top, bar below
    TUp,
    S,
    Z,
}

impl ShapeKind {
    /// Every catalog entry, in catalog order
    pub const ALL: [ShapeKind; 25] = [
        ShapeKind::Mono,
        ShapeKind::Line2H,
        ShapeKind::Line2V,
        ShapeKind::Line3H,
        ShapeKind::Line3V,
        ShapeKind::Line4H,
        ShapeKind::Line4V,
        ShapeKind::Line5H,
        ShapeKind::Line5V,
        ShapeKind::Square2,
        ShapeKind::Square3,
        ShapeKind::Rect2x3,
        ShapeKind::Rect3x2,
        ShapeKind::CornerNE,
        ShapeKind::CornerNW,
        ShapeKind::CornerSE,
        ShapeKind::CornerSW,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::LFlat,
        ShapeKind::JFlat,
        ShapeKind::T,
        ShapeKind::TUp,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.into_iter().find(|k| k.as_str() == lower)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Mono => "mono",
            ShapeKind::Line2H => "line2h",
            ShapeKind::Line2V => "line2v",
            ShapeKind::Line3H => "line3h",
            ShapeKind::Line3V => "line3v",
            ShapeKind::Line4H => "line4h",
            ShapeKind::Line4V => "line4v",
            ShapeKind::Line5H => "line5h",
            ShapeKind::Line5V => "line5v",
            ShapeKind::Square2 => "square2",
            ShapeKind::Square3 => "square3",
            ShapeKind::Rect2x3 => "rect2x3",
            ShapeKind::Rect3x2 => "rect3x2",
            ShapeKind::CornerNE => "cornerne",
            ShapeKind::CornerNW => "cornernw",
            ShapeKind::CornerSE => "cornerse",
            ShapeKind::CornerSW => "cornersw",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::LFlat => "lflat",
            ShapeKind::JFlat => "jflat",
            ShapeKind::T => "t",
            ShapeKind::TUp => "tup",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ColorTag)`: Cell occupied by a block of the given color
pub type Cell = Option<ColorTag>;

/// Lifecycle of a single game.
///
/// `Playing -> GameOver` when no available piece fits anywhere;
/// `GameOver -> Playing` only through an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Player actions understood by the application shell
///
/// Cursor and selection actions only touch presentation state; `Place`,
/// `Restart` and `ClearHighScore` reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one row up
    CursorUp,
    /// Move the board cursor one row down
    CursorDown,
    /// Move the board cursor one column left
    CursorLeft,
    /// Move the board cursor one column right
    CursorRight,
    /// Select the tray slot with this index
    SelectPiece(u8),
    /// Select the next live tray slot
    NextPiece,
    /// Select the previous live tray slot
    PrevPiece,
    /// Place the selected piece with its anchor at the cursor
    Place,
    /// Start a new game
    Restart,
    /// Toggle the hover preview setting
    TogglePreview,
    /// Forget the persisted high score
    ClearHighScore,
}

impl GameAction {
    /// Parse action from string
    ///
    /// `select1`..`select3` map to tray slots 0..2.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "select1" => Some(GameAction::SelectPiece(0)),
            "select2" => Some(GameAction::SelectPiece(1)),
            "select3" => Some(GameAction::SelectPiece(2)),
            "nextpiece" => Some(GameAction::NextPiece),
            "prevpiece" => Some(GameAction::PrevPiece),
            "place" => Some(GameAction::Place),
            "restart" => Some(GameAction::Restart),
            "togglepreview" => Some(GameAction::TogglePreview),
            "clearhighscore" => Some(GameAction::ClearHighScore),
            _ => None,
        }
    }
}
