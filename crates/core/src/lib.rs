//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and turn logic.
//! It has **no dependencies** on UI, terminals or storage formats, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is a pure function or a small state transition
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid with placement validation, painting and line clearing
//! - [`shapes`]: The fixed polyomino catalog
//! - [`rng`]: Seeded batch generation
//! - [`scoring`]: Placement points, line points and the clear streak
//! - [`game_over`]: Exhaustive "does anything still fit" search
//! - [`preview`]: Read-only hover projection of a hypothetical placement
//! - [`game_state`]: One game: tray, score, streak, status
//! - [`session`]: A game bound to its high-score store
//! - [`high_score`]: The persistence boundary
//!
//! # Game Rules
//!
//! - Three pieces are offered at a time; the tray is refilled only once all
//!   three have been placed.
//! - A piece fits when every block lands on an empty cell of the board.
//! - After each placement, every full row and every full column is cleared.
//! - The game ends when no offered piece fits anywhere.
//!
//! # Example
//!
//! ```
//! use blockgrid_core::GameState;
//! use blockgrid_core::types::GameStatus;
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.pieces().len(), 3);
//!
//! // The empty board accepts any catalog piece at the top-left corner.
//! let event = game.place(0, 0, 0).unwrap();
//! assert!(event.score.total >= 10);
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

pub mod board;
pub mod game_over;
pub mod game_state;
pub mod high_score;
pub mod preview;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockgrid_types as types;

// Re-export commonly used types for convenience
pub use board::{can_place, Board, CellPos, LineClear};
pub use game_over::{find_placement, fits_anywhere, is_game_over};
pub use game_state::{GameState, PlaceError, TurnEvent};
pub use high_score::{HighScoreStore, MemoryHighScoreStore};
pub use preview::PlacementPreview;
pub use rng::{ShapeGenerator, SimpleRng};
pub use scoring::{compute_turn_score, TurnScore};
pub use session::Session;
pub use shapes::{get_shape, CellOffset, Shape};
pub use snapshot::GameSnapshot;
