//! Terminal rendering for the block grid.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and the renderer flushes framebuffers to the terminal.
//! No widget or layout library is involved.
//!
//! - `GameView` is pure and unit-testable
//! - `TerminalRenderer` owns all terminal I/O
//! - Board cells are drawn 2 columns wide to keep them roughly square

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use blockgrid_core as core;
pub use blockgrid_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, AnchorY, GameView, HudView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
