//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework state. It maps
//! `crossterm` key events into [`crate::types::GameAction`]; cursor and
//! selection bookkeeping live in the application shell.

pub mod map;

pub use blockgrid_types as types;

pub use map::{handle_key_event, should_quit};
