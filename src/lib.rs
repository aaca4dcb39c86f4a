//! Blockgrid (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockgrid::{core,input,term,types}`
//! and hosts the application shell: configuration, the on-disk high-score
//! store and the interactive `App`.

pub use blockgrid_core as core;
pub use blockgrid_input as input;
pub use blockgrid_term as term;
pub use blockgrid_types as types;

pub mod app;
pub mod config;
pub mod high_score;

pub use app::App;
pub use config::AppConfig;
pub use high_score::JsonFileHighScoreStore;
