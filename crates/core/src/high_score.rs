//! High-score persistence boundary.
//!
//! The engine never touches storage directly: it reads the best score once at
//! session start and writes it back when a game ends with a new best.

/// Durable storage for a single integer high score.
///
/// Implementations own their failure handling; a store that cannot read
/// reports `None` and a store that cannot write drops the value.
pub trait HighScoreStore {
    fn load_high_score(&self) -> Option<u32>;
    fn save_high_score(&mut self, score: u32);
    fn clear_high_score(&mut self);
}

/// In-process store, for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScoreStore {
    value: Option<u32>,
    writes: u32,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(score: u32) -> Self {
        Self {
            value: Some(score),
            writes: 0,
        }
    }

    /// Number of save/clear calls received
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_high_score(&self) -> Option<u32> {
        self.value
    }

    fn save_high_score(&mut self, score: u32) {
        self.value = Some(score);
        self.writes += 1;
    }

    fn clear_high_score(&mut self) {
        self.value = None;
        self.writes += 1;
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load_high_score(&self) -> Option<u32> {
        (**self).load_high_score()
    }

    fn save_high_score(&mut self, score: u32) {
        (**self).save_high_score(score)
    }

    fn clear_high_score(&mut self) {
        (**self).clear_high_score()
    }
}
