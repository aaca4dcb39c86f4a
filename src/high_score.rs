//! JSON file implementation of the high-score store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::HighScoreStore;

/// On-disk record: `{"high_score": 1234}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

/// Stores the high score as a small JSON document.
///
/// Failures never reach the game: unreadable files load as `None`, and
/// failed writes are logged and dropped.
#[derive(Debug, Clone)]
pub struct JsonFileHighScoreStore {
    path: PathBuf,
}

impl JsonFileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, distinguishing "no file" (`Ok(None)`) from errors.
    pub fn read(&self) -> Result<Option<HighScoreRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let record = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(record))
    }

    pub fn write(&self, record: HighScoreRecord) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string(&record)?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))
    }

    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => {
                Err(e).with_context(|| format!("removing {}", self.path.display()))
            }
            _ => Ok(()),
        }
    }
}

impl HighScoreStore for JsonFileHighScoreStore {
    fn load_high_score(&self) -> Option<u32> {
        match self.read() {
            Ok(record) => record.map(|r| r.high_score),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "ignoring unreadable high score");
                None
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        match self.write(HighScoreRecord { high_score: score }) {
            Ok(()) => debug!(score, path = %self.path.display(), "high score saved"),
            Err(e) => warn!(error = %format!("{e:#}"), "failed to save high score"),
        }
    }

    fn clear_high_score(&mut self) {
        if let Err(e) = self.remove() {
            warn!(error = %format!("{e:#}"), "failed to clear high score");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("blockgrid-unit-{}-{}", std::process::id(), name))
            .join("best.json")
    }

    #[test]
    fn test_missing_file_loads_none() {
        let store = JsonFileHighScoreStore::new(temp_path("missing"));
        assert_eq!(store.load_high_score(), None);
    }

    #[test]
    fn test_record_format() {
        let json = serde_json::to_string(&HighScoreRecord { high_score: 1234 }).unwrap();
        assert_eq!(json, r#"{"high_score":1234}"#);
    }

    #[test]
    fn test_corrupt_file_loads_none() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = JsonFileHighScoreStore::new(&path);
        assert!(store.read().is_err());
        assert_eq!(store.load_high_score(), None);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
