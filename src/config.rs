//! Runtime configuration read from `BLOCKGRID_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::Level;

const HIGH_SCORE_FILE: &str = "high_score.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Seed for the shape generator
    pub seed: u32,
    pub high_score_path: PathBuf,
    /// Log file; logging is disabled when unset
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
    /// Whether the hover preview starts enabled
    pub show_preview: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("BLOCKGRID_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);

        let high_score_path = var("BLOCKGRID_HIGH_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_high_score_path(var("HOME")));

        let log_path = var("BLOCKGRID_LOG_PATH").map(PathBuf::from);

        let log_level = var("BLOCKGRID_LOG_LEVEL")
            .and_then(|s| Level::from_str(&s).ok())
            .unwrap_or(Level::INFO);

        let show_preview = var("BLOCKGRID_PREVIEW")
            .map(|s| parse_flag(&s))
            .unwrap_or(true);

        Self {
            seed,
            high_score_path,
            log_path,
            log_level,
            show_preview,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_high_score_path(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => PathBuf::from(home).join(".blockgrid").join(HIGH_SCORE_FILE),
        None => PathBuf::from(".blockgrid_high_score.json"),
    }
}

fn parse_flag(s: &str) -> bool {
    !matches!(
        s.to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
