//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::types::{RESOLVE_DELAY_MS, TOTAL_CARDS};

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for the first deal; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub resolve_delay_ms: u32,
    pub total_cards: usize,
    /// Tracing output file. Logging is off when unset.
    pub log_path: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// JSON-lines file receiving a snapshot after every state change.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            resolve_delay_ms: RESOLVE_DELAY_MS,
            total_cards: TOTAL_CARDS,
            log_path: None,
            log_level: "info".to_string(),
            snapshot_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("MEMORY_SEED").and_then(|s| s.trim().parse().ok());

        let resolve_delay_ms = lookup("MEMORY_RESOLVE_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.resolve_delay_ms);

        let log_level = lookup("MEMORY_LOG_LEVEL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            resolve_delay_ms,
            total_cards: defaults.total_cards,
            log_path: non_empty_path(lookup("MEMORY_LOG_PATH")),
            log_level,
            snapshot_path: non_empty_path(lookup("MEMORY_SNAPSHOT_PATH")),
        }
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
