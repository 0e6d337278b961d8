//! Command-line overrides layered on top of the environment config.
//!
//! Flags take priority over `MEMORY_*` variables, which take priority over
//! the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::Config;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "tui-memory")]
#[command(about = "Terminal memory-matching card game")]
pub struct Cli {
    /// Seed for the session's deals (OS entropy when unset)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before a flipped pair is resolved, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u32>,

    /// Write tracing output to this file
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. info, debug)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Append a JSON line per state change to this file
    #[arg(long)]
    pub snapshots: Option<PathBuf>,
}

impl Cli {
    /// Overwrite the fields of `config` that were given on the command line.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay) = self.delay_ms {
            config.resolve_delay_ms = delay;
        }
        if let Some(path) = self.log {
            config.log_path = Some(path);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(path) = self.snapshots {
            config.snapshot_path = Some(path);
        }
        config
    }
}
