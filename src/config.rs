//! Runtime configuration from environment variables.
//!
//! - `TUI_2048_SEED`: u64 seed for a reproducible session (default: random)
//! - `TUI_2048_LOG`: log filter, falls back to `RUST_LOG`, then `warn`
//! - `TUI_2048_LOG_FILE`: write logs to this file instead of stderr
//!
//! The game draws on the alternate screen, so anything written to stderr
//! lands on top of the board. A filter more verbose than `warn` without an
//! explicit log file therefore writes to `tui-2048.log` in the working
//! directory.

use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_LOG_FILE: &str = "tui-2048.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, so tests need not touch the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = non_empty("TUI_2048_SEED")
            .map(|raw| {
                raw.parse::<u64>().with_context(|| {
                    format!("TUI_2048_SEED must be an unsigned integer, got {:?}", raw)
                })
            })
            .transpose()?;

        let log_filter = non_empty("TUI_2048_LOG")
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_file = non_empty("TUI_2048_LOG_FILE").map(PathBuf::from);

        Ok(Self {
            seed,
            log_filter,
            log_file,
        })
    }

    /// Where logs go: the configured file, `tui-2048.log` when the filter
    /// enables info or finer, otherwise `None` (stderr).
    pub fn effective_log_file(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| is_verbose(&self.log_filter).then(|| PathBuf::from(DEFAULT_LOG_FILE)))
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// True if any directive in an env_logger filter enables info or finer.
///
/// A bare module path enables every level for that module.
fn is_verbose(filter: &str) -> bool {
    let filter = filter.to_ascii_lowercase();
    let directives = filter.split('/').next().unwrap_or_default();
    directives.split(',').any(|directive| {
        let level = directive.rsplit('=').next().unwrap_or(directive).trim();
        !matches!(level, "" | "off" | "error" | "warn")
    })
}
