//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Default run deadline in milliseconds.
pub const DEFAULT_RUN_TIMEOUT_MS: u64 = 5_000;
/// Default cap on retained console lines.
pub const DEFAULT_MAX_CONSOLE_LINES: usize = 5_000;

/// Runtime configuration for Codebench.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the saved-document database.
    pub db_path: String,
    /// Wall-clock run deadline; `None` disables the deadline.
    pub run_timeout_ms: Option<u64>,
    /// Maximum console lines retained before the oldest are dropped.
    pub max_console_lines: usize,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    // Prefer explicit HOME if set (Unix, some Windows shells)
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows USERPROFILE (standard)
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    // Fallback to current directory if available
    std::env::current_dir().ok()
}

/// Interpret a timeout variable value; `0` disables the deadline.
fn timeout_from_value(value: Option<&str>) -> Option<u64> {
    match value.and_then(|raw| raw.trim().parse::<u64>().ok()) {
        Some(0) => None,
        Some(ms) => Some(ms),
        None => Some(DEFAULT_RUN_TIMEOUT_MS),
    }
}

fn max_lines_from_value(value: Option<&str>) -> usize {
    value
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&lines| lines > 0)
        .unwrap_or(DEFAULT_MAX_CONSOLE_LINES)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("CODEBENCH_DB_PATH")
                .map(expand_tilde)
                .unwrap_or_else(|_| {
                    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
                    let cache_dir = home.join(".cache").join("codebench");
                    cache_dir.join("db").to_string_lossy().to_string()
                }),
            run_timeout_ms: timeout_from_value(
                env::var("CODEBENCH_RUN_TIMEOUT_MS").ok().as_deref(),
            ),
            max_console_lines: max_lines_from_value(
                env::var("CODEBENCH_MAX_CONSOLE_LINES").ok().as_deref(),
            ),
        }
    }
}
