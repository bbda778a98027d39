//! Configuration Module
//!
//! Handles loading shell configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_CAPACITY;

/// Prompt printed before each command when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// Shell configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold (at least 1)
    pub capacity: usize,
    /// Prompt printed before each command
    pub prompt: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 100, minimum: 1)
    /// - `CACHE_PROMPT` - Shell prompt (default: `"> "`)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_CAPACITY)
                .max(1),
            prompt: env::var("CACHE_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
