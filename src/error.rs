//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache engine and its validator.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key was present but its expiry had passed; it has been purged
    #[error("Key expired: {0}")]
    Expired(String),

    /// Empty key or filename rejected before reaching the engine
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Snapshot file could not be opened, read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// == Error Kind ==
/// Coarse error classification reported at the command boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    None,
    KeyNotFound,
    InvalidKey,
    Io,
}

impl CacheError {
    /// Builds an I/O error tagged with the snapshot path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CacheError::Io {
            path: path.into(),
            source,
        }
    }

    /// Maps this error onto the boundary taxonomy.
    ///
    /// A lazily purged entry looks exactly like an absent one from outside.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CacheError::NotFound(_) | CacheError::Expired(_) => ErrorKind::KeyNotFound,
            CacheError::InvalidKey(_) => ErrorKind::InvalidKey,
            CacheError::Io { .. } => ErrorKind::Io,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
