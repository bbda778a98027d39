//! Command Validator
//!
//! Rejects empty keys and filenames before they reach the engine; every
//! other call is forwarded unchanged.

use std::path::Path;

use crate::cache::CacheStats;
use crate::error::{CacheError, Result};
use crate::storage::Storage;

// == Command Validator ==
/// Input gate in front of a [`Storage`] engine.
#[derive(Debug)]
pub struct CommandValidator<S> {
    storage: S,
}

impl<S: Storage> CommandValidator<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read access to the wrapped engine.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    pub fn set(&mut self, key: String, value: String) -> Result<()> {
        require_key(&key)?;
        self.storage.set(key, value)
    }

    pub fn get(&mut self, key: &str) -> Result<String> {
        require_key(key)?;
        self.storage.get(key)
    }

    pub fn del(&mut self, key: &str) -> Result<()> {
        require_key(key)?;
        self.storage.del(key)
    }

    pub fn exists(&mut self, key: &str) -> Result<()> {
        require_key(key)?;
        self.storage.exists(key)
    }

    /// Saves a snapshot. An empty filename never touches the filesystem.
    pub fn save(&mut self, filename: &str) -> Result<()> {
        require_filename(filename)?;
        self.storage.save_to_file(Path::new(filename))
    }

    /// Loads a snapshot. An empty filename never touches the filesystem.
    pub fn load(&mut self, filename: &str) -> Result<()> {
        require_filename(filename)?;
        self.storage.load_from_file(Path::new(filename))
    }

    pub fn stats(&self) -> CacheStats {
        self.storage.stats()
    }
}

fn require_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}

fn require_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(CacheError::InvalidKey(
            "filename must not be empty".to_string(),
        ));
    }
    Ok(())
}
