//! Shared Store
//!
//! Thread-safe handle over a single store. One mutex guards the index and
//! the recency list together, so every operation sees them consistent.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;
use crate::storage::Storage;

// == Shared Store ==
/// Cloneable handle to a store shared between threads.
#[derive(Debug)]
pub struct SharedStore<S = CacheStore> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Storage> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Locks the store. A panic in another holder does not leave the store
    /// half-updated (every operation completes its bookkeeping before
    /// returning), so a poisoned lock is taken over.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: Storage> Storage for SharedStore<S> {
    fn set(&mut self, key: String, value: String) -> Result<()> {
        self.lock().set(key, value)
    }

    fn get(&mut self, key: &str) -> Result<String> {
        self.lock().get(key)
    }

    fn del(&mut self, key: &str) -> Result<()> {
        self.lock().del(key)
    }

    fn exists(&mut self, key: &str) -> Result<()> {
        self.lock().exists(key)
    }

    fn save_to_file(&mut self, path: &Path) -> Result<()> {
        self.lock().save_to_file(path)
    }

    fn load_from_file(&mut self, path: &Path) -> Result<()> {
        self.lock().load_from_file(path)
    }

    fn stats(&self) -> CacheStats {
        self.lock().stats()
    }
}
