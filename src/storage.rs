//! Storage Contract
//!
//! The engine operations the command validator calls into.

use std::path::Path;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

// == Storage Trait ==
/// Engine contract: every operation reports success, a value for `get`, or
/// a [`CacheError`](crate::error::CacheError).
pub trait Storage {
    fn set(&mut self, key: String, value: String) -> Result<()>;
    fn get(&mut self, key: &str) -> Result<String>;
    fn del(&mut self, key: &str) -> Result<()>;
    fn exists(&mut self, key: &str) -> Result<()>;
    fn save_to_file(&mut self, path: &Path) -> Result<()>;
    fn load_from_file(&mut self, path: &Path) -> Result<()>;
    fn stats(&self) -> CacheStats;
}

impl Storage for CacheStore {
    fn set(&mut self, key: String, value: String) -> Result<()> {
        CacheStore::set(self, key, value)
    }

    fn get(&mut self, key: &str) -> Result<String> {
        CacheStore::get(self, key)
    }

    fn del(&mut self, key: &str) -> Result<()> {
        CacheStore::del(self, key)
    }

    fn exists(&mut self, key: &str) -> Result<()> {
        CacheStore::exists(self, key)
    }

    fn save_to_file(&mut self, path: &Path) -> Result<()> {
        CacheStore::save_to_file(self, path)
    }

    fn load_from_file(&mut self, path: &Path) -> Result<()> {
        CacheStore::load_from_file(self, path)
    }

    fn stats(&self) -> CacheStats {
        CacheStore::stats(self)
    }
}

/// Lets a caller lend its store to a validator and inspect it afterwards.
impl<S: Storage + ?Sized> Storage for &mut S {
    fn set(&mut self, key: String, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&mut self, key: &str) -> Result<String> {
        (**self).get(key)
    }

    fn del(&mut self, key: &str) -> Result<()> {
        (**self).del(key)
    }

    fn exists(&mut self, key: &str) -> Result<()> {
        (**self).exists(key)
    }

    fn save_to_file(&mut self, path: &Path) -> Result<()> {
        (**self).save_to_file(path)
    }

    fn load_from_file(&mut self, path: &Path) -> Result<()> {
        (**self).load_from_file(path)
    }

    fn stats(&self) -> CacheStats {
        (**self).stats()
    }
}
