//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with an arena-backed recency
//! list, lazy expiry and flat-file snapshots.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cache::lru::NodeId;
use crate::cache::snapshot::{format_record, parse_record};
use crate::cache::{CacheEntry, CacheStats, LruList};
use crate::error::{CacheError, Result};

/// Index slot: the entry plus its node in the recency list.
#[derive(Debug)]
struct Slot {
    entry: CacheEntry,
    node: NodeId,
}

// == Cache Store ==
/// Bounded cache with strict LRU eviction and lazy expiry.
///
/// Every key in `entries` owns exactly one node in `lru` and vice versa.
#[derive(Debug)]
pub struct CacheStore {
    /// Key -> entry and recency handle
    entries: HashMap<String, Slot>,
    /// Recency ordering, head = most recent
    lru: LruList,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            lru: LruList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// A live key is updated in place: value replaced, expiry stripped and
    /// moved to the head, with no capacity check. Otherwise expired entries
    /// are reclaimed from the tail, the LRU tail is evicted while the cache
    /// is full, and the key is inserted at the head without expiry.
    pub fn set(&mut self, key: String, value: String) -> Result<()> {
        match self.entries.get(&key).map(|slot| slot.entry.is_expired()) {
            Some(false) => {
                if let Some(slot) = self.entries.get_mut(&key) {
                    slot.entry.replace(value);
                    self.lru.move_to_front(slot.node);
                }
                return Ok(());
            }
            Some(true) => self.purge_expired(&key),
            None => {}
        }

        self.reclaim_expired_tail();

        while self.entries.len() >= self.capacity {
            if !self.evict_oldest() {
                break;
            }
        }

        let node = self.lru.push_front(key.clone());
        self.entries.insert(
            key,
            Slot {
                entry: CacheEntry::new(value),
                node,
            },
        );

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    ///
    /// An expired entry is purged on discovery and reported as missing.
    pub fn get(&mut self, key: &str) -> Result<String> {
        let Some(slot) = self.entries.get(key) else {
            self.stats.record_miss();
            return Err(CacheError::NotFound(key.to_string()));
        };

        if slot.entry.is_expired() {
            self.purge_expired(key);
            self.stats.record_miss();
            return Err(CacheError::Expired(key.to_string()));
        }

        let value = slot.entry.value.clone();
        let node = slot.node;
        self.lru.move_to_front(node);
        self.stats.record_hit();
        Ok(value)
    }

    // == Exists ==
    /// Checks whether a live entry exists without touching recency.
    ///
    /// Like [`get`](Self::get), an expired entry is purged on discovery.
    pub fn exists(&mut self, key: &str) -> Result<()> {
        match self.entries.get(key).map(|slot| slot.entry.is_expired()) {
            Some(false) => Ok(()),
            Some(true) => {
                self.purge_expired(key);
                Err(CacheError::Expired(key.to_string()))
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// No expiry check: a physically present but expired key still deletes
    /// successfully.
    pub fn del(&mut self, key: &str) -> Result<()> {
        match self.entries.remove(key) {
            Some(slot) => {
                self.lru.remove(slot.node);
                Ok(())
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Save ==
    /// Writes every held entry to `path` as `key=value` lines.
    ///
    /// Entries are written in the index's own iteration order, not recency
    /// order, and logically expired entries are included.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CacheError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        for (key, slot) in &self.entries {
            writeln!(writer, "{}", format_record(key, &slot.entry.value))
                .map_err(|e| CacheError::io(path, e))?;
        }
        writer.flush().map_err(|e| CacheError::io(path, e))?;

        info!(
            "Saved {} entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    // == Load ==
    /// Replaces the cache contents with the records in `path`.
    ///
    /// Existing state is wiped once the file is open, so a read failure
    /// part-way leaves only what was read so far. Each record becomes the
    /// newest entry as it is read, so the first line ends up least recently
    /// used and the last line most recently used.
    /// Capacity is not enforced here; the next inserting `set` trims.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|e| CacheError::io(path, e))?;

        self.entries.clear();
        self.lru.clear();

        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line.map_err(|e| CacheError::io(path, e))?;
            let Some((key, value)) = parse_record(&line) else {
                continue;
            };

            // A repeated key keeps only its last record and position
            if let Some(previous) = self.entries.remove(key) {
                self.lru.remove(previous.node);
            }
            // Head, not tail: the first record read must end up least recent
            let node = self.lru.push_front(key.to_string());
            self.entries.insert(
                key.to_string(),
                Slot {
                    entry: CacheEntry::new(value.to_string()),
                    node,
                },
            );
        }

        info!(
            "Loaded {} entries from {}",
            self.entries.len(),
            path.display()
        );
        if self.entries.len() > self.capacity {
            warn!(
                "Snapshot holds {} entries, over capacity {}; next insert will evict",
                self.entries.len(),
                self.capacity
            );
        }
        Ok(())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Recency ==
    /// Keys from most to least recently used.
    pub fn recency(&self) -> impl Iterator<Item = &str> + '_ {
        self.lru.iter()
    }

    /// Whether `key` is physically held, without any expiry check.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries physically held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops an expired entry found during an access.
    fn purge_expired(&mut self, key: &str) {
        if let Some(slot) = self.entries.remove(key) {
            self.lru.remove(slot.node);
            self.stats.record_expiration();
            debug!("Purged expired key '{}'", key);
        }
    }

    /// Pops expired entries off the tail until a live one (or nothing) is
    /// left. Expired entries further up the list are not touched.
    fn reclaim_expired_tail(&mut self) {
        while let Some(tail) = self.lru.back() {
            let expired = self
                .entries
                .get(tail)
                .is_some_and(|slot| slot.entry.is_expired());
            if !expired {
                break;
            }
            if let Some(key) = self.lru.pop_back() {
                self.entries.remove(&key);
                self.stats.record_expiration();
                debug!("Reclaimed expired tail key '{}'", key);
            }
        }
    }

    /// Evicts the LRU tail regardless of expiry. Returns false when empty.
    fn evict_oldest(&mut self) -> bool {
        match self.lru.pop_back() {
            Some(key) => {
                self.entries.remove(&key);
                self.stats.record_eviction();
                debug!("Evicted least recently used key '{}'", key);
                true
            }
            None => false,
        }
    }

    /// Forces an expiry on a held entry. Test-only: no public operation
    /// sets an expiry.
    #[cfg(test)]
    pub(crate) fn expire_at(&mut self, key: &str, at: std::time::Instant) -> bool {
        match self.entries.get_mut(key) {
            Some(slot) => {
                slot.entry.expires_at = Some(at);
                true
            }
            None => false,
        }
    }
}
