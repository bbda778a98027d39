//! Cache Module
//!
//! Provides the in-memory cache engine with lazy expiry, strict LRU eviction
//! and flat-file snapshots.

mod entry;
mod lru;
pub mod snapshot;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{LruList, NodeId};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 100;
