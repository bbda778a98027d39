//! Redis Lite - A single-process LRU key-value cache
//!
//! Provides a bounded cache with strict LRU eviction, lazy expiry, flat-file
//! snapshots and a line-command shell.

pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod models;
pub mod shared;
pub mod storage;
pub mod validator;

pub use cache::CacheStore;
pub use command::Session;
pub use config::Config;
pub use error::{CacheError, ErrorKind};
pub use shared::SharedStore;
pub use storage::Storage;
pub use validator::CommandValidator;
