//! Cache Module
//!
//! Provides the in-memory todo store with age expiration and LRU eviction.
//!
//! The cache is the sole owner of live todo state. No operation on it can
//! fail: reads of absent ids return `None`, deletes of absent ids are
//! no-ops, and inserts evict the least recently used entry when full.

mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::TodoEntry;
pub use lru::RecencyList;
pub use stats::CacheStats;
pub use store::TodoCache;

use std::sync::Arc;
use tokio::sync::RwLock;

/// The cache as shared by request handlers and background tasks.
pub type SharedCache = Arc<RwLock<TodoCache>>;
