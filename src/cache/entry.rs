//! Cache Entry Module
//!
//! Defines the structure for individual cached todos.
//!
//! Unlike a per-entry TTL scheme, the age limit here is a property of the
//! whole cache: every entry expires the same fixed duration after it was
//! last written. The entry only records when it was stored; the store
//! supplies the bound.

use std::time::{SystemTime, UNIX_EPOCH};

// == Todo Entry ==
/// A single cached todo: its text and when it was stored.
#[derive(Debug, Clone)]
pub struct TodoEntry {
    /// The todo's content
    pub text: String,
    /// Write timestamp (Unix milliseconds); refreshed on overwrite
    pub stored_at: u64,
}

impl TodoEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(text: String) -> Self {
        Self {
            text,
            stored_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }

    // == Is Expired ==
    /// Checks the entry against the cache-wide age bound.
    ///
    /// Boundary condition: an entry whose age equals the bound is already
    /// expired, so a zero bound expires everything immediately.
    pub fn is_expired(&self, max_age_ms: u64) -> bool {
        self.age_ms() >= max_age_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
