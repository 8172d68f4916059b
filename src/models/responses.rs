//! Response DTOs for the operational endpoints
//!
//! Defines the structure of outgoing HTTP response bodies for `/health`
//! and `/stats`.

use serde::Serialize;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of lookups that found a live todo
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of todos evicted by the LRU policy
    pub evictions: u64,
    /// Number of todos dropped because they aged out
    pub expirations: u64,
    /// Current number of live todos
    pub live_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache counters
    pub fn new(
        hits: u64,
        misses: u64,
        evictions: u64,
        expirations: u64,
        live_entries: usize,
    ) -> Self {
        let total_lookups = hits + misses;
        let hit_rate = if total_lookups > 0 {
            hits as f64 / total_lookups as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            evictions,
            expirations,
            live_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Current number of live todos
    pub todos: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(todos: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            todos,
        }
    }
}
