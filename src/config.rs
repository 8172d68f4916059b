//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables. The defaults match
/// the deployed setup: 50 todos, one hour of retention, port 4000.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of todos the cache can hold
    pub capacity: usize,
    /// Entry age limit in seconds; older entries are treated as absent
    pub max_age_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep task interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached todos (default: 50)
    /// - `CACHE_MAX_AGE` - Entry age limit in seconds (default: 3600)
    /// - `SERVER_PORT` - HTTP server port (default: 4000)
    /// - `SWEEP_INTERVAL` - Expired-entry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            max_age_secs: env::var("CACHE_MAX_AGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 50,
            max_age_secs: 3600,
            server_port: 4000,
            sweep_interval: 60,
        }
    }
}
