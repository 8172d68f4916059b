//! Todo GQL - A minimal GraphQL todo API server
//!
//! Serves a `Todo` schema over HTTP, backed by an in-memory cache with
//! age expiration and LRU eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod graphql;
pub mod ident;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
