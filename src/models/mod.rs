//! Response models for the operational endpoints
//!
//! The GraphQL surface defines its own request and response shapes; these
//! DTOs cover only the health and stats endpoints next to it.

pub mod responses;

// Re-export commonly used types
pub use responses::{HealthResponse, StatsResponse};
