//! Error types for the todo server
//!
//! Provides unified request-rejection handling using thiserror.
//!
//! The cache itself never fails: absent keys read as `None`, deletes of
//! absent keys are no-ops, and inserts always succeed after eviction. The
//! only typed error left at the HTTP boundary is a rejection raised before
//! resolver dispatch.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Rejection Enum ==
/// A request rejected before reaching the GraphQL executor.
#[derive(Error, Debug)]
pub enum Rejection {
    /// Caller identity was refused during context extraction
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Rejection::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
