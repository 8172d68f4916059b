//! API Module
//!
//! HTTP surface for the GraphQL todo server.
//!
//! # Endpoints
//! - `POST /` - Execute a GraphQL operation
//! - `GET /` - GraphQL playground
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod context;
pub mod handlers;
pub mod routes;

pub use context::{authenticate, RequestContext};
pub use handlers::*;
pub use routes::create_router;
