//! API Handlers
//!
//! HTTP request handlers for the GraphQL endpoint and the operational
//! endpoints around it.

use std::sync::Arc;
use tokio::sync::RwLock;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::api::context::authenticate;
use crate::cache::{SharedCache, TodoCache};
use crate::config::Config;
use crate::graphql::{build_schema, TodoSchema};
use crate::models::{HealthResponse, StatsResponse};

// == App State ==
/// Application state shared across all handlers.
///
/// Holds the shared cache and the executable schema built over it. The
/// cache lives for the process lifetime; the schema keeps its own handle to
/// it as context data.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe todo cache
    pub cache: SharedCache,
    /// Executable GraphQL schema
    pub schema: TodoSchema,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: TodoCache) -> Self {
        let cache: SharedCache = Arc::new(RwLock::new(cache));
        let schema = build_schema(cache.clone());
        Self { cache, schema }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(TodoCache::new(config.capacity, config.max_age_secs))
    }
}

// == GraphQL Handler ==
/// Handler for POST /
///
/// Extracts the per-request context, then hands the operation to the
/// execution engine. A context rejection short-circuits the request before
/// any resolver runs.
pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> Response {
    let request_ctx = match authenticate(&headers) {
        Ok(ctx) => ctx,
        Err(rejection) => return rejection.into_response(),
    };

    let request = req.into_inner().data(request_ctx);
    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

// == Playground Handler ==
/// Handler for GET /
///
/// Serves the GraphQL playground for interactive exploration.
pub async fn playground_handler() -> Html<String> {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}

// == Health Handler ==
/// Handler for GET /health
///
/// Returns health status and the current live todo count.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.cache.read().await;

    Json(HealthResponse::healthy(cache.len()))
}

// == Stats Handler ==
/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.expirations,
        stats.live_entries,
    ))
}
