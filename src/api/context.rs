//! Request Context Module
//!
//! Per-request identity extraction, run before GraphQL dispatch.
//!
//! Extraction can reject a request, which short-circuits it with a 401
//! before any resolver executes. It currently never does: the token is
//! read, logged and carried, but nothing validates it.

use axum::http::HeaderMap;
use tracing::debug;

use crate::error::Rejection;

// == Request Context ==
/// Identity information extracted from one request.
///
/// Attached to the GraphQL request data; resolvers ignore it for now.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Raw value of the `authorization` header, if present
    pub token: Option<String>,
}

// == Authenticate ==
/// Builds the per-request context from the incoming headers.
///
/// Reads the `authorization` header. This is the place a real deployment
/// would resolve the token to a user, check roles and permissions, and
/// return `Rejection::Unauthorized` to block the request; until then every
/// request passes.
pub fn authenticate(headers: &HeaderMap) -> Result<RequestContext, Rejection> {
    let token = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    debug!(?token, "request context extracted");

    // try to retrieve a user with the token
    // optionally block the user here
    Ok(RequestContext { token })
}
