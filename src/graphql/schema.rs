//! Schema Assembly
//!
//! Wires the root operation types into one executable schema.

use async_graphql::{EmptySubscription, Schema};

use super::resolvers::{MutationRoot, QueryRoot};
use crate::cache::SharedCache;

/// The executable todo schema.
pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the shared cache installed as context data.
///
/// The execution engine validates every request against this schema before
/// any resolver runs, so malformed operations never reach the cache.
pub fn build_schema(cache: SharedCache) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(cache)
        .finish()
}
