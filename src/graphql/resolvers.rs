//! GraphQL Resolvers
//!
//! One resolver per schema field, each a direct translation to a cache call.
//! No resolver validates existence, sanitizes input, or raises a domain
//! error: absence reads as a null field, updates upsert, deletes no-op.

use async_graphql::{Context, Object, Result, SimpleObject};

use crate::cache::SharedCache;
use crate::ident;

// == Todo ==
/// A single todo record.
#[derive(Debug, Clone, SimpleObject)]
pub struct Todo {
    /// Unique identifier, assigned at creation and immutable after
    pub id: String,
    /// Free-form content; null when the id is not in the cache
    #[graphql(name = "type")]
    pub text: Option<String>,
}

// == Query Root ==
/// Root query operations.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Lists all live todos. Order follows the cache's internal iteration,
    /// not insertion order.
    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<Todo>> {
        let cache = ctx.data::<SharedCache>()?;
        let cache = cache.read().await;

        Ok(cache
            .entries()
            .into_iter()
            .map(|(id, text)| Todo {
                id,
                text: Some(text),
            })
            .collect())
    }

    /// Looks up a single todo by id.
    ///
    /// Always returns an object; an absent id comes back with a null type.
    async fn todo(&self, ctx: &Context<'_>, id: String) -> Result<Todo> {
        let cache = ctx.data::<SharedCache>()?;
        let mut cache = cache.write().await;

        let text = cache.get(&id);
        Ok(Todo { id, text })
    }
}

// == Mutation Root ==
/// Root mutation operations.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a todo under a freshly minted id.
    async fn add_todo(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "type")] text: String,
    ) -> Result<Todo> {
        let cache = ctx.data::<SharedCache>()?;
        let id = ident::mint();

        let mut cache = cache.write().await;
        cache.insert(id.clone(), text.clone());

        Ok(Todo {
            id,
            text: Some(text),
        })
    }

    /// Overwrites a todo's text.
    ///
    /// An unknown id silently creates the entry; update has upsert
    /// semantics.
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: String,
        #[graphql(name = "type")] text: String,
    ) -> Result<Todo> {
        let cache = ctx.data::<SharedCache>()?;

        let mut cache = cache.write().await;
        cache.insert(id.clone(), text.clone());

        Ok(Todo {
            id,
            text: Some(text),
        })
    }

    /// Removes a todo, echoing the id back.
    ///
    /// Removing an absent id is a no-op and still returns the id.
    async fn delete_todo(&self, ctx: &Context<'_>, id: String) -> Result<String> {
        let cache = ctx.data::<SharedCache>()?;

        let mut cache = cache.write().await;
        cache.remove(&id);

        Ok(id)
    }
}
