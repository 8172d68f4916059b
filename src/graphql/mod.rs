//! GraphQL Module
//!
//! Schema shape and resolvers for the todo API.
//!
//! # Operations
//! - `todos` - List all live todos
//! - `todo(id)` - Look up one todo
//! - `addTodo(type)` - Create a todo under a fresh id
//! - `updateTodo(id, type)` - Overwrite a todo's text (creates if absent)
//! - `deleteTodo(id)` - Remove a todo, echoing the id back

pub mod resolvers;
pub mod schema;

pub use resolvers::{MutationRoot, QueryRoot, Todo};
pub use schema::{build_schema, TodoSchema};
