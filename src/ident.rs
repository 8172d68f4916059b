//! Identifier Generation Module
//!
//! Mints short printable ids for new todos.
//!
//! Ids are 12 alphanumeric characters, which gives 62^12 possible values.
//! That is effectively collision-free for a cache capped at 50 entries, so
//! no collision check is performed anywhere downstream.

/// Length of minted identifiers.
pub const IDENT_LEN: usize = 12;

/// Mints a fresh identifier.
pub fn mint() -> String {
    (0..IDENT_LEN).map(|_| fastrand::alphanumeric()).collect()
}
