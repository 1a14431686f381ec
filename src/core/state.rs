//! Application State - state shared by every route
//!
//! Holds the repositories built on top of the connection pool. The pool is
//! created once in `main` and handed in here; handlers never reach for a
//! global connection.

use crate::repositories::ItemRepository;
use sqlx::SqlitePool;

/// State shared between all routes
pub struct AppState {
    /// Repository for items
    pub item: ItemRepository,
}

impl AppState {
    /// Builds the state from the shared connection pool.
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            item: ItemRepository::new(pool),
        }
    }
}
