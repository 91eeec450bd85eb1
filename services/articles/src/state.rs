//! Application state shared across handlers

use sqlx::SqlitePool;

use crate::repositories::{ArticleRepository, UserRepository};
use crate::session::SessionStore;

/// Application state shared across handlers
///
/// Owns the session store and the data-access handles; constructed once by
/// the process (or by a test) and injected into every handler, so there is
/// no module-level shared state.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub user_repository: UserRepository,
    pub article_repository: ArticleRepository,
    pub sessions: SessionStore,
}

impl AppState {
    /// Build the application state around a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            article_repository: ArticleRepository::new(pool.clone()),
            sessions: SessionStore::new(),
            db_pool: pool,
        }
    }
}
