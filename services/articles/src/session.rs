//! In-process session store
//!
//! Sessions associate a client-held session id (carried in a cookie) with a
//! logged-in user's id. The store is shared across request handlers through
//! [`crate::state::AppState`]; each request takes the lock once, so it
//! observes a consistent snapshot for its duration.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Session store for handling user sessions
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, i64>>>,
}

impl SessionStore {
    /// Create a new, empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session bound to the given user id
    pub async fn create_session(&self, user_id: i64) -> Uuid {
        info!("Creating session for user: {}", user_id);

        let session_id = Uuid::new_v4();
        self.sessions.write().await.insert(session_id, user_id);

        session_id
    }

    /// Resolve a session id to the user id it is bound to
    pub async fn resolve(&self, session_id: Uuid) -> Option<i64> {
        self.sessions.read().await.get(&session_id).copied()
    }

    /// Delete a session; deleting an unknown or already-cleared session is
    /// not an error
    pub async fn delete_session(&self, session_id: Uuid) {
        info!("Deleting session: {}", session_id);

        self.sessions.write().await.remove(&session_id);
    }

    /// Drop every session binding
    pub async fn clear_all(&self) {
        info!("Clearing all sessions");

        self.sessions.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_resolves_after_create() {
        let store = SessionStore::new();
        let session_id = store.create_session(42).await;

        assert_eq!(store.resolve(session_id).await, Some(42));
    }

    #[tokio::test]
    async fn test_session_gone_after_delete() {
        let store = SessionStore::new();
        let session_id = store.create_session(42).await;

        store.delete_session(session_id).await;
        assert_eq!(store.resolve(session_id).await, None);

        // Deleting again is a no-op, not an error
        store.delete_session(session_id).await;
    }

    #[tokio::test]
    async fn test_unknown_session_does_not_resolve() {
        let store = SessionStore::new();
        store.create_session(42).await;

        assert_eq!(store.resolve(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn test_clear_all_drops_every_binding() {
        let store = SessionStore::new();
        let first = store.create_session(1).await;
        let second = store.create_session(2).await;

        store.clear_all().await;
        assert_eq!(store.resolve(first).await, None);
        assert_eq!(store.resolve(second).await, None);
    }
}
