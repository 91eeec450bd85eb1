//! User repository for database operations

use anyhow::Result;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::models::User;

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, username: &str) -> Result<User> {
        info!("Creating new user: {}", username);

        let row = sqlx::query(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        let user = User {
            id: row.get("id"),
            username: row.get("username"),
        };

        Ok(user)
    }

    /// Find a user by username (exact match)
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let user = User {
                    id: row.get("id"),
                    username: row.get("username"),
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("create in-memory sqlite");
        fixtures::init_schema(&pool).await.expect("init schema");
        pool
    }

    #[tokio::test]
    async fn test_find_by_username_exact_match() {
        let repo = UserRepository::new(test_pool().await);
        let created = repo.create("testuser").await.expect("create user");

        let found = repo
            .find_by_username("testuser")
            .await
            .expect("lookup failed")
            .expect("user should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.username, "testuser");
    }

    #[tokio::test]
    async fn test_find_by_username_miss_returns_none() {
        let repo = UserRepository::new(test_pool().await);
        repo.create("testuser").await.expect("create user");

        let found = repo
            .find_by_username("someone_else")
            .await
            .expect("lookup failed");
        assert!(found.is_none());

        // No fuzzy matching on usernames
        let found = repo
            .find_by_username("testuse")
            .await
            .expect("lookup failed");
        assert!(found.is_none());
    }
}
