//! Schema bootstrap and seed fixtures
//!
//! The service owns a minimal, idempotent schema bootstrap (two tables, no
//! migration machinery) and a known seed state: one user and one member-only
//! article. The seed runs at startup and again on `/clear`, which is how
//! test runs are isolated from one another.

use anyhow::Result;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::SqlitePool;
use tracing::info;

use crate::models::NewArticle;
use crate::repositories::{ArticleRepository, UserRepository};

/// Username of the seeded user
pub const SEED_USERNAME: &str = "testuser";

/// Create the users and articles tables if they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> DatabaseResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::Schema(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            preview TEXT NOT NULL,
            minutes_to_read INTEGER NOT NULL,
            is_member_only BOOLEAN NOT NULL DEFAULT FALSE,
            author TEXT NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::Schema(e.to_string()))?;

    Ok(())
}

/// Ensure the seed user and a member-only article exist
///
/// Idempotent: existing records are left alone, so calling this from
/// `/clear` between test runs converges on the same known state.
pub async fn ensure_seed(users: &UserRepository, articles: &ArticleRepository) -> Result<()> {
    let user = match users.find_by_username(SEED_USERNAME).await? {
        Some(user) => user,
        None => {
            info!("Seeding user: {}", SEED_USERNAME);
            users.create(SEED_USERNAME).await?
        }
    };

    if articles.find_member_only().await?.is_empty() {
        info!("Seeding member-only article");
        articles
            .create(&NewArticle {
                title: "Test Member Only Article".to_string(),
                content: "This is the content of the member-only article.".to_string(),
                preview: "This is a preview of the article.".to_string(),
                minutes_to_read: 5,
                is_member_only: true,
                author: "Test Author".to_string(),
                user_id: user.id,
            })
            .await?;
    }

    Ok(())
}
