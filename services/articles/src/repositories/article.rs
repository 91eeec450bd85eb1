//! Article repository for database operations

use anyhow::Result;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::models::{Article, NewArticle};

/// Article repository
#[derive(Clone)]
pub struct ArticleRepository {
    pool: SqlitePool,
}

impl ArticleRepository {
    /// Create a new article repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new article
    pub async fn create(&self, new_article: &NewArticle) -> Result<Article> {
        info!("Creating new article: {}", new_article.title);

        let row = sqlx::query(
            r#"
            INSERT INTO articles (title, content, preview, minutes_to_read, is_member_only, author, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, content, preview, minutes_to_read, is_member_only, author, user_id
            "#,
        )
        .bind(&new_article.title)
        .bind(&new_article.content)
        .bind(&new_article.preview)
        .bind(new_article.minutes_to_read)
        .bind(new_article.is_member_only)
        .bind(&new_article.author)
        .bind(new_article.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::from_row(&row))
    }

    /// Find an article by ID, regardless of its member-only flag
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Article>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, preview, minutes_to_read, is_member_only, author, user_id
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// Find all member-only articles, ordered by id for stable enumeration
    pub async fn find_member_only(&self) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, preview, minutes_to_read, is_member_only, author, user_id
            FROM articles
            WHERE is_member_only = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Article {
        Article {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
            preview: row.get("preview"),
            minutes_to_read: row.get("minutes_to_read"),
            is_member_only: row.get("is_member_only"),
            author: row.get("author"),
            user_id: row.get("user_id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::repositories::UserRepository;
    use sqlx::sqlite::SqlitePoolOptions;

    fn new_article(title: &str, is_member_only: bool, user_id: i64) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            content: format!("Full content of {}.", title),
            preview: format!("Preview of {}.", title),
            minutes_to_read: 5,
            is_member_only,
            author: "Test Author".to_string(),
            user_id,
        }
    }

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
    async fn test_find_member_only_filters_public_articles() {
        let pool = test_pool().await;
        let users = UserRepository::new(pool.clone());
        let articles = ArticleRepository::new(pool);

        let user = users.create("testuser").await.expect("create user");
        let gated = articles
            .create(&new_article("Members Only", true, user.id))
            .await
            .expect("create gated article");
        articles
            .create(&new_article("Public", false, user.id))
            .await
            .expect("create public article");

        let member_only = articles.find_member_only().await.expect("list failed");
        assert_eq!(member_only.len(), 1);
        assert_eq!(member_only[0].id, gated.id);
        assert!(member_only.iter().all(|a| a.is_member_only));
    }

    #[tokio::test]
    async fn test_find_by_id_ignores_member_only_flag() {
        let pool = test_pool().await;
        let users = UserRepository::new(pool.clone());
        let articles = ArticleRepository::new(pool);

        let user = users.create("testuser").await.expect("create user");
        let public = articles
            .create(&new_article("Public", false, user.id))
            .await
            .expect("create public article");

        // The gate controls the route, not per-article visibility
        let found = articles
            .find_by_id(public.id)
            .await
            .expect("lookup failed")
            .expect("article should exist");
        assert_eq!(found.title, "Public");
        assert!(!found.is_member_only);
    }

    #[tokio::test]
    async fn test_find_by_id_miss_returns_none() {
        let articles = ArticleRepository::new(test_pool().await);

        let found = articles.find_by_id(999_999).await.expect("lookup failed");
        assert!(found.is_none());
    }
}
