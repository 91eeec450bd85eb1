//! Article model and related functionality

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Article entity
///
/// `is_member_only` marks an article as gated behind a logged-in session.
/// Articles are read-only in the flows served here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub minutes_to_read: i64,
    pub is_member_only: bool,
    pub author: String,
    pub user_id: i64,
}

/// New article creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub preview: String,
    pub minutes_to_read: i64,
    pub is_member_only: bool,
    pub author: String,
    pub user_id: i64,
}
