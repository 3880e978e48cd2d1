//! Article database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for articles table
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    pub content_html: String,
    pub excerpt: Option<String>,
    pub tags: Json<Vec<String>>,
    pub categories: Json<Vec<String>>,
    pub is_member_only: bool,
    pub status: String,
    pub slug: Option<String>,
    pub reading_time_minutes: i32,
    pub claps_count: i64,
    pub comments_count: i32,
    pub bookmarks_count: i32,
    pub views_count: i64,
    pub reads_count: i64,
    pub autosave_version: i32,
    pub last_autosave: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleModel {
    /// Check if the row is still a draft
    #[inline]
    pub fn is_draft(&self) -> bool {
        self.status == "draft"
    }

    /// Check if the row has been published
    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == "published"
    }
}
