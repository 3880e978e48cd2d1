//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Article Responses
// ============================================================================

/// Full article response
#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
    pub content_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub is_member_only: bool,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub reading_time_minutes: i32,
    pub claps_count: i64,
    pub comments_count: i32,
    pub bookmarks_count: i32,
    pub views_count: i64,
    pub reads_count: i64,
    pub autosave_version: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Autosave acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct AutosaveResponse {
    pub article_id: String,
    /// Server-authoritative version after this save
    pub autosave_version: i32,
    pub saved_at: DateTime<Utc>,
}

// ============================================================================
// Engagement Responses
// ============================================================================

/// Clap acknowledgement with post-cap totals
#[derive(Debug, Clone, Serialize)]
pub struct ClapResponse {
    pub article_id: String,
    /// The caller's per-article count after capping
    pub user_claps: i32,
    /// Aggregate clap count on the article
    pub total_claps: i64,
    /// How much of the request actually landed
    pub applied: i32,
}

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub article_id: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub content: String,
    pub replies_count: i32,
    pub is_author_reply: bool,
    pub created_at: DateTime<Utc>,
}

/// Bookmark state after a toggle
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkResponse {
    pub article_id: String,
    pub bookmarked: bool,
    /// Whether this call changed anything (idempotent repeats return false)
    pub changed: bool,
}

// ============================================================================
// Social Responses
// ============================================================================

/// Follow state after a toggle
#[derive(Debug, Clone, Serialize)]
pub struct FollowResponse {
    pub following_id: String,
    pub following: bool,
    pub followers_count: i32,
}

// ============================================================================
// User Responses
// ============================================================================

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub followers_count: i32,
    pub following_count: i32,
    pub total_claps_received: i64,
    pub created_at: DateTime<Utc>,
}
