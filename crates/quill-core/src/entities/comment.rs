//! Comment entity - single level of threading
//!
//! A reply's parent is always a top-level comment; replies never nest
//! further in the data model.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub article_id: Snowflake,
    pub author_id: Snowflake,
    pub parent_id: Option<Snowflake>,
    pub content: String,
    /// Denormalized count of direct replies
    pub replies_count: i32,
    /// Set when the article's author replies in their own thread
    pub is_author_reply: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a top-level comment
    pub fn new(id: Snowflake, article_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            article_id,
            author_id,
            parent_id: None,
            content,
            replies_count: 0,
            is_author_reply: false,
            created_at: Utc::now(),
        }
    }

    /// Create a reply to a top-level comment
    pub fn new_reply(
        id: Snowflake,
        article_id: Snowflake,
        author_id: Snowflake,
        content: String,
        parent_id: Snowflake,
    ) -> Self {
        Self {
            id,
            article_id,
            author_id,
            parent_id: Some(parent_id),
            content,
            replies_count: 0,
            is_author_reply: false,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
