//! Bookmark - pure (user, article) association; existence is the signal

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub user_id: Snowflake,
    pub article_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user_id: Snowflake, article_id: Snowflake) -> Self {
        Self {
            user_id,
            article_id,
            created_at: Utc::now(),
        }
    }
}
