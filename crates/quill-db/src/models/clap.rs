//! Clap database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for claps table, one row per (user, article)
#[derive(Debug, Clone, FromRow)]
pub struct ClapModel {
    pub user_id: i64,
    pub article_id: i64,
    pub count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
