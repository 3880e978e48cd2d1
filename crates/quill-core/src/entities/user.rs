//! User entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity carrying the denormalized social counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub display_name: Option<String>,
    // Denormalized counters, written only by the follow/engagement repositories
    pub followers_count: i32,
    pub following_count: i32,
    pub total_claps_received: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            display_name: None,
            followers_count: 0,
            following_count: 0,
            total_claps_received: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name shown next to articles and comments
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_zero_counters() {
        let user = User::new(Snowflake::new(1), "ada".to_string());
        assert_eq!(user.followers_count, 0);
        assert_eq!(user.following_count, 0);
        assert_eq!(user.total_claps_received, 0);
    }

    #[test]
    fn test_display_name_preferred() {
        let mut user = User::new(Snowflake::new(1), "ada".to_string());
        assert_eq!(user.name(), "ada");
        user.display_name = Some("Ada Lovelace".to_string());
        assert_eq!(user.name(), "Ada Lovelace");
    }
}
