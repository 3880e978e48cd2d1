//! Follow edge - (follower, following) association
//!
//! Self-follow is forbidden at the domain level; the edge drives both the
//! follower's following_count and the followee's followers_count.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowEdge {
    pub follower_id: Snowflake,
    pub following_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    /// Create a follow edge, rejecting self-follows
    pub fn new(follower_id: Snowflake, following_id: Snowflake) -> Result<Self, DomainError> {
        if follower_id == following_id {
            return Err(DomainError::SelfFollow);
        }
        Ok(Self {
            follower_id,
            following_id,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_follow_rejected() {
        let err = FollowEdge::new(Snowflake::new(1), Snowflake::new(1)).unwrap_err();
        assert!(matches!(err, DomainError::SelfFollow));
    }

    #[test]
    fn test_follow_edge_created() {
        let edge = FollowEdge::new(Snowflake::new(1), Snowflake::new(2)).unwrap();
        assert_eq!(edge.follower_id, Snowflake::new(1));
        assert_eq!(edge.following_id, Snowflake::new(2));
    }
}
