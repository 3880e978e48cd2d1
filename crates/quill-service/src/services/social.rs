//! Social service
//!
//! Follow and unfollow, with both user counters moved by the repository
//! inside one transaction.

use tracing::{info, instrument};

use quill_core::entities::{FollowEdge, User};
use quill_core::{DomainError, Snowflake};

use crate::dto::responses::FollowResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Social service
pub struct SocialService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SocialService<'a> {
    /// Create a new SocialService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow a user (idempotent)
    #[instrument(skip(self))]
    pub async fn follow(
        &self,
        follower_id: Snowflake,
        following_id: Snowflake,
    ) -> ServiceResult<FollowResponse> {
        // Rejects self-follow before any I/O.
        let edge = FollowEdge::new(follower_id, following_id)?;

        self.require_user(following_id).await?;

        let changed = self.ctx.follow_repo().create(&edge).await?;
        if changed {
            info!(follower_id = %follower_id, following_id = %following_id, "Followed");
        }

        let followee = self.require_user(following_id).await?;
        Ok(FollowResponse {
            following_id: following_id.to_string(),
            following: true,
            followers_count: followee.followers_count,
        })
    }

    /// Unfollow a user (idempotent)
    #[instrument(skip(self))]
    pub async fn unfollow(
        &self,
        follower_id: Snowflake,
        following_id: Snowflake,
    ) -> ServiceResult<FollowResponse> {
        if follower_id == following_id {
            return Err(DomainError::SelfFollow.into());
        }

        self.require_user(following_id).await?;

        let changed = self
            .ctx
            .follow_repo()
            .delete(follower_id, following_id)
            .await?;
        if changed {
            info!(follower_id = %follower_id, following_id = %following_id, "Unfollowed");
        }

        let followee = self.require_user(following_id).await?;
        Ok(FollowResponse {
            following_id: following_id.to_string(),
            following: false,
            followers_count: followee.followers_count,
        })
    }

    /// Check whether a follow edge exists
    #[instrument(skip(self))]
    pub async fn is_following(
        &self,
        follower_id: Snowflake,
        following_id: Snowflake,
    ) -> ServiceResult<bool> {
        Ok(self
            .ctx
            .follow_repo()
            .is_following(follower_id, following_id)
            .await?)
    }

    async fn require_user(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }
}
