//! User service
//!
//! Account creation and profile updates. Counters on the user row are
//! owned by the follow and engagement repositories, never written here.

use tracing::{info, instrument};
use validator::Validate;

use quill_core::entities::User;
use quill_core::Snowflake;

use crate::dto::requests::{CreateUserRequest, UpdateProfileRequest};
use crate::dto::responses::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user account
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        request.validate()?;

        let id = self.ctx.generate_id();
        let user = User::new(id, request.username);
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %id, username = %user.username, "User created");

        Ok(UserResponse::from(user))
    }

    /// Fetch a user profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// Update profile fields
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        request.validate()?;

        self.ctx
            .user_repo()
            .update_profile(user_id, request.display_name.as_deref())
            .await?;

        self.get_user(user_id).await
    }
}
