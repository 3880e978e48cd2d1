//! Service context - dependency container for services
//!
//! Holds the repositories and shared facilities every service needs.

use std::sync::Arc;

use quill_common::config::EditorialConfig;
use quill_core::traits::{
    ArticleRepository, EngagementRepository, FollowRepository, UserRepository,
};
use quill_core::{Snowflake, SnowflakeGenerator};
use quill_db::{
    PgArticleRepository, PgEngagementRepository, PgFollowRepository, PgPool, PgUserRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (trait objects, so tests can swap in-memory fakes)
/// - Snowflake generator for ID generation
/// - Editorial limits
#[derive(Clone)]
pub struct ServiceContext {
    article_repo: Arc<dyn ArticleRepository>,
    engagement_repo: Arc<dyn EngagementRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    user_repo: Arc<dyn UserRepository>,

    snowflake_generator: Arc<SnowflakeGenerator>,
    editorial: EditorialConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        engagement_repo: Arc<dyn EngagementRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        user_repo: Arc<dyn UserRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        editorial: EditorialConfig,
    ) -> Self {
        Self {
            article_repo,
            engagement_repo,
            follow_repo,
            user_repo,
            snowflake_generator,
            editorial,
        }
    }

    /// Wire a context over PostgreSQL repositories sharing one pool
    pub fn from_pg_pool(
        pool: PgPool,
        snowflake_generator: Arc<SnowflakeGenerator>,
        editorial: EditorialConfig,
    ) -> Self {
        Self::new(
            Arc::new(PgArticleRepository::new(pool.clone())),
            Arc::new(PgEngagementRepository::new(pool.clone())),
            Arc::new(PgFollowRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            snowflake_generator,
            editorial,
        )
    }

    // === Repositories ===

    /// Get the article repository
    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    /// Get the engagement repository
    pub fn engagement_repo(&self) -> &dyn EngagementRepository {
        self.engagement_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Facilities ===

    /// Get the editorial limits
    pub fn editorial(&self) -> &EditorialConfig {
        &self.editorial
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("editorial", &self.editorial)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    article_repo: Option<Arc<dyn ArticleRepository>>,
    engagement_repo: Option<Arc<dyn EngagementRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    editorial: Option<EditorialConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article_repo(mut self, repo: Arc<dyn ArticleRepository>) -> Self {
        self.article_repo = Some(repo);
        self
    }

    pub fn engagement_repo(mut self, repo: Arc<dyn EngagementRepository>) -> Self {
        self.engagement_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn editorial(mut self, editorial: EditorialConfig) -> Self {
        self.editorial = Some(editorial);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.article_repo
                .ok_or_else(|| ServiceError::validation("article_repo is required"))?,
            self.engagement_repo
                .ok_or_else(|| ServiceError::validation("engagement_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.editorial
                .ok_or_else(|| ServiceError::validation("editorial config is required"))?,
        ))
    }
}
