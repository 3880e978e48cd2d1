//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method that touches a denormalized
//! counter is a single transactional unit: the ledger row and every
//! affected counter commit together or not at all. No other component may
//! write counter fields.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Article, ArticleStatus, Bookmark, Clap, Comment, DraftFields, FollowEdge, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Article Repository
// ============================================================================

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find article by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>>;

    /// Insert a fresh draft
    async fn create_draft(&self, article: &Article) -> RepoResult<()>;

    /// Apply a full-field autosave to a draft, advancing the stored version
    /// by exactly one. Returns the new version, or `None` when the row is
    /// missing or no longer in draft state.
    async fn apply_autosave(
        &self,
        id: Snowflake,
        fields: &DraftFields,
        saved_at: DateTime<Utc>,
    ) -> RepoResult<Option<i32>>;

    /// All slugs already assigned to the author's articles
    async fn slugs_for_author(&self, author_id: Snowflake) -> RepoResult<Vec<String>>;

    /// Compare-and-swap `draft -> published`, assigning slug, excerpt and
    /// reading time. Returns `false` when the row was not a draft anymore
    /// (the caller lost the publish race).
    async fn publish(
        &self,
        id: Snowflake,
        slug: &str,
        excerpt: &str,
        reading_time_minutes: i32,
        published_at: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Administrative transition guarded by the expected current status.
    /// Returns `false` when the row was not in `from` state.
    async fn set_status(
        &self,
        id: Snowflake,
        from: ArticleStatus,
        to: ArticleStatus,
    ) -> RepoResult<bool>;

    /// Unconditional atomic view-count increment
    async fn record_view(&self, id: Snowflake) -> RepoResult<()>;

    /// Unconditional atomic read-count increment
    async fn record_read(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Engagement Repository (ledger + counter aggregation)
// ============================================================================

/// Totals after a clap landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClapTotals {
    /// The caller's per-article count after capping
    pub user_total: i32,
    /// The article's aggregate clap count
    pub article_total: i64,
    /// The delta that actually landed (zero when already at the cap)
    pub applied_delta: i32,
}

#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Find the clap row for a (user, article) pair
    async fn find_clap(&self, user_id: Snowflake, article_id: Snowflake)
        -> RepoResult<Option<Clap>>;

    /// Upsert the clap row for (user, article) and advance the article's
    /// clap count and the author's received total by the applied (post-cap)
    /// delta, all inside one transaction. A clap already at the cap applies
    /// zero delta and still succeeds.
    async fn apply_clap(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
        author_id: Snowflake,
        delta: i32,
    ) -> RepoResult<ClapTotals>;

    /// Find comment by ID
    async fn find_comment(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Insert a comment, incrementing the article's comment count and the
    /// parent's reply count in the same transaction
    async fn create_comment(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment and cascade to its replies, decrementing the
    /// article's comment count by (1 + replies) and the parent's reply
    /// count, all in the same transaction. Returns rows removed.
    async fn delete_comment_cascade(&self, comment: &Comment) -> RepoResult<i64>;

    /// Check whether the user has bookmarked the article
    async fn is_bookmarked(&self, user_id: Snowflake, article_id: Snowflake) -> RepoResult<bool>;

    /// Idempotent bookmark insert; the counter moves only when a row was
    /// actually inserted. Returns whether state changed.
    async fn add_bookmark(&self, bookmark: &Bookmark) -> RepoResult<bool>;

    /// Idempotent bookmark delete; the counter moves only when a row was
    /// actually removed. Returns whether state changed.
    async fn remove_bookmark(&self, user_id: Snowflake, article_id: Snowflake)
        -> RepoResult<bool>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Check whether the follow edge exists
    async fn is_following(&self, follower_id: Snowflake, following_id: Snowflake)
        -> RepoResult<bool>;

    /// Idempotent edge insert; both user counters move in the same
    /// transaction, and only when the edge was actually inserted.
    /// Returns whether state changed.
    async fn create(&self, edge: &FollowEdge) -> RepoResult<bool>;

    /// Idempotent edge delete; both user counters move in the same
    /// transaction, and only when an edge was actually removed.
    /// Returns whether state changed.
    async fn delete(&self, follower_id: Snowflake, following_id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update profile fields (counters are off-limits here)
    async fn update_profile(&self, id: Snowflake, display_name: Option<&str>) -> RepoResult<()>;
}
