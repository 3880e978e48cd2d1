//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::ArticleStatus;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Article not found: {0}")]
    ArticleNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    // =========================================================================
    // Permission Errors
    // =========================================================================
    #[error("Not the article author")]
    NotArticleAuthor,

    #[error("Not the comment author")]
    NotCommentAuthor,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Title is required to publish")]
    TitleRequired,

    #[error("Content is required to publish")]
    ContentRequired,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Slug already taken: {0}")]
    SlugTaken(String),

    #[error("Users cannot follow themselves")]
    SelfFollow,

    #[error("Parent comment belongs to a different article")]
    ParentCommentMismatch,

    #[error("Replies cannot be nested more than one level")]
    ReplyDepthExceeded,

    #[error("Clap delta must be at least 1")]
    InvalidClapDelta,

    // =========================================================================
    // Lifecycle State Errors
    // =========================================================================
    #[error("Article is not a draft")]
    NotADraft,

    #[error("Article is already published")]
    AlreadyPublished,

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: ArticleStatus,
        to: ArticleStatus,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ArticleNotFound(_) => "UNKNOWN_ARTICLE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Permission
            Self::NotArticleAuthor => "NOT_ARTICLE_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::TitleRequired => "TITLE_REQUIRED",
            Self::ContentRequired => "CONTENT_REQUIRED",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::SlugTaken(_) => "SLUG_TAKEN",
            Self::SelfFollow => "SELF_FOLLOW",
            Self::ParentCommentMismatch => "PARENT_COMMENT_MISMATCH",
            Self::ReplyDepthExceeded => "REPLY_DEPTH_EXCEEDED",
            Self::InvalidClapDelta => "INVALID_CLAP_DELTA",

            // Lifecycle
            Self::NotADraft => "NOT_A_DRAFT",
            Self::AlreadyPublished => "ALREADY_PUBLISHED",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ArticleNotFound(_) | Self::CommentNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a permission error
    pub fn is_permission(&self) -> bool {
        matches!(self, Self::NotArticleAuthor | Self::NotCommentAuthor)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::TitleRequired
                | Self::ContentRequired
                | Self::ContentTooLong { .. }
                | Self::SlugTaken(_)
                | Self::SelfFollow
                | Self::ParentCommentMismatch
                | Self::ReplyDepthExceeded
                | Self::InvalidClapDelta
        )
    }

    /// Check if this is a lifecycle state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::NotADraft | Self::AlreadyPublished | Self::InvalidTransition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ArticleNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_ARTICLE");

        let err = DomainError::AlreadyPublished;
        assert_eq!(err.code(), "ALREADY_PUBLISHED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ArticleNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::UserNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::SelfFollow.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::SelfFollow.is_validation());
        assert!(DomainError::TitleRequired.is_validation());
        assert!(!DomainError::NotADraft.is_validation());
    }

    #[test]
    fn test_is_invalid_state() {
        assert!(DomainError::AlreadyPublished.is_invalid_state());
        assert!(DomainError::NotADraft.is_invalid_state());
        assert!(!DomainError::NotArticleAuthor.is_invalid_state());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ArticleNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Article not found: 123");

        let err = DomainError::ContentTooLong { max: 100_000 };
        assert_eq!(err.to_string(), "Content too long: max 100000 characters");
    }
}
