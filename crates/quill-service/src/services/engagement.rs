//! Engagement service
//!
//! Claps, comments, bookmarks, views and reads. Every counter a reader
//! sees is moved by the repositories in the same transaction as the
//! ledger row, so this layer only validates and orchestrates.

use tracing::{info, instrument};
use validator::Validate;

use quill_core::entities::{Article, Bookmark, Comment};
use quill_core::{DomainError, Snowflake};

use crate::dto::requests::{ClapRequest, CreateCommentRequest};
use crate::dto::responses::{BookmarkResponse, ClapResponse, CommentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a batched clap
    ///
    /// The per-user count is capped at 50; a clap that would exceed the cap
    /// partially applies, and one at the cap applies zero and still
    /// succeeds. The article counter always equals the sum of stored
    /// per-user counts.
    #[instrument(skip(self, request))]
    pub async fn clap(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
        request: ClapRequest,
    ) -> ServiceResult<ClapResponse> {
        if request.count < 1 {
            return Err(DomainError::InvalidClapDelta.into());
        }

        let article = self.require_published(article_id).await?;

        let totals = self
            .ctx
            .engagement_repo()
            .apply_clap(user_id, article_id, article.author_id, request.count)
            .await?;

        info!(
            article_id = %article_id,
            user_id = %user_id,
            applied = totals.applied_delta,
            "Clap applied"
        );

        Ok(ClapResponse {
            article_id: article_id.to_string(),
            user_claps: totals.user_total,
            total_claps: totals.article_total,
            applied: totals.applied_delta,
        })
    }

    /// Add a comment or a reply
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;

        let article = self.require_published(article_id).await?;

        let parent_id = request
            .parent_id
            .as_deref()
            .map(str::parse::<Snowflake>)
            .transpose()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        if let Some(parent_id) = parent_id {
            let parent = self
                .ctx
                .engagement_repo()
                .find_comment(parent_id)
                .await?
                .ok_or(DomainError::CommentNotFound(parent_id))?;
            if parent.article_id != article_id {
                return Err(DomainError::ParentCommentMismatch.into());
            }
            // Replies stay one level deep.
            if parent.is_reply() {
                return Err(DomainError::ReplyDepthExceeded.into());
            }
        }

        let id = self.ctx.generate_id();
        let mut comment = match parent_id {
            Some(parent_id) => {
                Comment::new_reply(id, article_id, user_id, request.content, parent_id)
            }
            None => Comment::new(id, article_id, user_id, request.content),
        };
        comment.is_author_reply = user_id == article.author_id;

        self.ctx.engagement_repo().create_comment(&comment).await?;

        info!(
            comment_id = %id,
            article_id = %article_id,
            is_reply = comment.is_reply(),
            "Comment created"
        );

        Ok(CommentResponse::from(comment))
    }

    /// Delete a comment, cascading to its replies
    ///
    /// Allowed for the comment's author and for the article's author.
    /// Returns the number of comments removed.
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        user_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<i64> {
        let comment = self
            .ctx
            .engagement_repo()
            .find_comment(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if comment.author_id != user_id {
            let article = self.require_article(comment.article_id).await?;
            if article.author_id != user_id {
                return Err(DomainError::NotCommentAuthor.into());
            }
        }

        let removed = self
            .ctx
            .engagement_repo()
            .delete_comment_cascade(&comment)
            .await?;

        info!(comment_id = %comment_id, removed, "Comment deleted");

        Ok(removed)
    }

    /// Bookmark an article (idempotent)
    #[instrument(skip(self))]
    pub async fn bookmark(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
    ) -> ServiceResult<BookmarkResponse> {
        self.require_published(article_id).await?;

        let bookmark = Bookmark::new(user_id, article_id);
        let changed = self.ctx.engagement_repo().add_bookmark(&bookmark).await?;

        if changed {
            info!(article_id = %article_id, user_id = %user_id, "Bookmarked");
        }

        Ok(BookmarkResponse {
            article_id: article_id.to_string(),
            bookmarked: true,
            changed,
        })
    }

    /// Remove a bookmark (idempotent)
    #[instrument(skip(self))]
    pub async fn unbookmark(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
    ) -> ServiceResult<BookmarkResponse> {
        self.require_article(article_id).await?;

        let changed = self
            .ctx
            .engagement_repo()
            .remove_bookmark(user_id, article_id)
            .await?;

        if changed {
            info!(article_id = %article_id, user_id = %user_id, "Bookmark removed");
        }

        Ok(BookmarkResponse {
            article_id: article_id.to_string(),
            bookmarked: false,
            changed,
        })
    }

    /// Count a view
    #[instrument(skip(self))]
    pub async fn record_view(&self, article_id: Snowflake) -> ServiceResult<()> {
        self.require_published(article_id).await?;
        self.ctx.article_repo().record_view(article_id).await?;
        Ok(())
    }

    /// Count a completed read
    #[instrument(skip(self))]
    pub async fn record_read(&self, article_id: Snowflake) -> ServiceResult<()> {
        self.require_published(article_id).await?;
        self.ctx.article_repo().record_read(article_id).await?;
        Ok(())
    }

    async fn require_article(&self, article_id: Snowflake) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", article_id.to_string()))
    }

    /// Engagement targets published articles only; drafts and archived
    /// articles look like missing articles to readers.
    async fn require_published(&self, article_id: Snowflake) -> ServiceResult<Article> {
        let article = self.require_article(article_id).await?;
        if !article.is_published() {
            return Err(ServiceError::not_found("Article", article_id.to_string()));
        }
        Ok(article)
    }
}
