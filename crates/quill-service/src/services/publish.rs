//! Publish service
//!
//! Handles the one-way draft to published transition plus the
//! administrative unlist and archive moves. Publish assigns the slug,
//! derives the excerpt and reading time, and is first-writer-wins under
//! concurrency.

use tracing::{info, instrument, warn};

use quill_core::entities::{Article, ArticleStatus};
use quill_core::value_objects::{content, slug};
use quill_core::{DomainError, Snowflake};

use crate::dto::responses::ArticleResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Retries after losing a slug uniqueness race before giving up
const MAX_SLUG_RETRIES: u32 = 3;

/// Publish service
pub struct PublishService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PublishService<'a> {
    /// Create a new PublishService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a draft
    ///
    /// Slug is derived from the title and deduplicated against the
    /// author's existing slugs. Of two concurrent publishes of the same
    /// draft exactly one wins; the loser observes the article already
    /// published.
    #[instrument(skip(self))]
    pub async fn publish(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<ArticleResponse> {
        let article = self.require_article(article_id).await?;
        if article.author_id != author_id {
            return Err(DomainError::NotArticleAuthor.into());
        }
        if article.is_published() {
            return Err(DomainError::AlreadyPublished.into());
        }
        if !article.is_draft() {
            return Err(DomainError::NotADraft.into());
        }

        article.validate_for_publish()?;

        let candidate = slug::slugify(&article.title);
        let excerpt = article
            .excerpt
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| content::derive_excerpt(&article.content));
        let reading_time = content::reading_time_minutes(&article.content);
        let published_at = chrono::Utc::now();

        // Two same-title publishes by one author can race past the slug
        // lookup; the unique index rejects the loser, who picks the next
        // free suffix and tries again.
        let mut attempts = 0;
        let (won, assigned) = loop {
            let existing = self.ctx.article_repo().slugs_for_author(author_id).await?;
            let assigned = slug::dedupe(&candidate, &existing);

            match self
                .ctx
                .article_repo()
                .publish(article_id, &assigned, &excerpt, reading_time, published_at)
                .await
            {
                Ok(won) => break (won, assigned),
                Err(DomainError::SlugTaken(taken)) if attempts < MAX_SLUG_RETRIES => {
                    attempts += 1;
                    warn!(article_id = %article_id, slug = %taken, "Slug race, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        };

        if !won {
            // Someone else flipped the status first.
            warn!(article_id = %article_id, "Lost publish race");
            return Err(DomainError::AlreadyPublished.into());
        }

        info!(
            article_id = %article_id,
            slug = %assigned,
            reading_time_minutes = reading_time,
            "Article published"
        );

        let published = self.require_article(article_id).await?;
        Ok(ArticleResponse::from(published))
    }

    /// Unlist a published article
    #[instrument(skip(self))]
    pub async fn unlist(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<ArticleResponse> {
        self.transition(article_id, author_id, ArticleStatus::Unlisted)
            .await
    }

    /// Archive a published or unlisted article
    #[instrument(skip(self))]
    pub async fn archive(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<ArticleResponse> {
        self.transition(article_id, author_id, ArticleStatus::Archived)
            .await
    }

    async fn transition(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
        to: ArticleStatus,
    ) -> ServiceResult<ArticleResponse> {
        let article = self.require_article(article_id).await?;
        if article.author_id != author_id {
            return Err(DomainError::NotArticleAuthor.into());
        }
        if !article.status.can_transition_to(to) {
            return Err(DomainError::InvalidTransition {
                from: article.status,
                to,
            }
            .into());
        }

        let moved = self
            .ctx
            .article_repo()
            .set_status(article_id, article.status, to)
            .await?;

        if !moved {
            return Err(ServiceError::conflict(format!(
                "article {article_id} changed state concurrently"
            )));
        }

        info!(article_id = %article_id, to = %to, "Article status changed");

        let updated = self.require_article(article_id).await?;
        Ok(ArticleResponse::from(updated))
    }

    async fn require_article(&self, article_id: Snowflake) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", article_id.to_string()))
    }
}
