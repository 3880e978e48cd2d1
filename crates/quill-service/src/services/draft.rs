//! Draft service
//!
//! Handles draft creation, autosave sequencing and draft retrieval.
//! Autosave is last-writer-wins over the full field set; the stored
//! version advances by exactly one per accepted save and the server's
//! number is authoritative.

use tracing::{info, instrument};
use validator::Validate;

use quill_core::entities::{Article, DraftFields};
use quill_core::{DomainError, Snowflake};

use crate::dto::requests::DraftContentRequest;
use crate::dto::responses::{ArticleResponse, AutosaveResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Draft service
pub struct DraftService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DraftService<'a> {
    /// Create a new DraftService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a fresh draft from its first save
    #[instrument(skip(self, request))]
    pub async fn create_draft(
        &self,
        author_id: Snowflake,
        request: DraftContentRequest,
    ) -> ServiceResult<ArticleResponse> {
        request.validate()?;
        self.check_limits(&request)?;

        let id = self.ctx.generate_id();
        let article = Article::new_draft(id, author_id, into_fields(request));
        self.ctx.article_repo().create_draft(&article).await?;

        info!(article_id = %id, author_id = %author_id, "Draft created");

        Ok(ArticleResponse::from(article))
    }

    /// Apply an autosave to an existing draft
    ///
    /// The returned version is the row's counter after this save; a client
    /// that sent save N and receives version M > N simply adopts M.
    #[instrument(skip(self, request))]
    pub async fn autosave(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
        request: DraftContentRequest,
    ) -> ServiceResult<AutosaveResponse> {
        request.validate()?;
        self.check_limits(&request)?;

        let article = self.require_article(article_id).await?;
        if article.author_id != author_id {
            return Err(DomainError::NotArticleAuthor.into());
        }
        if !article.is_draft() {
            return Err(DomainError::NotADraft.into());
        }

        let saved_at = chrono::Utc::now();
        let fields = into_fields(request);

        // The repository re-checks draft status inside the update, so a
        // publish that lands between our read and the write rejects the save.
        let new_version = self
            .ctx
            .article_repo()
            .apply_autosave(article_id, &fields, saved_at)
            .await?
            .ok_or(DomainError::NotADraft)?;

        info!(
            article_id = %article_id,
            autosave_version = new_version,
            "Draft autosaved"
        );

        Ok(AutosaveResponse {
            article_id: article_id.to_string(),
            autosave_version: new_version,
            saved_at,
        })
    }

    /// Fetch a draft for its author
    #[instrument(skip(self))]
    pub async fn get_draft(
        &self,
        article_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<ArticleResponse> {
        let article = self.require_article(article_id).await?;
        if article.author_id != author_id {
            return Err(DomainError::NotArticleAuthor.into());
        }

        Ok(ArticleResponse::from(article))
    }

    async fn require_article(&self, article_id: Snowflake) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", article_id.to_string()))
    }

    fn check_limits(&self, request: &DraftContentRequest) -> ServiceResult<()> {
        let limits = self.ctx.editorial();
        if request.content.chars().count() > limits.max_content_chars {
            return Err(DomainError::ContentTooLong {
                max: limits.max_content_chars,
            }
            .into());
        }
        if request.tags.len() > limits.max_tags {
            return Err(ServiceError::validation(format!(
                "at most {} tags allowed",
                limits.max_tags
            )));
        }
        Ok(())
    }
}

fn into_fields(request: DraftContentRequest) -> DraftFields {
    DraftFields {
        title: request.title,
        subtitle: request.subtitle,
        content: request.content,
        content_html: request.content_html,
        excerpt: request.excerpt,
        tags: request.tags,
        categories: request.categories,
        is_member_only: request.is_member_only,
    }
}
