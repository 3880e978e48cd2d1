//! PostgreSQL implementation of ArticleRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use quill_core::entities::{Article, ArticleStatus, DraftFields};
use quill_core::traits::{ArticleRepository, RepoResult};
use quill_core::value_objects::Snowflake;

use crate::mappers::ArticleInsert;
use crate::models::ArticleModel;

use super::error::{map_db_error, map_unique_violation};

const ARTICLE_COLUMNS: &str = r#"
    id, author_id, title, subtitle, content, content_html, excerpt,
    tags, categories, is_member_only, status, slug, reading_time_minutes,
    claps_count, comments_count, bookmarks_count, views_count, reads_count,
    autosave_version, last_autosave, published_at, created_at, updated_at
"#;

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Article::try_from).transpose()
    }

    #[instrument(skip(self, article))]
    async fn create_draft(&self, article: &Article) -> RepoResult<()> {
        let insert = ArticleInsert::new(article);

        sqlx::query(
            r#"
            INSERT INTO articles (
                id, author_id, title, subtitle, content, content_html, excerpt,
                tags, categories, is_member_only, status, autosave_version,
                last_autosave, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14)
            "#,
        )
        .bind(insert.id)
        .bind(insert.author_id)
        .bind(insert.title)
        .bind(insert.subtitle)
        .bind(insert.content)
        .bind(insert.content_html)
        .bind(insert.excerpt)
        .bind(insert.tags)
        .bind(insert.categories)
        .bind(insert.is_member_only)
        .bind(insert.status)
        .bind(insert.autosave_version)
        .bind(article.last_autosave)
        .bind(article.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, fields))]
    async fn apply_autosave(
        &self,
        id: Snowflake,
        fields: &DraftFields,
        saved_at: DateTime<Utc>,
    ) -> RepoResult<Option<i32>> {
        // Draft guard in the WHERE clause keeps a save that raced a publish
        // from mutating a published row.
        let content_html = fields.content_html.as_deref().unwrap_or(&fields.content);

        let new_version = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE articles
            SET title = $2,
                subtitle = $3,
                content = $4,
                content_html = $5,
                excerpt = $6,
                tags = $7,
                categories = $8,
                is_member_only = $9,
                autosave_version = autosave_version + 1,
                last_autosave = $10,
                updated_at = $10
            WHERE id = $1 AND status = 'draft'
            RETURNING autosave_version
            "#,
        )
        .bind(id.into_inner())
        .bind(&fields.title)
        .bind(fields.subtitle.as_deref())
        .bind(&fields.content)
        .bind(content_html)
        .bind(fields.excerpt.as_deref())
        .bind(sqlx::types::Json(&fields.tags))
        .bind(sqlx::types::Json(&fields.categories))
        .bind(fields.is_member_only)
        .bind(saved_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(new_version)
    }

    #[instrument(skip(self))]
    async fn slugs_for_author(&self, author_id: Snowflake) -> RepoResult<Vec<String>> {
        let slugs = sqlx::query_scalar::<_, String>(
            r#"
            SELECT slug FROM articles
            WHERE author_id = $1 AND slug IS NOT NULL
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(slugs)
    }

    #[instrument(skip(self, excerpt))]
    async fn publish(
        &self,
        id: Snowflake,
        slug: &str,
        excerpt: &str,
        reading_time_minutes: i32,
        published_at: DateTime<Utc>,
    ) -> RepoResult<bool> {
        // Compare-and-swap on status: of two racing publishers exactly one
        // sees rows_affected == 1.
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET status = 'published',
                slug = $2,
                excerpt = $3,
                reading_time_minutes = $4,
                published_at = $5,
                updated_at = $5
            WHERE id = $1 AND status = 'draft'
            "#,
        )
        .bind(id.into_inner())
        .bind(slug)
        .bind(excerpt)
        .bind(reading_time_minutes)
        .bind(published_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || quill_core::DomainError::SlugTaken(slug.to_string()))
        })?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        id: Snowflake,
        from: ArticleStatus,
        to: ArticleStatus,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(from.as_str())
        .bind(to.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn record_view(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE articles SET views_count = views_count + 1 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_read(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE articles SET reads_count = reads_count + 1 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgArticleRepository>();
    }
}
