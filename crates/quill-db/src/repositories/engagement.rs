//! PostgreSQL implementation of EngagementRepository
//!
//! Claps, comments and bookmarks are ledgers; the matching counters on
//! articles, comments and users move inside the same transaction.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use quill_core::entities::{Bookmark, Clap, Comment};
use quill_core::traits::{ClapTotals, EngagementRepository, RepoResult};
use quill_core::value_objects::Snowflake;

use crate::mappers::CommentInsert;
use crate::models::{ClapModel, CommentModel};

use super::error::map_db_error;

/// PostgreSQL implementation of EngagementRepository
#[derive(Clone)]
pub struct PgEngagementRepository {
    pool: PgPool,
}

impl PgEngagementRepository {
    /// Create a new PgEngagementRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngagementRepository for PgEngagementRepository {
    #[instrument(skip(self))]
    async fn find_clap(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
    ) -> RepoResult<Option<Clap>> {
        let result = sqlx::query_as::<_, ClapModel>(
            r#"
            SELECT user_id, article_id, count, created_at, updated_at
            FROM claps
            WHERE user_id = $1 AND article_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(article_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Clap::from))
    }

    #[instrument(skip(self))]
    async fn apply_clap(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
        author_id: Snowflake,
        delta: i32,
    ) -> RepoResult<ClapTotals> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Row lock serializes concurrent claps from the same user, so the
        // cap arithmetic always sees the latest committed count.
        let existing = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT count FROM claps
            WHERE user_id = $1 AND article_id = $2
            FOR UPDATE
            "#,
        )
        .bind(user_id.into_inner())
        .bind(article_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .unwrap_or(0);

        let applied = Clap::apply(existing, delta);

        sqlx::query(
            r#"
            INSERT INTO claps (user_id, article_id, count, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (user_id, article_id)
            DO UPDATE SET count = $3, updated_at = NOW()
            "#,
        )
        .bind(user_id.into_inner())
        .bind(article_id.into_inner())
        .bind(applied.new_count)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let article_total = if applied.applied_delta > 0 {
            let total = sqlx::query_scalar::<_, i64>(
                r#"
                UPDATE articles
                SET claps_count = claps_count + $2
                WHERE id = $1
                RETURNING claps_count
                "#,
            )
            .bind(article_id.into_inner())
            .bind(i64::from(applied.applied_delta))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            sqlx::query(
                r#"
                UPDATE users
                SET total_claps_received = total_claps_received + $2
                WHERE id = $1
                "#,
            )
            .bind(author_id.into_inner())
            .bind(i64::from(applied.applied_delta))
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            total
        } else {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT claps_count FROM articles WHERE id = $1
                "#,
            )
            .bind(article_id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(ClapTotals {
            user_total: applied.new_count,
            article_total,
            applied_delta: applied.applied_delta,
        })
    }

    #[instrument(skip(self))]
    async fn find_comment(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, article_id, author_id, parent_id, content,
                   replies_count, is_author_reply, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self, comment))]
    async fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
        let insert = CommentInsert::new(comment);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO comments (
                id, article_id, author_id, parent_id, content,
                is_author_reply, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.article_id)
        .bind(insert.author_id)
        .bind(insert.parent_id)
        .bind(insert.content)
        .bind(insert.is_author_reply)
        .bind(comment.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            UPDATE articles SET comments_count = comments_count + 1 WHERE id = $1
            "#,
        )
        .bind(insert.article_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if let Some(parent_id) = insert.parent_id {
            sqlx::query(
                r#"
                UPDATE comments SET replies_count = replies_count + 1 WHERE id = $1
                "#,
            )
            .bind(parent_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self, comment))]
    async fn delete_comment_cascade(&self, comment: &Comment) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Replies are at most one level deep, so a single sweep suffices.
        let replies = sqlx::query(
            r#"
            DELETE FROM comments WHERE parent_id = $1
            "#,
        )
        .bind(comment.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let removed = sqlx::query(
            r#"
            DELETE FROM comments WHERE id = $1
            "#,
        )
        .bind(comment.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let total = (replies + removed) as i64;

        if total > 0 {
            sqlx::query(
                r#"
                UPDATE articles
                SET comments_count = GREATEST(comments_count - $2, 0)
                WHERE id = $1
                "#,
            )
            .bind(comment.article_id.into_inner())
            .bind(i32::try_from(total).unwrap_or(i32::MAX))
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        // A duplicate delete must not move the parent's count again.
        if removed == 1 {
            if let Some(parent_id) = comment.parent_id {
                sqlx::query(
                    r#"
                    UPDATE comments
                    SET replies_count = GREATEST(replies_count - 1, 0)
                    WHERE id = $1
                    "#,
                )
                .bind(parent_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn is_bookmarked(&self, user_id: Snowflake, article_id: Snowflake) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM bookmarks WHERE user_id = $1 AND article_id = $2
            )
            "#,
        )
        .bind(user_id.into_inner())
        .bind(article_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, bookmark))]
    async fn add_bookmark(&self, bookmark: &Bookmark) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO bookmarks (user_id, article_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, article_id) DO NOTHING
            "#,
        )
        .bind(bookmark.user_id.into_inner())
        .bind(bookmark.article_id.into_inner())
        .bind(bookmark.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected()
            == 1;

        if inserted {
            sqlx::query(
                r#"
                UPDATE articles SET bookmarks_count = bookmarks_count + 1 WHERE id = $1
                "#,
            )
            .bind(bookmark.article_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn remove_bookmark(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
    ) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query(
            r#"
            DELETE FROM bookmarks WHERE user_id = $1 AND article_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(article_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected()
            == 1;

        if removed {
            sqlx::query(
                r#"
                UPDATE articles
                SET bookmarks_count = GREATEST(bookmarks_count - 1, 0)
                WHERE id = $1
                "#,
            )
            .bind(article_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(removed)
    }
}
