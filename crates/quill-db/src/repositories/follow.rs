//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use quill_core::entities::FollowEdge;
use quill_core::traits::{FollowRepository, RepoResult};
use quill_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn is_following(
        &self,
        follower_id: Snowflake,
        following_id: Snowflake,
    ) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM follows WHERE follower_id = $1 AND following_id = $2
            )
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, edge))]
    async fn create(&self, edge: &FollowEdge) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO follows (follower_id, following_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (follower_id, following_id) DO NOTHING
            "#,
        )
        .bind(edge.follower_id.into_inner())
        .bind(edge.following_id.into_inner())
        .bind(edge.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected()
            == 1;

        if inserted {
            sqlx::query(
                r#"
                UPDATE users SET following_count = following_count + 1 WHERE id = $1
                "#,
            )
            .bind(edge.follower_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            sqlx::query(
                r#"
                UPDATE users SET followers_count = followers_count + 1 WHERE id = $1
                "#,
            )
            .bind(edge.following_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: Snowflake, following_id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query(
            r#"
            DELETE FROM follows WHERE follower_id = $1 AND following_id = $2
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected()
            == 1;

        if removed {
            sqlx::query(
                r#"
                UPDATE users
                SET following_count = GREATEST(following_count - 1, 0)
                WHERE id = $1
                "#,
            )
            .bind(follower_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            sqlx::query(
                r#"
                UPDATE users
                SET followers_count = GREATEST(followers_count - 1, 0)
                WHERE id = $1
                "#,
            )
            .bind(following_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgFollowRepository>();
    }
}
