//! In-memory implementations of the repository traits
//!
//! Semantics mirror the PostgreSQL layer: compare-and-swap guards,
//! idempotent inserts and deletes, and counters that move together with
//! their ledger rows under one lock acquisition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use quill_core::entities::{Article, ArticleStatus, Bookmark, Clap, Comment, DraftFields, FollowEdge, User};
use quill_core::traits::{
    ArticleRepository, ClapTotals, EngagementRepository, FollowRepository, RepoResult,
    UserRepository,
};
use quill_core::{DomainError, Snowflake};

use crate::store::MemoryStore;

/// In-memory ArticleRepository
#[derive(Clone)]
pub struct MemoryArticleRepository {
    store: MemoryStore,
}

impl MemoryArticleRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>> {
        Ok(self.store.inner.lock().articles.get(&id.into_inner()).cloned())
    }

    async fn create_draft(&self, article: &Article) -> RepoResult<()> {
        self.store
            .inner
            .lock()
            .articles
            .insert(article.id.into_inner(), article.clone());
        Ok(())
    }

    async fn apply_autosave(
        &self,
        id: Snowflake,
        fields: &DraftFields,
        saved_at: DateTime<Utc>,
    ) -> RepoResult<Option<i32>> {
        let mut inner = self.store.inner.lock();
        let Some(article) = inner.articles.get_mut(&id.into_inner()) else {
            return Ok(None);
        };
        if !article.is_draft() {
            return Ok(None);
        }
        article.apply_autosave(fields.clone(), saved_at);
        Ok(Some(article.autosave_version))
    }

    async fn slugs_for_author(&self, author_id: Snowflake) -> RepoResult<Vec<String>> {
        Ok(self
            .store
            .inner
            .lock()
            .articles
            .values()
            .filter(|a| a.author_id == author_id)
            .filter_map(|a| a.slug.clone())
            .collect())
    }

    async fn publish(
        &self,
        id: Snowflake,
        slug: &str,
        excerpt: &str,
        reading_time_minutes: i32,
        published_at: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let mut inner = self.store.inner.lock();
        let Some(author_id) = inner.articles.get(&id.into_inner()).map(|a| a.author_id) else {
            return Ok(false);
        };
        // Same backstop as the partial unique index on (author_id, slug).
        let taken = inner.articles.values().any(|a| {
            a.id != id && a.author_id == author_id && a.slug.as_deref() == Some(slug)
        });
        if taken {
            return Err(DomainError::SlugTaken(slug.to_string()));
        }

        let Some(article) = inner.articles.get_mut(&id.into_inner()) else {
            return Ok(false);
        };
        if !article.is_draft() {
            return Ok(false);
        }
        article.status = ArticleStatus::Published;
        article.slug = Some(slug.to_string());
        article.excerpt = Some(excerpt.to_string());
        article.reading_time_minutes = reading_time_minutes;
        article.published_at = Some(published_at);
        article.updated_at = published_at;
        Ok(true)
    }

    async fn set_status(
        &self,
        id: Snowflake,
        from: ArticleStatus,
        to: ArticleStatus,
    ) -> RepoResult<bool> {
        let mut inner = self.store.inner.lock();
        let Some(article) = inner.articles.get_mut(&id.into_inner()) else {
            return Ok(false);
        };
        if article.status != from {
            return Ok(false);
        }
        article.status = to;
        article.updated_at = Utc::now();
        Ok(true)
    }

    async fn record_view(&self, id: Snowflake) -> RepoResult<()> {
        if let Some(article) = self.store.inner.lock().articles.get_mut(&id.into_inner()) {
            article.views_count += 1;
        }
        Ok(())
    }

    async fn record_read(&self, id: Snowflake) -> RepoResult<()> {
        if let Some(article) = self.store.inner.lock().articles.get_mut(&id.into_inner()) {
            article.reads_count += 1;
        }
        Ok(())
    }
}

/// In-memory EngagementRepository
#[derive(Clone)]
pub struct MemoryEngagementRepository {
    store: MemoryStore,
}

impl MemoryEngagementRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EngagementRepository for MemoryEngagementRepository {
    async fn find_clap(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
    ) -> RepoResult<Option<Clap>> {
        Ok(self
            .store
            .inner
            .lock()
            .claps
            .get(&(user_id.into_inner(), article_id.into_inner()))
            .cloned())
    }

    async fn apply_clap(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
        author_id: Snowflake,
        delta: i32,
    ) -> RepoResult<ClapTotals> {
        let mut inner = self.store.inner.lock();
        if !inner.articles.contains_key(&article_id.into_inner()) {
            return Err(DomainError::ArticleNotFound(article_id));
        }

        let key = (user_id.into_inner(), article_id.into_inner());
        let existing = inner.claps.get(&key).map_or(0, |c| c.count);
        let applied = Clap::apply(existing, delta);

        match inner.claps.get_mut(&key) {
            Some(clap) => {
                clap.count = applied.new_count;
                clap.updated_at = Utc::now();
            }
            None => {
                inner
                    .claps
                    .insert(key, Clap::new(user_id, article_id, applied.new_count));
            }
        }

        if applied.applied_delta > 0 {
            if let Some(article) = inner.articles.get_mut(&article_id.into_inner()) {
                article.claps_count += i64::from(applied.applied_delta);
            }
            if let Some(author) = inner.users.get_mut(&author_id.into_inner()) {
                author.total_claps_received += i64::from(applied.applied_delta);
            }
        }

        let article_total = inner
            .articles
            .get(&article_id.into_inner())
            .map_or(0, |a| a.claps_count);

        Ok(ClapTotals {
            user_total: applied.new_count,
            article_total,
            applied_delta: applied.applied_delta,
        })
    }

    async fn find_comment(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.store.inner.lock().comments.get(&id.into_inner()).cloned())
    }

    async fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
        let mut inner = self.store.inner.lock();
        inner
            .comments
            .insert(comment.id.into_inner(), comment.clone());
        if let Some(article) = inner.articles.get_mut(&comment.article_id.into_inner()) {
            article.comments_count += 1;
        }
        if let Some(parent_id) = comment.parent_id {
            if let Some(parent) = inner.comments.get_mut(&parent_id.into_inner()) {
                parent.replies_count += 1;
            }
        }
        Ok(())
    }

    async fn delete_comment_cascade(&self, comment: &Comment) -> RepoResult<i64> {
        let mut inner = self.store.inner.lock();

        let reply_ids: Vec<i64> = inner
            .comments
            .values()
            .filter(|c| c.parent_id == Some(comment.id))
            .map(|c| c.id.into_inner())
            .collect();
        for id in &reply_ids {
            inner.comments.remove(id);
        }

        let target_removed = inner.comments.remove(&comment.id.into_inner()).is_some();
        let mut removed = reply_ids.len() as i64;
        if target_removed {
            removed += 1;
        }

        if removed > 0 {
            if let Some(article) = inner.articles.get_mut(&comment.article_id.into_inner()) {
                article.comments_count = (article.comments_count - removed as i32).max(0);
            }
        }
        // A duplicate delete must not move the parent's count again.
        if target_removed {
            if let Some(parent_id) = comment.parent_id {
                if let Some(parent) = inner.comments.get_mut(&parent_id.into_inner()) {
                    parent.replies_count = (parent.replies_count - 1).max(0);
                }
            }
        }

        Ok(removed)
    }

    async fn is_bookmarked(&self, user_id: Snowflake, article_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .store
            .inner
            .lock()
            .bookmarks
            .contains_key(&(user_id.into_inner(), article_id.into_inner())))
    }

    async fn add_bookmark(&self, bookmark: &Bookmark) -> RepoResult<bool> {
        let mut inner = self.store.inner.lock();
        let key = (
            bookmark.user_id.into_inner(),
            bookmark.article_id.into_inner(),
        );
        if inner.bookmarks.contains_key(&key) {
            return Ok(false);
        }
        inner.bookmarks.insert(key, bookmark.clone());
        if let Some(article) = inner.articles.get_mut(&bookmark.article_id.into_inner()) {
            article.bookmarks_count += 1;
        }
        Ok(true)
    }

    async fn remove_bookmark(
        &self,
        user_id: Snowflake,
        article_id: Snowflake,
    ) -> RepoResult<bool> {
        let mut inner = self.store.inner.lock();
        let key = (user_id.into_inner(), article_id.into_inner());
        if inner.bookmarks.remove(&key).is_none() {
            return Ok(false);
        }
        if let Some(article) = inner.articles.get_mut(&article_id.into_inner()) {
            article.bookmarks_count = (article.bookmarks_count - 1).max(0);
        }
        Ok(true)
    }
}

/// In-memory FollowRepository
#[derive(Clone)]
pub struct MemoryFollowRepository {
    store: MemoryStore,
}

impl MemoryFollowRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FollowRepository for MemoryFollowRepository {
    async fn is_following(
        &self,
        follower_id: Snowflake,
        following_id: Snowflake,
    ) -> RepoResult<bool> {
        Ok(self
            .store
            .inner
            .lock()
            .follows
            .contains_key(&(follower_id.into_inner(), following_id.into_inner())))
    }

    async fn create(&self, edge: &FollowEdge) -> RepoResult<bool> {
        let mut inner = self.store.inner.lock();
        let key = (edge.follower_id.into_inner(), edge.following_id.into_inner());
        if inner.follows.contains_key(&key) {
            return Ok(false);
        }
        inner.follows.insert(key, edge.clone());
        if let Some(follower) = inner.users.get_mut(&edge.follower_id.into_inner()) {
            follower.following_count += 1;
        }
        if let Some(followee) = inner.users.get_mut(&edge.following_id.into_inner()) {
            followee.followers_count += 1;
        }
        Ok(true)
    }

    async fn delete(&self, follower_id: Snowflake, following_id: Snowflake) -> RepoResult<bool> {
        let mut inner = self.store.inner.lock();
        let key = (follower_id.into_inner(), following_id.into_inner());
        if inner.follows.remove(&key).is_none() {
            return Ok(false);
        }
        if let Some(follower) = inner.users.get_mut(&follower_id.into_inner()) {
            follower.following_count = (follower.following_count - 1).max(0);
        }
        if let Some(followee) = inner.users.get_mut(&following_id.into_inner()) {
            followee.followers_count = (followee.followers_count - 1).max(0);
        }
        Ok(true)
    }
}

/// In-memory UserRepository
#[derive(Clone)]
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.store.inner.lock().users.get(&id.into_inner()).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut inner = self.store.inner.lock();
        if inner.users.values().any(|u| u.username == user.username) {
            return Err(DomainError::ValidationError(format!(
                "username already taken: {}",
                user.username
            )));
        }
        inner.users.insert(user.id.into_inner(), user.clone());
        Ok(())
    }

    async fn update_profile(&self, id: Snowflake, display_name: Option<&str>) -> RepoResult<()> {
        let mut inner = self.store.inner.lock();
        let Some(user) = inner.users.get_mut(&id.into_inner()) else {
            return Err(DomainError::UserNotFound(id));
        };
        user.display_name = display_name.map(str::to_string);
        user.updated_at = Utc::now();
        Ok(())
    }
}
