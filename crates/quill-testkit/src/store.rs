//! Shared in-memory store backing all memory repositories

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use quill_core::entities::{Article, Bookmark, Clap, Comment, FollowEdge, User};

#[derive(Default)]
pub(crate) struct StoreInner {
    pub articles: HashMap<i64, Article>,
    pub claps: HashMap<(i64, i64), Clap>,
    pub comments: HashMap<i64, Comment>,
    pub bookmarks: HashMap<(i64, i64), Bookmark>,
    pub follows: HashMap<(i64, i64), FollowEdge>,
    pub users: HashMap<i64, User>,
}

/// Shared in-memory store
///
/// All repositories cloned from one store see the same data. The single
/// lock makes every repository call atomic, mirroring the per-call
/// transactions of the PostgreSQL layer.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub(crate) inner: Arc<Mutex<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct read access for assertions
    pub fn article(&self, id: i64) -> Option<Article> {
        self.inner.lock().articles.get(&id).cloned()
    }

    /// Direct read access for assertions
    pub fn user(&self, id: i64) -> Option<User> {
        self.inner.lock().users.get(&id).cloned()
    }

    /// Direct read access for assertions
    pub fn comment_count(&self) -> usize {
        self.inner.lock().comments.len()
    }

    /// Sum of stored per-user clap counts for an article, for checking
    /// counter consistency against the denormalized total
    pub fn clap_ledger_sum(&self, article_id: i64) -> i64 {
        self.inner
            .lock()
            .claps
            .values()
            .filter(|c| c.article_id.into_inner() == article_id)
            .map(|c| i64::from(c.count))
            .sum()
    }

    /// Seed an article row directly
    pub fn insert_article(&self, article: Article) {
        self.inner
            .lock()
            .articles
            .insert(article.id.into_inner(), article);
    }

    /// Seed a user row directly
    pub fn insert_user(&self, user: User) {
        self.inner.lock().users.insert(user.id.into_inner(), user);
    }
}
