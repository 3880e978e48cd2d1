//! Test fixtures

use chrono::Utc;

use quill_core::entities::{Article, ArticleStatus, DraftFields, User};
use quill_core::Snowflake;

use crate::store::MemoryStore;

/// Draft field set with the given title and content
pub fn draft_fields(title: &str, content: &str) -> DraftFields {
    DraftFields {
        title: title.to_string(),
        content: content.to_string(),
        ..DraftFields::default()
    }
}

/// Seed a user row and return it
pub fn seed_user(store: &MemoryStore, id: i64, username: &str) -> User {
    let user = User::new(Snowflake::new(id), username.to_string());
    store.insert_user(user.clone());
    user
}

/// Seed a draft and return it
pub fn seed_draft(store: &MemoryStore, id: i64, author_id: i64, title: &str) -> Article {
    let article = Article::new_draft(
        Snowflake::new(id),
        Snowflake::new(author_id),
        draft_fields(title, "Some draft content for testing."),
    );
    store.insert_article(article.clone());
    article
}

/// Seed an already-published article and return it
pub fn seed_published_article(
    store: &MemoryStore,
    id: i64,
    author_id: i64,
    title: &str,
    slug: &str,
) -> Article {
    let mut article = Article::new_draft(
        Snowflake::new(id),
        Snowflake::new(author_id),
        draft_fields(title, "Some published content for testing."),
    );
    article.status = ArticleStatus::Published;
    article.slug = Some(slug.to_string());
    article.published_at = Some(Utc::now());
    store.insert_article(article.clone());
    article
}
