//! Article entity <-> model mapper

use quill_core::entities::Article;
use quill_core::error::DomainError;
use quill_core::value_objects::Snowflake;

use crate::models::ArticleModel;

/// Convert ArticleModel to Article entity
///
/// Fallible because the status column is free text at the SQL level.
impl TryFrom<ArticleModel> for Article {
    type Error = DomainError;

    fn try_from(model: ArticleModel) -> Result<Self, Self::Error> {
        Ok(Article {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            subtitle: model.subtitle,
            content: model.content,
            content_html: model.content_html,
            excerpt: model.excerpt,
            tags: model.tags.0,
            categories: model.categories.0,
            is_member_only: model.is_member_only,
            status: model.status.parse()?,
            slug: model.slug,
            reading_time_minutes: model.reading_time_minutes,
            claps_count: model.claps_count,
            comments_count: model.comments_count,
            bookmarks_count: model.bookmarks_count,
            views_count: model.views_count,
            reads_count: model.reads_count,
            autosave_version: model.autosave_version,
            last_autosave: model.last_autosave,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert Article entity reference to values for database insertion
pub struct ArticleInsert<'a> {
    pub id: i64,
    pub author_id: i64,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub content: &'a str,
    pub content_html: &'a str,
    pub excerpt: Option<&'a str>,
    pub tags: sqlx::types::Json<&'a Vec<String>>,
    pub categories: sqlx::types::Json<&'a Vec<String>>,
    pub is_member_only: bool,
    pub status: &'static str,
    pub autosave_version: i32,
}

impl<'a> ArticleInsert<'a> {
    pub fn new(article: &'a Article) -> Self {
        Self {
            id: article.id.into_inner(),
            author_id: article.author_id.into_inner(),
            title: &article.title,
            subtitle: article.subtitle.as_deref(),
            content: &article.content,
            content_html: &article.content_html,
            excerpt: article.excerpt.as_deref(),
            tags: sqlx::types::Json(&article.tags),
            categories: sqlx::types::Json(&article.categories),
            is_member_only: article.is_member_only,
            status: article.status.as_str(),
            autosave_version: article.autosave_version,
        }
    }
}
