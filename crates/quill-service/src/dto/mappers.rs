//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use quill_core::entities::{Article, Comment, User};

use super::responses::{ArticleResponse, CommentResponse, UserResponse};

// ============================================================================
// Article Mappers
// ============================================================================

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.to_string(),
            author_id: article.author_id.to_string(),
            title: article.title.clone(),
            subtitle: article.subtitle.clone(),
            content: article.content.clone(),
            content_html: article.content_html.clone(),
            excerpt: article.excerpt.clone(),
            tags: article.tags.clone(),
            categories: article.categories.clone(),
            is_member_only: article.is_member_only,
            status: article.status.as_str().to_string(),
            slug: article.slug.clone(),
            reading_time_minutes: article.reading_time_minutes,
            claps_count: article.claps_count,
            comments_count: article.comments_count,
            bookmarks_count: article.bookmarks_count,
            views_count: article.views_count,
            reads_count: article.reads_count,
            autosave_version: article.autosave_version,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self::from(&article)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            article_id: comment.article_id.to_string(),
            author_id: comment.author_id.to_string(),
            parent_id: comment.parent_id.map(|id| id.to_string()),
            content: comment.content.clone(),
            replies_count: comment.replies_count,
            is_author_reply: comment.is_author_reply,
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            followers_count: user.followers_count,
            following_count: user.following_count,
            total_claps_received: user.total_claps_received,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
