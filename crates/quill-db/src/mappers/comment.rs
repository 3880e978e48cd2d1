//! Comment entity <-> model mapper

use quill_core::entities::Comment;
use quill_core::value_objects::Snowflake;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            article_id: Snowflake::new(model.article_id),
            author_id: Snowflake::new(model.author_id),
            parent_id: model.parent_id.map(Snowflake::new),
            content: model.content,
            replies_count: model.replies_count,
            is_author_reply: model.is_author_reply,
            created_at: model.created_at,
        }
    }
}

/// Convert Comment entity reference to values for database insertion
pub struct CommentInsert<'a> {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    pub parent_id: Option<i64>,
    pub content: &'a str,
    pub is_author_reply: bool,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            article_id: comment.article_id.into_inner(),
            author_id: comment.author_id.into_inner(),
            parent_id: comment.parent_id.map(Snowflake::into_inner),
            content: &comment.content,
            is_author_reply: comment.is_author_reply,
        }
    }
}
