//! Request fixtures

use quill_service::dto::requests::{ClapRequest, CreateCommentRequest, DraftContentRequest};

/// Draft request with the given title and content
pub fn draft_request(title: &str, content: &str) -> DraftContentRequest {
    DraftContentRequest {
        title: title.to_string(),
        content: content.to_string(),
        ..DraftContentRequest::default()
    }
}

/// Clap request for a given count
pub fn clap(count: i32) -> ClapRequest {
    ClapRequest { count }
}

/// Top-level comment request
pub fn comment(content: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        content: content.to_string(),
        parent_id: None,
    }
}

/// Reply request
pub fn reply(content: &str, parent_id: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        content: content.to_string(),
        parent_id: Some(parent_id.to_string()),
    }
}

/// Content with exactly `words` words
pub fn content_of_words(words: usize) -> String {
    vec!["word"; words].join(" ")
}
