//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize`, plus `Validate` where field-level
//! rules apply.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Draft Requests
// ============================================================================

/// Full draft field set, used both for draft creation and autosave.
///
/// Autosave is last-writer-wins over the whole set; partial patches are
/// deliberately not supported.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DraftContentRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    #[validate(length(max = 300, message = "Subtitle must be at most 300 characters"))]
    pub subtitle: Option<String>,

    #[validate(length(max = 200_000, message = "Content must be at most 200000 characters"))]
    pub content: String,

    /// Pre-rendered HTML, when the client rendered it
    pub content_html: Option<String>,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    #[validate(length(max = 5, message = "At most 5 tags"))]
    #[serde(default)]
    pub tags: Vec<String>,

    #[validate(length(max = 3, message = "At most 3 categories"))]
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub is_member_only: bool,
}

// ============================================================================
// Engagement Requests
// ============================================================================

/// Clap request, batched client-side
///
/// No upper bound here: a count that would push the caller past the
/// per-article cap is clamped, not rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ClapRequest {
    pub count: i32,
}

impl Default for ClapRequest {
    fn default() -> Self {
        Self { count: 1 }
    }
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,

    /// Parent comment ID (Snowflake as string) when replying
    pub parent_id: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,
}

/// Update profile request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 64, message = "Display name must be at most 64 characters"))]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clap_request_default_is_single_clap() {
        assert_eq!(ClapRequest::default().count, 1);
    }

    #[test]
    fn test_comment_request_bounds() {
        let req = CreateCommentRequest {
            content: String::new(),
            parent_id: None,
        };
        assert!(req.validate().is_err());

        let req = CreateCommentRequest {
            content: "a".repeat(2001),
            parent_id: None,
        };
        assert!(req.validate().is_err());

        let req = CreateCommentRequest {
            content: "Nice read".to_string(),
            parent_id: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_draft_request_tag_limit() {
        let req = DraftContentRequest {
            title: "t".to_string(),
            content: "c".to_string(),
            tags: (0..6).map(|i| format!("tag{i}")).collect(),
            ..DraftContentRequest::default()
        };
        assert!(req.validate().is_err());
    }
}
