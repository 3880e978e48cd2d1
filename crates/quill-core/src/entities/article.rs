//! Article entity - a draft that can transition to an immutable published post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Lifecycle state of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Unlisted,
    Archived,
}

impl ArticleStatus {
    /// Administrative transitions allowed after publish.
    ///
    /// Draft -> Published goes through the publish operation (slug
    /// assignment, validation) and is deliberately not representable here.
    pub fn can_transition_to(self, to: ArticleStatus) -> bool {
        matches!(
            (self, to),
            (Self::Published, Self::Unlisted)
                | (Self::Published, Self::Archived)
                | (Self::Unlisted, Self::Archived)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Unlisted => "unlisted",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "unlisted" => Ok(Self::Unlisted),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::InternalError(format!(
                "unknown article status: {other}"
            ))),
        }
    }
}

/// The field set an autosave replaces wholesale (last-writer-wins)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftFields {
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    /// Rendered form, produced by an external collaborator. Mirrors the raw
    /// content when no renderer has run yet.
    pub content_html: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub is_member_only: bool,
}

/// Article entity
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    pub content_html: String,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub is_member_only: bool,
    pub status: ArticleStatus,
    /// Assigned only at publish; unique per author
    pub slug: Option<String>,
    pub reading_time_minutes: i32,
    // Denormalized counters, written only by the engagement repositories
    pub claps_count: i64,
    pub comments_count: i32,
    pub bookmarks_count: i32,
    pub views_count: i64,
    pub reads_count: i64,
    pub autosave_version: i32,
    pub last_autosave: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a fresh draft from a first autosave
    pub fn new_draft(id: Snowflake, author_id: Snowflake, fields: DraftFields) -> Self {
        let now = Utc::now();
        let content_html = fields
            .content_html
            .unwrap_or_else(|| fields.content.clone());
        Self {
            id,
            author_id,
            title: fields.title,
            subtitle: fields.subtitle,
            content: fields.content,
            content_html,
            excerpt: fields.excerpt,
            tags: fields.tags,
            categories: fields.categories,
            is_member_only: fields.is_member_only,
            status: ArticleStatus::Draft,
            slug: None,
            reading_time_minutes: 1,
            claps_count: 0,
            comments_count: 0,
            bookmarks_count: 0,
            views_count: 0,
            reads_count: 0,
            autosave_version: 1,
            last_autosave: Some(now),
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_draft(&self) -> bool {
        self.status == ArticleStatus::Draft
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    /// Replace the draft field set and advance the autosave version by
    /// exactly one. Duplicate delivery of the same save is harmless: it
    /// rewrites identical values and bumps the version again.
    pub fn apply_autosave(&mut self, fields: DraftFields, saved_at: DateTime<Utc>) {
        self.content_html = fields
            .content_html
            .unwrap_or_else(|| fields.content.clone());
        self.title = fields.title;
        self.subtitle = fields.subtitle;
        self.content = fields.content;
        self.excerpt = fields.excerpt;
        self.tags = fields.tags;
        self.categories = fields.categories;
        self.is_member_only = fields.is_member_only;
        self.autosave_version += 1;
        self.last_autosave = Some(saved_at);
        self.updated_at = saved_at;
    }

    /// Publish preconditions: non-empty title and body
    pub fn validate_for_publish(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::TitleRequired);
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::ContentRequired);
        }
        Ok(())
    }
}
