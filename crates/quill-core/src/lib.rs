//! # quill-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! domain errors for the article lifecycle and engagement counter service.
//! This crate has zero dependencies on infrastructure (database, transport).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AppliedClap, Article, ArticleStatus, Bookmark, Clap, Comment, DraftFields, FollowEdge, User,
};
pub use error::DomainError;
pub use traits::{
    ArticleRepository, ClapTotals, EngagementRepository, FollowRepository, RepoResult,
    UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
