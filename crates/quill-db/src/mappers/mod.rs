//! Entity to model mappers
//!
//! This module provides conversions between domain entities (quill-core) and database models.
//! - `From<Model>`/`TryFrom<Model>` for entities: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod article;
mod clap;
mod comment;
mod user;

pub use article::ArticleInsert;
pub use comment::CommentInsert;
pub use user::UserInsert;
