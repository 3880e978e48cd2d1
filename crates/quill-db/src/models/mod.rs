//! Database models - SQLx-compatible structs for PostgreSQL tables

mod article;
mod clap;
mod comment;
mod user;

pub use article::ArticleModel;
pub use clap::ClapModel;
pub use comment::CommentModel;
pub use user::UserModel;
