//! Domain entities - core business objects

mod article;
mod bookmark;
mod clap;
mod comment;
mod follow;
mod user;

pub use article::{Article, ArticleStatus, DraftFields};
pub use bookmark::Bookmark;
pub use clap::{AppliedClap, Clap};
pub use comment::Comment;
pub use follow::FollowEdge;
pub use user::User;
