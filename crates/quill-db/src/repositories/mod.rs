//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in quill-core.
//! Each repository handles database operations for a specific domain area.
//! Counter updates always share a transaction with the ledger row that
//! justifies them.

mod article;
mod engagement;
mod error;
mod follow;
mod user;

pub use article::PgArticleRepository;
pub use engagement::PgEngagementRepository;
pub use follow::PgFollowRepository;
pub use user::PgUserRepository;
