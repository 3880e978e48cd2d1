//! Testing utilities for the quill workspace
//!
//! In-memory implementations of the repository traits plus fixtures.
//! The store serializes every operation behind one lock, which models the
//! transactional all-or-nothing behavior the PostgreSQL repositories get
//! from real transactions.

mod fixtures;
mod repositories;
mod store;

pub use fixtures::{draft_fields, seed_draft, seed_published_article, seed_user};
pub use repositories::{
    MemoryArticleRepository, MemoryEngagementRepository, MemoryFollowRepository,
    MemoryUserRepository,
};
pub use store::MemoryStore;
