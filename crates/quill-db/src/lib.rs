//! # quill-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `quill-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Denormalized counters (claps, comments, bookmarks, follows) are only
//! written here, inside the same transaction as the ledger row they
//! aggregate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quill_db::pool::{create_pool, DatabaseConfig};
//! use quill_db::repositories::PgArticleRepository;
//! use quill_core::traits::ArticleRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let articles = PgArticleRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgArticleRepository, PgEngagementRepository, PgFollowRepository, PgUserRepository,
};
