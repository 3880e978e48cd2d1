//! Integration test support
//!
//! Builds a full service stack over the in-memory repositories from
//! `quill-testkit`, so lifecycle and counter behavior can be exercised
//! end to end without PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use helpers::{test_context, TestStack};
