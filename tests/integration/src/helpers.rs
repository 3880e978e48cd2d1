//! Test stack wiring

use std::sync::Arc;

use quill_common::config::EditorialConfig;
use quill_core::SnowflakeGenerator;
use quill_service::ServiceContext;
use quill_testkit::{
    MemoryArticleRepository, MemoryEngagementRepository, MemoryFollowRepository, MemoryStore,
    MemoryUserRepository,
};

/// A service context plus direct access to the backing store
pub struct TestStack {
    pub ctx: ServiceContext,
    pub store: MemoryStore,
}

/// Build a service context over a fresh in-memory store
pub fn test_context() -> TestStack {
    let store = MemoryStore::new();
    let ctx = ServiceContext::new(
        Arc::new(MemoryArticleRepository::new(store.clone())),
        Arc::new(MemoryEngagementRepository::new(store.clone())),
        Arc::new(MemoryFollowRepository::new(store.clone())),
        Arc::new(MemoryUserRepository::new(store.clone())),
        Arc::new(SnowflakeGenerator::new(1)),
        EditorialConfig::default(),
    );
    TestStack { ctx, store }
}
