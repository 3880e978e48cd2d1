//! # quill-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services orchestrate the draft lifecycle, the publish transition and
//! engagement bookkeeping on top of the repository ports from `quill-core`.

pub mod dto;
pub mod services;

pub use services::{
    DraftService, EngagementService, PublishService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SocialService, UserService,
};
