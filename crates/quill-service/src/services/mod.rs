//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod draft;
pub mod engagement;
pub mod error;
pub mod publish;
pub mod social;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use draft::DraftService;
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use publish::PublishService;
pub use social::SocialService;
pub use user::UserService;
