//! Publish module - multi-platform fan-out for listings.

mod publish_model;
mod publish_service;

pub use publish_model::{PublishResponse, PublishResult};
pub use publish_service::{PublishService, PublishServiceTrait, PLATFORM_NOT_CONNECTED};
