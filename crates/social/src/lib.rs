//! Social platform publishing for Immoflow.
//!
//! This crate turns a listing snapshot into posts on connected social
//! platforms. It contains:
//! - The post message formatter (pure, deterministic)
//! - The `PlatformPublisher` trait and the per-platform implementations
//!   (Facebook Pages, Instagram business accounts via the Graph API)
//! - The `PublisherRegistry` that maps platform ids to publishers
//!
//! The crate is storage-agnostic: callers hand it a [`ListingPost`] view and
//! the raw connection metadata, and get back a post id or a scoped
//! [`PublishError`]. One platform's failure never concerns another platform.

pub mod errors;
pub mod graph;
pub mod message;
pub mod models;
pub mod publisher;
pub mod registry;

pub use errors::PublishError;
pub use graph::GraphClient;
pub use message::format_listing_message;
pub use models::{ListingPost, PriceKind, PublishedPost};
pub use publisher::{FacebookPublisher, InstagramPublisher, PlatformPublisher};
pub use registry::{PublisherRegistry, AUTO_PUBLISH_UNAVAILABLE};
