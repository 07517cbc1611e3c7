//! Publisher trait definition.

use async_trait::async_trait;

use crate::errors::PublishError;
use crate::models::{ListingPost, PublishedPost};

/// Strategy for publishing a listing post on one platform.
///
/// Implement this trait to add support for a new platform; the registry
/// dispatches on [`id`](Self::id) so the orchestrator never branches on
/// platform names itself.
///
/// A publish attempt receives the opaque connection metadata stored for the
/// caller's platform connection and the pre-formatted message, and either
/// returns the created post or a [`PublishError`] scoped to this platform.
#[async_trait]
pub trait PlatformPublisher: Send + Sync {
    /// Stable platform identifier, e.g. `"facebook"`.
    fn id(&self) -> &'static str;

    /// Publishes the post on the remote platform.
    async fn publish(
        &self,
        post: &ListingPost,
        connection_metadata: &serde_json::Value,
        message: &str,
    ) -> Result<PublishedPost, PublishError>;
}
