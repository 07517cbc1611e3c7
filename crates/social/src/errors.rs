//! Error types for platform publishing.

use thiserror::Error;

/// Errors scoped to one platform's publish attempt.
///
/// These never abort a fan-out: the orchestrator converts each of them into
/// the failed result entry of the platform that produced it.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The connection metadata carries no Facebook Page.
    #[error("no Facebook Page connected")]
    NoPageConnected,

    /// No Page in the connection has a linked Instagram business account.
    #[error("no Instagram business account linked to the connected Facebook Page")]
    NoInstagramAccount,

    /// Instagram only accepts posts with at least one image.
    #[error("Instagram requires at least one image")]
    ImageRequired,

    /// The stored connection metadata could not be interpreted.
    #[error("invalid connection metadata: {0}")]
    InvalidMetadata(String),

    /// The remote platform rejected the request.
    #[error("{platform}: {message}")]
    Remote {
        /// Platform that produced the error
        platform: String,
        /// Error text returned by the platform
        message: String,
    },

    /// A network error occurred while talking to the platform.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
