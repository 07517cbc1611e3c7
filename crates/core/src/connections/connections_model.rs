//! Platform connection domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
        }
    }
}

/// A user's link to an external platform, at most one row per
/// (user, platform) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConnection {
    pub id: String,
    pub user_id: String,
    /// Platform identifier, e.g. "facebook" or "instagram".
    pub platform_id: String,
    pub status: ConnectionStatus,
    /// Opaque platform credentials and settings. The shape is owned by the
    /// publisher for that platform, not by storage.
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Upsert payload for connecting (or reconnecting) a platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConnection {
    pub platform_id: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}
