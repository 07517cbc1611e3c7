//! Publish fan-out result models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Outcome for one platform in a fan-out. A failure on one platform is
/// reported here and never aborts the others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

impl PublishResult {
    pub fn ok(message: String, post_id: Option<String>) -> Self {
        PublishResult {
            success: true,
            message,
            post_id,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        PublishResult {
            success: false,
            message: message.into(),
            post_id: None,
        }
    }
}

/// Response body for a publish request, keyed by platform id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    pub results: HashMap<String, PublishResult>,
}
