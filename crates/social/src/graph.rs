//! Thin client for the Facebook Graph API.
//!
//! Both publishers go through this client: it posts form-encoded parameters,
//! surfaces the `error` payload Graph returns on failures, and applies a
//! bounded timeout so a stuck platform cannot hold a publish call open.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::PublishError;

/// Default Graph API endpoint.
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com/v18.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Graph API response envelope. Successful writes return an object id;
/// failures return an `error` object instead.
#[derive(Debug, Deserialize)]
struct GraphResponse {
    id: Option<String>,
    post_id: Option<String>,
    error: Option<GraphErrorBody>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    message: String,
}

/// HTTP client for Graph API write endpoints.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: Client,
    base_url: String,
}

impl GraphClient {
    /// Creates a client against the production Graph API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_GRAPH_BASE_URL)
    }

    /// Creates a client against a custom endpoint (used by tests).
    ///
    /// Panics if the HTTP client cannot be constructed; every client must
    /// carry the request timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build Graph API HTTP client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Posts form parameters to a Graph path and returns the created object id.
    pub async fn post_object(
        &self,
        platform: &str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, PublishError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!("graph call: POST {}", url);

        let response = self.http.post(&url).form(params).send().await?;
        let status = response.status();
        let body: GraphResponse = response.json().await.map_err(|e| PublishError::Remote {
            platform: platform.to_string(),
            message: format!("unreadable Graph response: {}", e),
        })?;

        if let Some(error) = body.error {
            return Err(PublishError::Remote {
                platform: platform.to_string(),
                message: error.message,
            });
        }
        if !status.is_success() {
            return Err(PublishError::Remote {
                platform: platform.to_string(),
                message: format!("Graph API returned HTTP {}", status.as_u16()),
            });
        }

        // Photo posts carry both `id` and `post_id`; the feed post id is the
        // one that identifies the published story.
        body.post_id.or(body.id).ok_or_else(|| PublishError::Remote {
            platform: platform.to_string(),
            message: "Graph response carried no object id".to_string(),
        })
    }
}

impl Default for GraphClient {
    fn default() -> Self {
        Self::new()
    }
}
