//! Facebook Page publisher.
//!
//! Publishes to the first Page of the connection. Listings with at least one
//! image become a photo post with the message as caption; listings without
//! images become a plain feed post.

use async_trait::async_trait;
use log::info;

use crate::errors::PublishError;
use crate::graph::GraphClient;
use crate::models::{FacebookConnection, ListingPost, PublishedPost};
use crate::publisher::traits::PlatformPublisher;

pub const FACEBOOK_PLATFORM_ID: &str = "facebook";

pub struct FacebookPublisher {
    graph: GraphClient,
}

impl FacebookPublisher {
    pub fn new(graph: GraphClient) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl PlatformPublisher for FacebookPublisher {
    fn id(&self) -> &'static str {
        FACEBOOK_PLATFORM_ID
    }

    async fn publish(
        &self,
        post: &ListingPost,
        connection_metadata: &serde_json::Value,
        message: &str,
    ) -> Result<PublishedPost, PublishError> {
        let connection = FacebookConnection::from_metadata(connection_metadata)?;
        let page = connection
            .primary_page()
            .ok_or(PublishError::NoPageConnected)?;

        let post_id = match post.primary_image() {
            Some(image_url) => {
                self.graph
                    .post_object(
                        FACEBOOK_PLATFORM_ID,
                        &format!("{}/photos", page.id),
                        &[
                            ("url", image_url),
                            ("caption", message),
                            ("access_token", &page.access_token),
                        ],
                    )
                    .await?
            }
            None => {
                self.graph
                    .post_object(
                        FACEBOOK_PLATFORM_ID,
                        &format!("{}/feed", page.id),
                        &[("message", message), ("access_token", &page.access_token)],
                    )
                    .await?
            }
        };

        info!("published listing post {} on page {}", post_id, page.name);
        Ok(PublishedPost {
            post_id,
            message: format!("published on {}", page.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn imageless_post() -> ListingPost {
        ListingPost {
            title: "Studio centre-ville".to_string(),
            description: "Petit studio renove.".to_string(),
            price: 620,
            price_kind: crate::models::PriceKind::Rent,
            location: "Lyon".to_string(),
            beds: None,
            area: Some(22),
            features: vec![],
            images: vec![],
        }
    }

    #[tokio::test]
    async fn fails_without_a_connected_page() {
        let publisher = FacebookPublisher::new(GraphClient::with_base_url("http://127.0.0.1:0"));
        let result = publisher
            .publish(&imageless_post(), &json!({"pages": []}), "message")
            .await;
        assert!(matches!(result, Err(PublishError::NoPageConnected)));
    }

    #[tokio::test]
    async fn fails_on_malformed_metadata() {
        let publisher = FacebookPublisher::new(GraphClient::with_base_url("http://127.0.0.1:0"));
        let result = publisher
            .publish(&imageless_post(), &json!({"pages": 7}), "message")
            .await;
        assert!(matches!(result, Err(PublishError::InvalidMetadata(_))));
    }
}
