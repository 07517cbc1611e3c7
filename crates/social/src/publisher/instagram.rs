//! Instagram publisher.
//!
//! Instagram publishing piggybacks on a Facebook Page with a linked Instagram
//! business account and uses the two-step container protocol: create a media
//! container from the first image, then publish the container by its creation
//! id. Either step can fail independently; both surface as this platform's
//! failure only.

use async_trait::async_trait;
use log::info;

use crate::errors::PublishError;
use crate::graph::GraphClient;
use crate::models::{FacebookConnection, ListingPost, PublishedPost};
use crate::publisher::traits::PlatformPublisher;

pub const INSTAGRAM_PLATFORM_ID: &str = "instagram";

pub struct InstagramPublisher {
    graph: GraphClient,
}

impl InstagramPublisher {
    pub fn new(graph: GraphClient) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl PlatformPublisher for InstagramPublisher {
    fn id(&self) -> &'static str {
        INSTAGRAM_PLATFORM_ID
    }

    async fn publish(
        &self,
        post: &ListingPost,
        connection_metadata: &serde_json::Value,
        message: &str,
    ) -> Result<PublishedPost, PublishError> {
        let connection = FacebookConnection::from_metadata(connection_metadata)?;
        let page = connection
            .instagram_page()
            .ok_or(PublishError::NoInstagramAccount)?;
        // instagram_page() only returns pages carrying an account id.
        let ig_account = page
            .instagram_business_account
            .as_deref()
            .ok_or(PublishError::NoInstagramAccount)?;

        // Text-only posts are not supported by the Graph content API.
        let image_url = post.primary_image().ok_or(PublishError::ImageRequired)?;

        let creation_id = self
            .graph
            .post_object(
                INSTAGRAM_PLATFORM_ID,
                &format!("{}/media", ig_account),
                &[
                    ("image_url", image_url),
                    ("caption", message),
                    ("access_token", &page.access_token),
                ],
            )
            .await?;

        let post_id = self
            .graph
            .post_object(
                INSTAGRAM_PLATFORM_ID,
                &format!("{}/media_publish", ig_account),
                &[
                    ("creation_id", &creation_id),
                    ("access_token", &page.access_token),
                ],
            )
            .await?;

        info!(
            "published listing post {} on Instagram account {}",
            post_id, ig_account
        );
        Ok(PublishedPost {
            post_id,
            message: "published on Instagram".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceKind;
    use serde_json::json;

    fn post_with_images(images: Vec<String>) -> ListingPost {
        ListingPost {
            title: "Maison de village".to_string(),
            description: "Pierres apparentes, calme.".to_string(),
            price: 240_000,
            price_kind: PriceKind::Sale,
            location: "Uzes".to_string(),
            beds: Some(3),
            area: Some(120),
            features: vec!["jardin".to_string()],
            images,
        }
    }

    fn linked_metadata() -> serde_json::Value {
        json!({
            "pages": [{
                "id": "p1",
                "name": "Agence",
                "access_token": "tok",
                "instagram_business_account": "ig-1"
            }]
        })
    }

    #[tokio::test]
    async fn fails_without_linked_instagram_account() {
        let publisher = InstagramPublisher::new(GraphClient::with_base_url("http://127.0.0.1:0"));
        let metadata = json!({
            "pages": [{"id": "p1", "name": "Agence", "access_token": "tok"}]
        });
        let result = publisher
            .publish(&post_with_images(vec!["u".into()]), &metadata, "m")
            .await;
        assert!(matches!(result, Err(PublishError::NoInstagramAccount)));
    }

    #[tokio::test]
    async fn fails_before_any_remote_call_without_an_image() {
        // Unroutable endpoint: reaching the network would fail differently,
        // so an ImageRequired error proves the short-circuit.
        let publisher = InstagramPublisher::new(GraphClient::with_base_url("http://127.0.0.1:0"));
        let result = publisher
            .publish(&post_with_images(vec![]), &linked_metadata(), "m")
            .await;
        assert!(matches!(result, Err(PublishError::ImageRequired)));
    }
}
