use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use immoflow_social::{format_listing_message, PublisherRegistry, AUTO_PUBLISH_UNAVAILABLE};
use log::{info, warn};

use crate::connections::ConnectionRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::listings::{ListingRepositoryTrait, LISTING_NOT_FOUND};
use crate::publish::publish_model::PublishResult;

/// Returned per-platform when the user never connected that platform.
pub const PLATFORM_NOT_CONNECTED: &str = "platform not connected";

/// Trait for the publish fan-out.
#[async_trait]
pub trait PublishServiceTrait: Send + Sync {
    /// Publishes a listing to each requested platform, returning one result
    /// per platform keyed by platform id.
    async fn publish_listing(
        &self,
        user_id: &str,
        listing_id: &str,
        platforms: &[String],
    ) -> Result<HashMap<String, PublishResult>>;
}

pub struct PublishService {
    listing_repository: Arc<dyn ListingRepositoryTrait>,
    connection_repository: Arc<dyn ConnectionRepositoryTrait>,
    registry: Arc<PublisherRegistry>,
}

impl PublishService {
    pub fn new(
        listing_repository: Arc<dyn ListingRepositoryTrait>,
        connection_repository: Arc<dyn ConnectionRepositoryTrait>,
        registry: Arc<PublisherRegistry>,
    ) -> Self {
        PublishService {
            listing_repository,
            connection_repository,
            registry,
        }
    }
}

#[async_trait]
impl PublishServiceTrait for PublishService {
    async fn publish_listing(
        &self,
        user_id: &str,
        listing_id: &str,
        platforms: &[String],
    ) -> Result<HashMap<String, PublishResult>> {
        if listing_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "listingId".to_string(),
            )));
        }
        if platforms.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "at least one platform is required".to_string(),
            )));
        }

        // Owner-scoped lookup. A foreign listing id reads as absent.
        let listing = self
            .listing_repository
            .get_listing_for_user(user_id, listing_id)
            .map_err(|e| {
                if e.is_not_found() {
                    Error::NotFound(LISTING_NOT_FOUND.to_string())
                } else {
                    e
                }
            })?;

        let connections = self
            .connection_repository
            .get_connected_for_user(user_id, platforms)?;

        let post = listing.to_post();
        // One message, reused verbatim on every platform.
        let message = format_listing_message(&post);

        let mut results = HashMap::with_capacity(platforms.len());
        for platform_id in platforms {
            if results.contains_key(platform_id) {
                continue;
            }
            let connection = connections
                .iter()
                .find(|c| &c.platform_id == platform_id);

            let result = match connection {
                None => PublishResult::failed(PLATFORM_NOT_CONNECTED),
                Some(connection) => match self.registry.get(platform_id) {
                    None => PublishResult::failed(AUTO_PUBLISH_UNAVAILABLE),
                    Some(publisher) => {
                        match publisher
                            .publish(&post, &connection.metadata, &message)
                            .await
                        {
                            Ok(published) => {
                                info!(
                                    "listing {} published on {} as {}",
                                    listing.id, platform_id, published.post_id
                                );
                                PublishResult::ok(published.message, Some(published.post_id))
                            }
                            Err(e) => {
                                warn!(
                                    "publishing listing {} on {} failed: {}",
                                    listing.id, platform_id, e
                                );
                                PublishResult::failed(e.to_string())
                            }
                        }
                    }
                },
            };
            results.insert(platform_id.clone(), result);
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connections::{ConnectionStatus, NewConnection, PlatformConnection};
    use crate::listings::{Listing, ListingStatus, ListingUpdate, NewListing, PriceType};
    use chrono::Utc;
    use immoflow_social::{ListingPost, PlatformPublisher, PublishError, PublishedPost};

    struct MockListingRepository {
        listings: Vec<Listing>,
    }

    #[async_trait]
    impl ListingRepositoryTrait for MockListingRepository {
        fn get_listing(&self, listing_id: &str) -> Result<Listing> {
            self.listings
                .iter()
                .find(|l| l.id == listing_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(LISTING_NOT_FOUND.to_string()))
        }

        fn get_listing_for_user(&self, user_id: &str, listing_id: &str) -> Result<Listing> {
            self.listings
                .iter()
                .find(|l| l.id == listing_id && l.user_id == user_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(LISTING_NOT_FOUND.to_string()))
        }

        fn list_listings_for_user(&self, _: &str) -> Result<Vec<Listing>> {
            unimplemented!()
        }
        async fn insert_listing(&self, _: &str, _: NewListing) -> Result<Listing> {
            unimplemented!()
        }
        async fn update_listing(&self, _: &str, _: ListingUpdate) -> Result<Listing> {
            unimplemented!()
        }
        async fn delete_listing(&self, _: &str, _: &str) -> Result<usize> {
            unimplemented!()
        }
        async fn increment_views(&self, _: &str) -> Result<()> {
            Ok(())
        }
    }

    struct MockConnectionRepository {
        connections: Vec<PlatformConnection>,
    }

    #[async_trait]
    impl ConnectionRepositoryTrait for MockConnectionRepository {
        fn list_connections_for_user(&self, _: &str) -> Result<Vec<PlatformConnection>> {
            Ok(self.connections.clone())
        }

        fn get_connected_for_user(
            &self,
            user_id: &str,
            platform_ids: &[String],
        ) -> Result<Vec<PlatformConnection>> {
            Ok(self
                .connections
                .iter()
                .filter(|c| {
                    c.user_id == user_id
                        && c.status == ConnectionStatus::Connected
                        && platform_ids.contains(&c.platform_id)
                })
                .cloned()
                .collect())
        }

        async fn upsert_connection(
            &self,
            _: &str,
            _: NewConnection,
        ) -> Result<PlatformConnection> {
            unimplemented!()
        }

        async fn disconnect(&self, _: &str, _: &str) -> Result<PlatformConnection> {
            unimplemented!()
        }
    }

    struct StubPublisher {
        id: &'static str,
        outcome: std::result::Result<PublishedPost, PublishError>,
    }

    #[async_trait]
    impl PlatformPublisher for StubPublisher {
        fn id(&self) -> &'static str {
            self.id
        }

        async fn publish(
            &self,
            _post: &ListingPost,
            _connection_metadata: &serde_json::Value,
            _message: &str,
        ) -> std::result::Result<PublishedPost, PublishError> {
            match &self.outcome {
                Ok(p) => Ok(p.clone()),
                Err(PublishError::Remote { platform, message }) => Err(PublishError::Remote {
                    platform: platform.clone(),
                    message: message.clone(),
                }),
                Err(_) => Err(PublishError::NoPageConnected),
            }
        }
    }

    fn listing() -> Listing {
        Listing {
            id: "l-1".to_string(),
            user_id: "owner".to_string(),
            title: "Villa vue mer".to_string(),
            description: "Belle villa.".to_string(),
            property_type: "house".to_string(),
            price_type: PriceType::Sale,
            price: 350_000,
            location: "Nice".to_string(),
            beds: Some(4),
            baths: Some(2),
            area: Some(180),
            features: vec!["piscine".to_string()],
            images: vec!["https://img.example/1.jpg".to_string()],
            status: ListingStatus::Active,
            views: 0,
            created_at: Utc::now(),
        }
    }

    fn connection(platform_id: &str) -> PlatformConnection {
        PlatformConnection {
            id: format!("c-{platform_id}"),
            user_id: "owner".to_string(),
            platform_id: platform_id.to_string(),
            status: ConnectionStatus::Connected,
            metadata: serde_json::json!({"pages": []}),
            created_at: Utc::now(),
        }
    }

    fn make_service(
        connections: Vec<PlatformConnection>,
        publishers: Vec<StubPublisher>,
    ) -> PublishService {
        let mut registry = PublisherRegistry::new();
        for publisher in publishers {
            registry.register(Arc::new(publisher));
        }
        PublishService::new(
            Arc::new(MockListingRepository {
                listings: vec![listing()],
            }),
            Arc::new(MockConnectionRepository { connections }),
            Arc::new(registry),
        )
    }

    fn published(post_id: &str) -> PublishedPost {
        PublishedPost {
            post_id: post_id.to_string(),
            message: "published on Agence Demo".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_platform_list_is_rejected() {
        let service = make_service(vec![], vec![]);
        let result = service.publish_listing("owner", "l-1", &[]).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn blank_listing_id_is_rejected_before_any_lookup() {
        let service = make_service(vec![], vec![]);
        let result = service
            .publish_listing("owner", "  ", &["facebook".to_string()])
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn foreign_listing_is_not_found() {
        let service = make_service(vec![connection("facebook")], vec![]);
        let err = service
            .publish_listing("intruder", "l-1", &["facebook".to_string()])
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), LISTING_NOT_FOUND);
    }

    #[tokio::test]
    async fn unconnected_platform_reports_not_connected() {
        let service = make_service(
            vec![],
            vec![StubPublisher {
                id: "facebook",
                outcome: Ok(published("fb_1")),
            }],
        );
        let results = service
            .publish_listing("owner", "l-1", &["facebook".to_string()])
            .await
            .unwrap();
        let fb = &results["facebook"];
        assert!(!fb.success);
        assert_eq!(fb.message, PLATFORM_NOT_CONNECTED);
    }

    #[tokio::test]
    async fn connected_but_unsupported_platform_reports_unavailable() {
        let service = make_service(vec![connection("seloger")], vec![]);
        let results = service
            .publish_listing("owner", "l-1", &["seloger".to_string()])
            .await
            .unwrap();
        let r = &results["seloger"];
        assert!(!r.success);
        assert_eq!(r.message, AUTO_PUBLISH_UNAVAILABLE);
    }

    #[tokio::test]
    async fn one_platform_failure_does_not_abort_the_others() {
        let service = make_service(
            vec![connection("facebook"), connection("instagram")],
            vec![
                StubPublisher {
                    id: "facebook",
                    outcome: Err(PublishError::Remote {
                        platform: "facebook".to_string(),
                        message: "expired token".to_string(),
                    }),
                },
                StubPublisher {
                    id: "instagram",
                    outcome: Ok(PublishedPost {
                        post_id: "ig_9".to_string(),
                        message: "published on Instagram".to_string(),
                    }),
                },
            ],
        );
        let results = service
            .publish_listing(
                "owner",
                "l-1",
                &["facebook".to_string(), "instagram".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        assert!(!results["facebook"].success);
        assert!(results["facebook"].message.contains("expired token"));
        assert!(results["instagram"].success);
        assert_eq!(results["instagram"].post_id.as_deref(), Some("ig_9"));
    }

    #[tokio::test]
    async fn successful_publish_carries_post_id_and_message() {
        let service = make_service(
            vec![connection("facebook")],
            vec![StubPublisher {
                id: "facebook",
                outcome: Ok(published("123_456")),
            }],
        );
        let results = service
            .publish_listing("owner", "l-1", &["facebook".to_string()])
            .await
            .unwrap();
        let fb = &results["facebook"];
        assert!(fb.success);
        assert_eq!(fb.post_id.as_deref(), Some("123_456"));
        assert_eq!(fb.message, "published on Agence Demo");
    }
}
