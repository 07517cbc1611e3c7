use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::{Error, Result, ValidationError};
use crate::leads::leads_model::{Lead, LeadStatus, NewLead, SubmitLead};
use crate::leads::leads_traits::{LeadRepositoryTrait, LeadServiceTrait};
use crate::listings::{ListingRepositoryTrait, ListingStatus, LISTING_NOT_FOUND};

/// Returned when the submission carries no usable contact channel.
pub const LEAD_CONTACT_REQUIRED: &str = "Nom et email ou telephone requis";

const DEFAULT_SOURCE: &str = "site";

pub struct LeadService {
    lead_repository: Arc<dyn LeadRepositoryTrait>,
    listing_repository: Arc<dyn ListingRepositoryTrait>,
}

impl LeadService {
    pub fn new(
        lead_repository: Arc<dyn LeadRepositoryTrait>,
        listing_repository: Arc<dyn ListingRepositoryTrait>,
    ) -> Self {
        LeadService {
            lead_repository,
            listing_repository,
        }
    }

    fn has_contact(submission: &SubmitLead) -> bool {
        let email = submission.email.as_deref().unwrap_or("").trim();
        let phone = submission.phone.as_deref().unwrap_or("").trim();
        !email.is_empty() || !phone.is_empty()
    }
}

#[async_trait]
impl LeadServiceTrait for LeadService {
    async fn submit_public_lead(&self, submission: SubmitLead) -> Result<Lead> {
        if submission.name.trim().is_empty() || !Self::has_contact(&submission) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                LEAD_CONTACT_REQUIRED.to_string(),
            )));
        }

        // Drafts and paused listings must not be contactable.
        let listing = self
            .listing_repository
            .get_listing(&submission.listing_id)
            .map_err(|e| {
                if e.is_not_found() {
                    Error::NotFound(LISTING_NOT_FOUND.to_string())
                } else {
                    e
                }
            })?;
        if listing.status != ListingStatus::Active {
            return Err(Error::NotFound(LISTING_NOT_FOUND.to_string()));
        }

        let lead = self
            .lead_repository
            .insert_lead(NewLead {
                user_id: listing.user_id,
                listing_id: Some(listing.id),
                name: submission.name.trim().to_string(),
                email: submission.email.filter(|e| !e.trim().is_empty()),
                phone: submission.phone.filter(|p| !p.trim().is_empty()),
                message: submission.message,
                source: submission
                    .source
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            })
            .await?;

        info!("lead {} created for listing {:?}", lead.id, lead.listing_id);
        Ok(lead)
    }

    fn get_leads(&self, user_id: &str) -> Result<Vec<Lead>> {
        self.lead_repository.list_leads_for_user(user_id)
    }

    async fn update_lead_status(
        &self,
        user_id: &str,
        lead_id: &str,
        status: LeadStatus,
    ) -> Result<Lead> {
        self.lead_repository
            .update_lead_status(user_id, lead_id, status)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::{Listing, ListingUpdate, NewListing, PriceType};
    use chrono::Utc;
    use std::sync::RwLock;

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

        fn get_listing_for_user(&self, _: &str, _: &str) -> Result<Listing> {
            unimplemented!()
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

    struct MockLeadRepository {
        inserted: RwLock<Vec<NewLead>>,
    }

    #[async_trait]
    impl LeadRepositoryTrait for MockLeadRepository {
        fn list_leads_for_user(&self, _: &str) -> Result<Vec<Lead>> {
            unimplemented!()
        }

        async fn insert_lead(&self, new_lead: NewLead) -> Result<Lead> {
            self.inserted.write().unwrap().push(new_lead.clone());
            Ok(Lead {
                id: "lead-1".to_string(),
                user_id: new_lead.user_id,
                listing_id: new_lead.listing_id,
                name: new_lead.name,
                email: new_lead.email,
                phone: new_lead.phone,
                message: new_lead.message,
                source: new_lead.source,
                status: LeadStatus::New,
                created_at: Utc::now(),
            })
        }

        async fn update_lead_status(&self, _: &str, _: &str, _: LeadStatus) -> Result<Lead> {
            unimplemented!()
        }
    }

    fn listing(id: &str, status: ListingStatus) -> Listing {
        Listing {
            id: id.to_string(),
            user_id: "owner".to_string(),
            title: "Loft".to_string(),
            description: String::new(),
            property_type: "apartment".to_string(),
            price_type: PriceType::Rent,
            price: 900,
            location: "Lille".to_string(),
            beds: None,
            baths: None,
            area: None,
            features: vec![],
            images: vec![],
            status,
            views: 0,
            created_at: Utc::now(),
        }
    }

    fn make_service(listings: Vec<Listing>) -> (LeadService, Arc<MockLeadRepository>) {
        let leads = Arc::new(MockLeadRepository {
            inserted: RwLock::new(Vec::new()),
        });
        let service = LeadService::new(
            leads.clone(),
            Arc::new(MockListingRepository { listings }),
        );
        (service, leads)
    }

    fn submission(listing_id: &str) -> SubmitLead {
        SubmitLead {
            listing_id: listing_id.to_string(),
            name: "Jo".to_string(),
            email: None,
            phone: Some("0600000000".to_string()),
            message: None,
            source: None,
        }
    }

    #[tokio::test]
    async fn rejects_submission_without_any_contact() {
        let (service, leads) = make_service(vec![listing("a", ListingStatus::Active)]);
        let mut sub = submission("a");
        sub.phone = None;

        let err = service.submit_public_lead(sub).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Input validation failed: {}", LEAD_CONTACT_REQUIRED));
        assert!(leads.inserted.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn phone_only_submission_is_accepted() {
        let (service, _) = make_service(vec![listing("a", ListingStatus::Active)]);
        let lead = service.submit_public_lead(submission("a")).await.unwrap();
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.user_id, "owner");
        assert_eq!(lead.source, "site");
    }

    #[tokio::test]
    async fn blank_contact_fields_do_not_count() {
        let (service, _) = make_service(vec![listing("a", ListingStatus::Active)]);
        let mut sub = submission("a");
        sub.phone = Some("   ".to_string());
        sub.email = Some(String::new());
        assert!(service.submit_public_lead(sub).await.is_err());
    }

    #[tokio::test]
    async fn inactive_listing_blocks_submission() {
        let (service, leads) = make_service(vec![listing("d", ListingStatus::Draft)]);
        let err = service.submit_public_lead(submission("d")).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(leads.inserted.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_listing_is_not_found() {
        let (service, _) = make_service(vec![]);
        let err = service
            .submit_public_lead(submission("missing"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
