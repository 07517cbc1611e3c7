use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Error, Result, ValidationError};
use crate::listings::listings_model::{Listing, ListingStatus, ListingUpdate, NewListing};
use crate::listings::listings_traits::{ListingRepositoryTrait, ListingServiceTrait};

/// User-facing message for absent/foreign listings.
pub const LISTING_NOT_FOUND: &str = "Annonce non trouvee";

pub struct ListingService {
    listing_repository: Arc<dyn ListingRepositoryTrait>,
}

impl ListingService {
    pub fn new(listing_repository: Arc<dyn ListingRepositoryTrait>) -> Self {
        ListingService { listing_repository }
    }

    fn validate_new(new_listing: &NewListing) -> Result<()> {
        if new_listing.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if new_listing.location.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "location".to_string(),
            )));
        }
        if new_listing.price <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "price must be positive".to_string(),
            )));
        }
        Ok(())
    }

    fn not_found(err: Error) -> Error {
        if err.is_not_found() {
            Error::NotFound(LISTING_NOT_FOUND.to_string())
        } else {
            err
        }
    }
}

#[async_trait]
impl ListingServiceTrait for ListingService {
    fn get_listings(&self, user_id: &str) -> Result<Vec<Listing>> {
        self.listing_repository.list_listings_for_user(user_id)
    }

    fn get_listing(&self, user_id: &str, listing_id: &str) -> Result<Listing> {
        self.listing_repository
            .get_listing_for_user(user_id, listing_id)
            .map_err(Self::not_found)
    }

    async fn get_public_listing(&self, listing_id: &str) -> Result<Listing> {
        let listing = self
            .listing_repository
            .get_listing(listing_id)
            .map_err(Self::not_found)?;
        if listing.status != ListingStatus::Active {
            return Err(Error::NotFound(LISTING_NOT_FOUND.to_string()));
        }
        self.listing_repository.increment_views(listing_id).await?;
        Ok(listing)
    }

    async fn create_listing(&self, user_id: &str, new_listing: NewListing) -> Result<Listing> {
        Self::validate_new(&new_listing)?;
        self.listing_repository
            .insert_listing(user_id, new_listing)
            .await
    }

    async fn update_listing(&self, user_id: &str, update: ListingUpdate) -> Result<Listing> {
        if update.id.as_deref().unwrap_or("").is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        self.listing_repository
            .update_listing(user_id, update)
            .await
            .map_err(Self::not_found)
    }

    async fn delete_listing(&self, user_id: &str, listing_id: &str) -> Result<()> {
        let deleted = self
            .listing_repository
            .delete_listing(user_id, listing_id)
            .await?;
        if deleted == 0 {
            return Err(Error::NotFound(LISTING_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
