use crate::errors::Result;
use crate::listings::listings_model::{Listing, ListingUpdate, NewListing};
use async_trait::async_trait;

/// Trait for listing repository operations
#[async_trait]
pub trait ListingRepositoryTrait: Send + Sync {
    /// Loads a listing regardless of owner (public lookups).
    fn get_listing(&self, listing_id: &str) -> Result<Listing>;
    /// Loads a listing scoped to its owner; absent or foreign rows are
    /// indistinguishable and both surface as not-found.
    fn get_listing_for_user(&self, user_id: &str, listing_id: &str) -> Result<Listing>;
    fn list_listings_for_user(&self, user_id: &str) -> Result<Vec<Listing>>;
    async fn insert_listing(&self, user_id: &str, new_listing: NewListing) -> Result<Listing>;
    async fn update_listing(&self, user_id: &str, update: ListingUpdate) -> Result<Listing>;
    async fn delete_listing(&self, user_id: &str, listing_id: &str) -> Result<usize>;
    async fn increment_views(&self, listing_id: &str) -> Result<()>;
}

/// Trait for listing service operations
#[async_trait]
pub trait ListingServiceTrait: Send + Sync {
    fn get_listings(&self, user_id: &str) -> Result<Vec<Listing>>;
    fn get_listing(&self, user_id: &str, listing_id: &str) -> Result<Listing>;
    /// Public lookup: only `active` listings resolve, and each hit increments
    /// the views counter.
    async fn get_public_listing(&self, listing_id: &str) -> Result<Listing>;
    async fn create_listing(&self, user_id: &str, new_listing: NewListing) -> Result<Listing>;
    async fn update_listing(&self, user_id: &str, update: ListingUpdate) -> Result<Listing>;
    async fn delete_listing(&self, user_id: &str, listing_id: &str) -> Result<()>;
}
