//! Listings module - domain models, services, and traits.

mod listings_model;
mod listings_service;
mod listings_traits;

pub use listings_model::{Listing, ListingStatus, ListingUpdate, NewListing, PriceType};
pub use listings_service::{ListingService, LISTING_NOT_FOUND};
pub use listings_traits::{ListingRepositoryTrait, ListingServiceTrait};
