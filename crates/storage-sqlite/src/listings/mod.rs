//! SQLite storage implementation for listings.

mod model;
mod repository;

pub use model::{ListingDB, NewListingDB};
pub use repository::ListingRepository;
