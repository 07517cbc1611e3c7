use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use immoflow_core::listings::{Listing, ListingRepositoryTrait, ListingUpdate, NewListing};
use immoflow_core::Result;

use super::model::{to_json_text, ListingDB, NewListingDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::listings;
use crate::schema::listings::dsl::*;

pub struct ListingRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ListingRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ListingRepository { pool, writer }
    }
}

#[async_trait]
impl ListingRepositoryTrait for ListingRepository {
    fn get_listing(&self, listing_id: &str) -> Result<Listing> {
        let mut conn = get_connection(&self.pool)?;
        let listing_db = listings
            .find(listing_id)
            .first::<ListingDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Listing::from(listing_db))
    }

    fn get_listing_for_user(&self, owner_id: &str, listing_id: &str) -> Result<Listing> {
        let mut conn = get_connection(&self.pool)?;
        let listing_db = listings
            .filter(id.eq(listing_id))
            .filter(user_id.eq(owner_id))
            .first::<ListingDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Listing::from(listing_db))
    }

    fn list_listings_for_user(&self, owner_id: &str) -> Result<Vec<Listing>> {
        let mut conn = get_connection(&self.pool)?;
        let listings_db = listings
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .load::<ListingDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(listings_db.into_iter().map(Listing::from).collect())
    }

    async fn insert_listing(&self, owner_id: &str, new_listing: NewListing) -> Result<Listing> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Listing> {
                let new_listing_db = NewListingDB::from_domain(
                    Uuid::new_v4().to_string(),
                    &owner_id,
                    new_listing,
                );
                let result_db = diesel::insert_into(listings::table)
                    .values(&new_listing_db)
                    .returning(ListingDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Listing::from(result_db))
            })
            .await
    }

    async fn update_listing(&self, owner_id: &str, update: ListingUpdate) -> Result<Listing> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Listing> {
                let listing_id = update.id.clone().ok_or_else(|| {
                    immoflow_core::Error::Validation(
                        immoflow_core::errors::ValidationError::MissingField("id".to_string()),
                    )
                })?;

                let mut row = listings
                    .filter(id.eq(&listing_id))
                    .filter(user_id.eq(&owner_id))
                    .first::<ListingDB>(conn)
                    .map_err(StorageError::from)?;

                if let Some(v) = update.title {
                    row.title = v;
                }
                if let Some(v) = update.description {
                    row.description = v;
                }
                if let Some(v) = update.property_type {
                    row.property_type = v;
                }
                if let Some(v) = update.price_type {
                    row.price_type = v.as_str().to_string();
                }
                if let Some(v) = update.price {
                    row.price = v;
                }
                if let Some(v) = update.location {
                    row.location = v;
                }
                if update.beds.is_some() {
                    row.beds = update.beds;
                }
                if update.baths.is_some() {
                    row.baths = update.baths;
                }
                if update.area.is_some() {
                    row.area = update.area;
                }
                if let Some(v) = update.features {
                    row.features = to_json_text(&v);
                }
                if let Some(v) = update.images {
                    row.images = to_json_text(&v);
                }
                if let Some(v) = update.status {
                    row.status = v.as_str().to_string();
                }

                diesel::update(listings.find(&listing_id))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = listings
                    .find(&listing_id)
                    .first::<ListingDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Listing::from(result_db))
            })
            .await
    }

    async fn delete_listing(&self, owner_id: &str, listing_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let listing_id = listing_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    listings
                        .filter(id.eq(&listing_id))
                        .filter(user_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    async fn increment_views(&self, listing_id: &str) -> Result<()> {
        let listing_id = listing_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(listings.find(&listing_id))
                    .set(views.eq(views + 1))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
