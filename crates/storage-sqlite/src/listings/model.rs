//! Database models for listings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use immoflow_core::listings::{Listing, ListingStatus, NewListing, PriceType};

/// Database model for listings. JSON array columns (`features`, `images`)
/// are stored as text.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::listings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ListingDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub price_type: String,
    pub price: i64,
    pub location: String,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    pub area: Option<i32>,
    pub features: String,
    pub images: String,
    pub status: String,
    pub views: i32,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new listing.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::listings)]
#[serde(rename_all = "camelCase")]
pub struct NewListingDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub price_type: String,
    pub price: i64,
    pub location: String,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    pub area: Option<i32>,
    pub features: String,
    pub images: String,
    pub status: String,
}

pub(crate) fn parse_string_vec(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub(crate) fn to_json_text(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

fn parse_price_type(raw: &str) -> PriceType {
    match raw {
        "rent" => PriceType::Rent,
        "vacation" => PriceType::Vacation,
        _ => PriceType::Sale,
    }
}

fn parse_status(raw: &str) -> ListingStatus {
    match raw {
        "active" => ListingStatus::Active,
        "paused" => ListingStatus::Paused,
        "pending" => ListingStatus::Pending,
        _ => ListingStatus::Draft,
    }
}

// Conversion to domain models
impl From<ListingDB> for Listing {
    fn from(db: ListingDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            description: db.description,
            property_type: db.property_type,
            price_type: parse_price_type(&db.price_type),
            price: db.price,
            location: db.location,
            beds: db.beds,
            baths: db.baths,
            area: db.area,
            features: parse_string_vec(&db.features),
            images: parse_string_vec(&db.images),
            status: parse_status(&db.status),
            views: db.views,
            created_at: db.created_at.and_utc(),
        }
    }
}

impl NewListingDB {
    pub fn from_domain(id: String, user_id: &str, domain: NewListing) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            title: domain.title,
            description: domain.description,
            property_type: domain.property_type,
            price_type: domain.price_type.as_str().to_string(),
            price: domain.price,
            location: domain.location,
            beds: domain.beds,
            baths: domain.baths,
            area: domain.area,
            features: to_json_text(&domain.features),
            images: to_json_text(&domain.images),
            status: domain.status.unwrap_or(ListingStatus::Draft).as_str().to_string(),
        }
    }
}
