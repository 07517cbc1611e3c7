//! Listings domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use immoflow_social::{ListingPost, PriceKind};

/// Pricing mode of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Sale,
    Rent,
    Vacation,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Sale => "sale",
            PriceType::Rent => "rent",
            PriceType::Vacation => "vacation",
        }
    }
}

/// Listing lifecycle state. Only `active` listings are publicly visible and
/// contactable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Draft,
    Active,
    Paused,
    Pending,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Draft => "draft",
            ListingStatus::Active => "active",
            ListingStatus::Paused => "paused",
            ListingStatus::Pending => "pending",
        }
    }
}

/// Domain model representing a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub price_type: PriceType,
    /// Whole euros.
    pub price: i64,
    pub location: String,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    /// Surface in square meters.
    pub area: Option<i32>,
    /// Ordered feature labels.
    pub features: Vec<String>,
    /// Ordered image URLs; the first one is the primary/display image.
    pub images: Vec<String>,
    pub status: ListingStatus,
    pub views: i32,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Snapshot used by the publish fan-out and the message formatter.
    pub fn to_post(&self) -> ListingPost {
        ListingPost {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            price_kind: match self.price_type {
                PriceType::Sale => PriceKind::Sale,
                PriceType::Rent => PriceKind::Rent,
                PriceType::Vacation => PriceKind::Vacation,
            },
            location: self.location.clone(),
            beds: self.beds,
            area: self.area,
            features: self.features.clone(),
            images: self.images.clone(),
        }
    }
}

/// Input model for creating a new listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub price_type: PriceType,
    pub price: i64,
    pub location: String,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    pub area: Option<i32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: Option<ListingStatus>,
}

/// Partial update of an owned listing. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingUpdate {
    #[serde(default)]
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<String>,
    pub price_type: Option<PriceType>,
    pub price: Option<i64>,
    pub location: Option<String>,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    pub area: Option<i32>,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub status: Option<ListingStatus>,
}
