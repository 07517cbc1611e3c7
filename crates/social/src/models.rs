//! View models consumed by the publishers.
//!
//! These are deliberately decoupled from the domain listing type: callers map
//! their listing into a [`ListingPost`] snapshot, and the connection metadata
//! arrives as the opaque JSON stored alongside the platform connection.

use serde::{Deserialize, Serialize};

use crate::errors::PublishError;

/// Pricing mode of a listing, drives the price suffix in the post text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceKind {
    Sale,
    Rent,
    Vacation,
}

/// Immutable listing snapshot used to compose and publish a post.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPost {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub price_kind: PriceKind,
    pub location: String,
    pub beds: Option<i32>,
    pub area: Option<i32>,
    /// Ordered feature labels; joined with commas in the post text.
    pub features: Vec<String>,
    /// Ordered image URLs; the first one is the display image.
    pub images: Vec<String>,
}

impl ListingPost {
    /// The primary/display image, when the listing has any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A post successfully created on a remote platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedPost {
    /// Remote identifier of the created post.
    pub post_id: String,
    /// Human-readable confirmation, e.g. `published on <page name>`.
    pub message: String,
}

/// Facebook connection metadata as stored on the platform connection row.
///
/// Instagram publishing piggybacks on the same metadata: a Page may carry the
/// id of its linked Instagram business account.
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookConnection {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub pages: Vec<FacebookPage>,
}

/// A Facebook Page the user granted access to.
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookPage {
    pub id: String,
    pub name: String,
    pub access_token: String,
    /// Linked Instagram business account id, when the Page has one.
    #[serde(default)]
    pub instagram_business_account: Option<String>,
}

impl FacebookConnection {
    /// Parses the opaque connection metadata JSON.
    pub fn from_metadata(metadata: &serde_json::Value) -> Result<Self, PublishError> {
        serde_json::from_value(metadata.clone())
            .map_err(|e| PublishError::InvalidMetadata(e.to_string()))
    }

    /// The Page used for publishing.
    ///
    /// Always the first connected Page: there is no page-selection surface,
    /// a known limitation kept as-is for multi-page accounts.
    pub fn primary_page(&self) -> Option<&FacebookPage> {
        self.pages.first()
    }

    /// First Page carrying a linked Instagram business account.
    pub fn instagram_page(&self) -> Option<&FacebookPage> {
        self.pages
            .iter()
            .find(|p| p.instagram_business_account.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_connection_metadata() {
        let metadata = json!({
            "access_token": "user-token",
            "pages": [
                {"id": "p1", "name": "Agence Sud", "access_token": "page-token"},
                {
                    "id": "p2",
                    "name": "Agence Nord",
                    "access_token": "page-token-2",
                    "instagram_business_account": "ig-42"
                }
            ]
        });

        let conn = FacebookConnection::from_metadata(&metadata).unwrap();
        assert_eq!(conn.primary_page().unwrap().id, "p1");
        assert_eq!(
            conn.instagram_page()
                .unwrap()
                .instagram_business_account
                .as_deref(),
            Some("ig-42")
        );
    }

    #[test]
    fn empty_metadata_has_no_pages() {
        let conn = FacebookConnection::from_metadata(&json!({})).unwrap();
        assert!(conn.primary_page().is_none());
        assert!(conn.instagram_page().is_none());
    }

    #[test]
    fn malformed_metadata_is_rejected() {
        let metadata = json!({"pages": "not-an-array"});
        assert!(matches!(
            FacebookConnection::from_metadata(&metadata),
            Err(PublishError::InvalidMetadata(_))
        ));
    }
}
