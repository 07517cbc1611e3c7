//! Database models for leads.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use immoflow_core::leads::{Lead, LeadStatus, NewLead};

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
#[diesel(table_name = crate::schema::leads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LeadDB {
    pub id: String,
    pub user_id: String,
    pub listing_id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub source: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::leads)]
#[serde(rename_all = "camelCase")]
pub struct NewLeadDB {
    pub id: String,
    pub user_id: String,
    pub listing_id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub source: String,
    pub status: String,
}

pub(crate) fn parse_lead_status(raw: &str) -> LeadStatus {
    match raw {
        "contacted" => LeadStatus::Contacted,
        "qualified" => LeadStatus::Qualified,
        "visited" => LeadStatus::Visited,
        "lost" => LeadStatus::Lost,
        _ => LeadStatus::New,
    }
}

// Conversion to domain models
impl From<LeadDB> for Lead {
    fn from(db: LeadDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            listing_id: db.listing_id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            message: db.message,
            source: db.source,
            status: parse_lead_status(&db.status),
            created_at: db.created_at.and_utc(),
        }
    }
}

impl NewLeadDB {
    pub fn from_domain(id: String, domain: NewLead) -> Self {
        Self {
            id,
            user_id: domain.user_id,
            listing_id: domain.listing_id,
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            message: domain.message,
            source: domain.source,
            status: LeadStatus::New.as_str().to_string(),
        }
    }
}
