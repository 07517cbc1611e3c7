//! Leads domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lead pipeline state, mutated only by explicit owner transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Visited,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Visited => "visited",
            LeadStatus::Lost => "lost",
        }
    }
}

/// Domain model representing a lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    /// Owner of the listing the lead was submitted against (denormalized).
    pub user_id: String,
    pub listing_id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    /// Free-form acquisition tag, e.g. "site" or "facebook".
    pub source: String,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated lead ready for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub user_id: String,
    pub listing_id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub source: String,
}

/// Raw public submission, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLead {
    pub listing_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
}
