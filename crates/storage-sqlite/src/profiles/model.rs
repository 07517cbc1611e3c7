//! Database models for profiles.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use immoflow_core::billing::{Profile, SubscriptionPlan};

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
#[diesel(table_name = crate::schema::profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ProfileDB {
    pub id: String,
    pub email: Option<String>,
    pub subscription_plan: String,
    pub subscription_status: String,
    pub subscription_current_period_end: Option<NaiveDateTime>,
    pub stripe_customer_id: Option<String>,
    pub created_at: NaiveDateTime,
}

pub(crate) fn parse_plan(raw: &str) -> SubscriptionPlan {
    match raw {
        "pro" => SubscriptionPlan::Pro,
        "agency" => SubscriptionPlan::Agency,
        _ => SubscriptionPlan::Starter,
    }
}

// Conversion to domain models
impl From<ProfileDB> for Profile {
    fn from(db: ProfileDB) -> Self {
        Self {
            id: db.id,
            email: db.email,
            subscription_plan: parse_plan(&db.subscription_plan),
            subscription_status: db.subscription_status,
            subscription_current_period_end: db
                .subscription_current_period_end
                .map(|d| d.and_utc()),
            stripe_customer_id: db.stripe_customer_id,
            created_at: db.created_at.and_utc(),
        }
    }
}
