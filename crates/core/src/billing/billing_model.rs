//! Billing domain models.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Starter,
    Pro,
    Agency,
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Starter => "starter",
            SubscriptionPlan::Pro => "pro",
            SubscriptionPlan::Agency => "agency",
        }
    }
}

/// User profile row, holding the subscription state mutated by webhook events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Matches the auth user id.
    pub id: String,
    pub email: Option<String>,
    pub subscription_plan: SubscriptionPlan,
    pub subscription_status: String,
    pub subscription_current_period_end: Option<DateTime<Utc>>,
    pub stripe_customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial subscription update applied by the webhook handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionUpdate {
    pub plan: Option<SubscriptionPlan>,
    pub status: Option<String>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub stripe_customer_id: Option<String>,
}

/// Maps configured Stripe price ids to plan tiers.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    pub starter_price_id: String,
    pub pro_price_id: String,
    pub agency_price_id: String,
}

impl PlanCatalog {
    /// Resolves a price id to a plan. Unknown price ids fall back to the
    /// lowest tier; that fallback is logged because it usually means a price
    /// was added in Stripe without updating the configuration.
    pub fn plan_for_price(&self, price_id: &str) -> SubscriptionPlan {
        if price_id == self.agency_price_id {
            SubscriptionPlan::Agency
        } else if price_id == self.pro_price_id {
            SubscriptionPlan::Pro
        } else if price_id == self.starter_price_id {
            SubscriptionPlan::Starter
        } else {
            warn!("unknown price id {price_id}, defaulting to starter plan");
            SubscriptionPlan::Starter
        }
    }
}
