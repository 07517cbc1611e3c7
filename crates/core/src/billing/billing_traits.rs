//! Trait definitions for profile repositories and billing services.

use async_trait::async_trait;

use crate::billing::billing_event::StripeEvent;
use crate::billing::billing_model::{Profile, SubscriptionUpdate};
use crate::errors::Result;

/// Trait for profile repository operations.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<Profile>;
    fn find_by_customer(&self, stripe_customer_id: &str) -> Result<Profile>;
    async fn update_subscription(
        &self,
        profile_id: &str,
        update: SubscriptionUpdate,
    ) -> Result<Profile>;
}

/// Trait for the webhook event handler.
#[async_trait]
pub trait BillingServiceTrait: Send + Sync {
    /// Applies one verified webhook event to the matching profile. Unknown
    /// event types are acknowledged without mutation.
    async fn handle_event(&self, event: StripeEvent) -> Result<()>;
}
