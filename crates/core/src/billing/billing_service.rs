use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde_json::Value;

use crate::billing::billing_event::StripeEvent;
use crate::billing::billing_model::{PlanCatalog, SubscriptionPlan, SubscriptionUpdate};
use crate::billing::billing_traits::{BillingServiceTrait, ProfileRepositoryTrait};
use crate::errors::{Error, Result};

/// Applies verified Stripe webhook events to profile subscription state.
///
/// Signature verification happens at the HTTP boundary before events reach
/// this service.
pub struct BillingService {
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
    catalog: PlanCatalog,
}

impl BillingService {
    pub fn new(profile_repository: Arc<dyn ProfileRepositoryTrait>, catalog: PlanCatalog) -> Self {
        BillingService {
            profile_repository,
            catalog,
        }
    }

    fn period_end(object: &Value) -> Option<DateTime<Utc>> {
        object
            .get("current_period_end")
            .and_then(Value::as_i64)
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    fn profile_for_customer(&self, event: &StripeEvent) -> Result<String> {
        let customer_id = event
            .customer_id()
            .ok_or_else(|| Error::Billing(format!("event {} has no customer id", event.id)))?;
        Ok(self.profile_repository.find_by_customer(customer_id)?.id)
    }

    async fn handle_checkout_completed(&self, event: &StripeEvent) -> Result<()> {
        let user_id = event
            .data
            .object
            .get("client_reference_id")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::Billing(format!("event {} has no client_reference_id", event.id))
            })?;
        let plan = event
            .price_id()
            .map(|p| self.catalog.plan_for_price(p))
            .unwrap_or(SubscriptionPlan::Starter);

        self.profile_repository
            .update_subscription(
                user_id,
                SubscriptionUpdate {
                    plan: Some(plan),
                    status: Some("active".to_string()),
                    current_period_end: Self::period_end(&event.data.object),
                    stripe_customer_id: event.customer_id().map(String::from),
                },
            )
            .await?;
        info!("checkout completed for user {user_id}, plan {}", plan.as_str());
        Ok(())
    }

    async fn handle_subscription_updated(&self, event: &StripeEvent) -> Result<()> {
        let profile_id = self.profile_for_customer(event)?;
        let status = event
            .data
            .object
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("active")
            .to_string();
        self.profile_repository
            .update_subscription(
                &profile_id,
                SubscriptionUpdate {
                    plan: event.price_id().map(|p| self.catalog.plan_for_price(p)),
                    status: Some(status),
                    current_period_end: Self::period_end(&event.data.object),
                    stripe_customer_id: None,
                },
            )
            .await?;
        Ok(())
    }

    async fn handle_subscription_deleted(&self, event: &StripeEvent) -> Result<()> {
        let profile_id = self.profile_for_customer(event)?;
        self.profile_repository
            .update_subscription(
                &profile_id,
                SubscriptionUpdate {
                    plan: Some(SubscriptionPlan::Starter),
                    status: Some("canceled".to_string()),
                    current_period_end: None,
                    stripe_customer_id: None,
                },
            )
            .await?;
        info!("subscription canceled for profile {profile_id}");
        Ok(())
    }

    async fn handle_payment_failed(&self, event: &StripeEvent) -> Result<()> {
        let profile_id = self.profile_for_customer(event)?;
        self.profile_repository
            .update_subscription(
                &profile_id,
                SubscriptionUpdate {
                    status: Some("past_due".to_string()),
                    ..SubscriptionUpdate::default()
                },
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl BillingServiceTrait for BillingService {
    async fn handle_event(&self, event: StripeEvent) -> Result<()> {
        match event.event_type.as_str() {
            "checkout.session.completed" => self.handle_checkout_completed(&event).await,
            "customer.subscription.updated" => self.handle_subscription_updated(&event).await,
            "customer.subscription.deleted" => self.handle_subscription_deleted(&event).await,
            "invoice.payment_failed" => self.handle_payment_failed(&event).await,
            other => {
                debug!("ignoring webhook event type {other}");
                Ok(())
            }
        }
    }
}
