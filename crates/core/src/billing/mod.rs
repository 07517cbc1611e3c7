//! Billing module - subscription state driven by Stripe webhook events.

mod billing_event;
mod billing_model;
mod billing_service;
mod billing_traits;

pub use billing_event::{StripeEvent, StripeEventData};
pub use billing_model::{PlanCatalog, Profile, SubscriptionPlan, SubscriptionUpdate};
pub use billing_service::BillingService;
pub use billing_traits::{BillingServiceTrait, ProfileRepositoryTrait};
