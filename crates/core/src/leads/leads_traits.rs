use crate::errors::Result;
use crate::leads::leads_model::{Lead, LeadStatus, NewLead, SubmitLead};
use async_trait::async_trait;

/// Trait for lead repository operations
#[async_trait]
pub trait LeadRepositoryTrait: Send + Sync {
    fn list_leads_for_user(&self, user_id: &str) -> Result<Vec<Lead>>;
    /// Append-only insert; leads are never deduplicated or regenerated.
    async fn insert_lead(&self, new_lead: NewLead) -> Result<Lead>;
    async fn update_lead_status(
        &self,
        user_id: &str,
        lead_id: &str,
        status: LeadStatus,
    ) -> Result<Lead>;
}

/// Trait for lead service operations
#[async_trait]
pub trait LeadServiceTrait: Send + Sync {
    /// Public, unauthenticated submission. Authorization is the "listing must
    /// be active" check, not caller identity.
    async fn submit_public_lead(&self, submission: SubmitLead) -> Result<Lead>;
    fn get_leads(&self, user_id: &str) -> Result<Vec<Lead>>;
    async fn update_lead_status(
        &self,
        user_id: &str,
        lead_id: &str,
        status: LeadStatus,
    ) -> Result<Lead>;
}
