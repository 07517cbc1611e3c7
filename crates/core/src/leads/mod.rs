//! Leads module - domain models, services, and traits.

mod leads_model;
mod leads_service;
mod leads_traits;

pub use leads_model::{Lead, LeadStatus, NewLead, SubmitLead};
pub use leads_service::{LeadService, LEAD_CONTACT_REQUIRED};
pub use leads_traits::{LeadRepositoryTrait, LeadServiceTrait};
