use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use immoflow_core::leads::{Lead, LeadStatus, SubmitLead};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitLeadResponse {
    success: bool,
    message: String,
    lead_id: String,
}

/// Public endpoint, no authentication. Authorization is enforced entirely by
/// the "listing must be active" check inside the service.
async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<SubmitLead>,
) -> ApiResult<Json<SubmitLeadResponse>> {
    let lead = state.lead_service.submit_public_lead(submission).await?;
    Ok(Json(SubmitLeadResponse {
        success: true,
        message: "Votre demande a bien ete envoyee".to_string(),
        lead_id: lead.id,
    }))
}

async fn list_leads(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Lead>>> {
    let leads = state.lead_service.get_leads(&user.user_id)?;
    Ok(Json(leads))
}

#[derive(Deserialize)]
struct LeadStatusUpdate {
    status: LeadStatus,
}

async fn update_lead_status(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(lead_id): Path<String>,
    Json(update): Json<LeadStatusUpdate>,
) -> ApiResult<Json<Lead>> {
    let lead = state
        .lead_service
        .update_lead_status(&user.user_id, &lead_id, update.status)
        .await?;
    Ok(Json(lead))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/submit-lead", post(submit_lead))
}

pub fn owner_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/leads", get(list_leads))
        .route("/leads/{id}/status", put(update_lead_status))
}
