use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use immoflow_ai::DescriptionRequest;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
struct DescriptionResponse {
    description: String,
}

async fn generate_description(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DescriptionRequest>,
) -> ApiResult<Json<DescriptionResponse>> {
    let description = state.description_service.generate(request).await?;
    Ok(Json(DescriptionResponse { description }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/generate-description", post(generate_description))
}
