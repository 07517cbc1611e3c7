use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use immoflow_core::publish::PublishResponse;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublishRequest {
    listing_id: String,
    platforms: Vec<String>,
}

async fn publish_to_platforms(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(request): Json<PublishRequest>,
) -> ApiResult<Json<PublishResponse>> {
    let results = state
        .publish_service
        .publish_listing(&user.user_id, &request.listing_id, &request.platforms)
        .await?;
    Ok(Json(PublishResponse { results }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/publish-to-platforms", post(publish_to_platforms))
}
