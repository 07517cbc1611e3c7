use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::main_lib::AppState;

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn readyz() -> Json<serde_json::Value> {
    Json(json!({"status": "ready"}))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
