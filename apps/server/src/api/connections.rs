use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    routing::delete,
    Json, Router,
};

use immoflow_core::connections::{NewConnection, PlatformConnection};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn list_connections(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<PlatformConnection>>> {
    let connections = state.connection_service.get_connections(&user.user_id)?;
    Ok(Json(connections))
}

async fn connect_platform(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(connection): Json<NewConnection>,
) -> ApiResult<Json<PlatformConnection>> {
    let saved = state
        .connection_service
        .connect_platform(&user.user_id, connection)
        .await?;
    Ok(Json(saved))
}

async fn disconnect_platform(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(platform_id): Path<String>,
) -> ApiResult<Json<PlatformConnection>> {
    let saved = state
        .connection_service
        .disconnect_platform(&user.user_id, &platform_id)
        .await?;
    Ok(Json(saved))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/connections", get(list_connections).post(connect_platform))
        .route("/connections/{platform_id}", delete(disconnect_platform))
}
