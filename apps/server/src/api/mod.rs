mod connections;
mod describe;
mod health;
mod leads;
mod listings;
mod publish;
mod webhooks;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<axum::http::HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("ignoring malformed CORS origin {o:?}");
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    // Serverless-era paths are preserved so existing clients keep working.
    let functions = Router::new()
        .merge(publish::router())
        .merge(leads::router())
        .merge(describe::router())
        .merge(webhooks::router());

    let api = Router::new()
        .merge(listings::router())
        .merge(connections::router())
        .merge(leads::owner_router());

    Router::new()
        .merge(health::router())
        .nest("/functions/v1", functions)
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
