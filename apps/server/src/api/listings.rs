use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use immoflow_core::listings::{Listing, ListingUpdate, NewListing};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn list_listings(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Listing>>> {
    let listings = state.listing_service.get_listings(&user.user_id)?;
    Ok(Json(listings))
}

async fn get_listing(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Listing>> {
    let listing = state.listing_service.get_listing(&user.user_id, &id)?;
    Ok(Json(listing))
}

/// Public detail view. Only active listings resolve; each hit bumps the view
/// counter.
async fn get_public_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Listing>> {
    let listing = state.listing_service.get_public_listing(&id).await?;
    Ok(Json(listing))
}

async fn create_listing(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(new_listing): Json<NewListing>,
) -> ApiResult<Json<Listing>> {
    let listing = state
        .listing_service
        .create_listing(&user.user_id, new_listing)
        .await?;
    Ok(Json(listing))
}

async fn update_listing(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(mut update): Json<ListingUpdate>,
) -> ApiResult<Json<Listing>> {
    update.id = Some(id);
    let listing = state
        .listing_service
        .update_listing(&user.user_id, update)
        .await?;
    Ok(Json(listing))
}

async fn delete_listing(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .listing_service
        .delete_listing(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/listings", get(list_listings).post(create_listing))
        .route(
            "/listings/{id}",
            get(get_listing).put(update_listing).delete(delete_listing),
        )
        .route("/public/listings/{id}", get(get_public_listing))
}
