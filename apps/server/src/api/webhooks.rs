use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use immoflow_core::billing::StripeEvent;

use crate::{error::ApiError, main_lib::AppState};

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted age of a signed payload, in seconds.
const SIGNATURE_TOLERANCE_SECS: i64 = 300;

/// Verifies a `stripe-signature` header (`t=<unix>,v1=<hex>,...`) against the
/// raw payload. The signed message is `"{t}.{payload}"`.
pub fn verify_stripe_signature(
    secret: &str,
    header: &str,
    payload: &[u8],
    now_unix: i64,
) -> Result<(), ApiError> {
    let mut timestamp: Option<i64> = None;
    let mut candidates: Vec<&str> = Vec::new();
    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse().ok(),
            Some(("v1", value)) => candidates.push(value),
            _ => {}
        }
    }

    let timestamp =
        timestamp.ok_or_else(|| ApiError::BadRequest("invalid signature header".to_string()))?;
    if (now_unix - timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(ApiError::BadRequest("signature timestamp too old".to_string()));
    }

    for candidate in &candidates {
        let Ok(candidate_bytes) = hex::decode(candidate) else {
            continue;
        };
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        if mac.verify_slice(&candidate_bytes).is_ok() {
            return Ok(());
        }
    }

    Err(ApiError::BadRequest("signature mismatch".to_string()))
}

/// Raw-body handler: the signature covers the exact bytes Stripe sent, so the
/// payload must not go through JSON extraction first.
async fn stripe_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let header = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest("missing stripe-signature header".to_string()))?;

    let now = chrono::Utc::now().timestamp();
    verify_stripe_signature(&state.stripe_webhook_secret, header, &body, now)?;

    let event: StripeEvent = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid event payload: {e}")))?;
    tracing::info!("stripe webhook event {} ({})", event.id, event.event_type);

    state.billing_service.handle_event(event).await?;
    Ok(StatusCode::OK)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stripe-webhook", post(stripe_webhook))
}
