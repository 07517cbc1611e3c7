use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use tempfile::tempdir;
use tower::ServiceExt;

use immoflow_server::{api::app_router, build_state, config::Config};

const JWT_SECRET: &str = "test-secret-test-secret-test-secr";

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: usize,
}

fn mint_token(user_id: &str) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

async fn build_test_router() -> (axum::Router, tempfile::TempDir) {
    let tmp = tempdir().unwrap();
    std::env::set_var("IMMO_DB_PATH", tmp.path().join("test.db"));
    std::env::set_var("IMMO_JWT_SECRET", JWT_SECRET);
    std::env::set_var("IMMO_STRIPE_WEBHOOK_SECRET", "whsec_test");
    // A malformed origin must be skipped at startup, not panic the router.
    std::env::set_var(
        "IMMO_CORS_ALLOW_ORIGINS",
        "https://app.example.fr,bad origin\u{7f}",
    );

    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn publish_and_lead_flow() {
    let (app, _tmp) = build_test_router().await;
    let token = mint_token("user-1");

    // Health endpoint is open
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Publishing requires a bearer token
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/functions/v1/publish-to-platforms",
            None,
            serde_json::json!({"listingId": "x", "platforms": ["facebook"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Create an active listing
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/listings",
            Some(&token),
            serde_json::json!({
                "title": "Villa vue mer",
                "description": "Grande villa avec piscine",
                "propertyType": "house",
                "priceType": "sale",
                "price": 350000,
                "location": "Nice",
                "beds": 4,
                "baths": 2,
                "area": 180,
                "features": ["piscine"],
                "images": [],
                "status": "active"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listing = body_json(response).await;
    let listing_id = listing["id"].as_str().unwrap().to_string();

    // Lead submission without email or phone is a 400 with the French message
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/functions/v1/submit-lead",
            None,
            serde_json::json!({"listingId": listing_id, "name": "Jo"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["error"], "Nom et email ou telephone requis");

    // Lead submission against an unknown listing is a 404
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/functions/v1/submit-lead",
            None,
            serde_json::json!({"listingId": "missing", "name": "Jo", "phone": "0600000000"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response).await;
    assert_eq!(error["error"], "Annonce non trouvee");

    // Phone-only submission succeeds and returns a lead id
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/functions/v1/submit-lead",
            None,
            serde_json::json!({"listingId": listing_id, "name": "Jo", "phone": "0600000000"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["leadId"].as_str().is_some());

    // The owner sees the lead
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/leads")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let leads = body_json(response).await;
    assert_eq!(leads.as_array().unwrap().len(), 1);

    // Publishing to a platform with no connection reports it per-platform
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/functions/v1/publish-to-platforms",
            Some(&token),
            serde_json::json!({"listingId": listing_id, "platforms": ["facebook"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["results"]["facebook"]["success"], false);
    assert_eq!(body["results"]["facebook"]["message"], "platform not connected");

    // A connected platform without a publisher gets the unavailable message
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/connections",
            Some(&token),
            serde_json::json!({"platformId": "seloger", "metadata": {}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/functions/v1/publish-to-platforms",
            Some(&token),
            serde_json::json!({"listingId": listing_id, "platforms": ["seloger"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["results"]["seloger"]["success"], false);
    assert_eq!(
        body["results"]["seloger"]["message"],
        "automatic publishing not available"
    );

    // Updating a listing owned by someone else is a 404, not a 500
    let other_token = mint_token("user-2");
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/listings/{listing_id}"),
            Some(&other_token),
            serde_json::json!({"price": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response).await;
    assert_eq!(error["error"], "Annonce non trouvee");

    // Publishing a listing owned by someone else is a 404
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/functions/v1/publish-to-platforms",
            Some(&other_token),
            serde_json::json!({"listingId": listing_id, "platforms": ["facebook"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Webhook without a signature header is rejected before any parsing
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/functions/v1/stripe-webhook",
            None,
            serde_json::json!({"id": "evt_1", "type": "charge.refunded", "data": {"object": {}}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
