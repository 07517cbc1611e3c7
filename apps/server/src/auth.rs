use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, main_lib::AppState};

/// Validates bearer tokens minted by the external auth provider (HS256,
/// shared secret). The `sub` claim is the user id.
pub struct AuthManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

impl AuthManager {
    pub fn new(jwt_secret: &str) -> anyhow::Result<Self> {
        if jwt_secret.trim().is_empty() {
            anyhow::bail!("IMMO_JWT_SECRET must be set");
        }
        let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Supabase-issued tokens carry an `aud` we do not check.
        validation.validate_aud = false;
        Ok(Self {
            decoding_key,
            validation,
        })
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized)
    }
}

/// Extractor for the authenticated caller. Rejects with 401 when the bearer
/// token is missing, malformed or expired.
pub struct AuthUser {
    pub user_id: String,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;
        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .ok_or(ApiError::Unauthorized)?;
        let claims = state.auth.validate_token(token)?;
        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
