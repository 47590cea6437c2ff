//! Auth Middleware
//!
//! The access guard for protected routes: extracts the bearer token,
//! verifies it with the token codec, and attaches the caller's identity to
//! the request. The guard never consults the user store, so an access
//! token issued before a logout keeps working until its own expiry; only
//! refresh is revocable.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::token::TokenCodec;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthError;

/// Guard state. Holds the codec and nothing else: no repository handle.
#[derive(Clone)]
pub struct GuardState {
    pub codec: Arc<TokenCodec>,
}

/// Verified caller identity, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware that requires a valid bearer access token
pub async fn require_auth(
    State(state): State<GuardState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let claims = {
        let token = extract_bearer_token(req.headers())
            .ok_or_else(|| AuthError::Unauthorized.into_response())?;

        state.codec.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            AuthError::Unauthorized.into_response()
        })?
    };

    req.extensions_mut().insert(AuthIdentity {
        user_id: UserId::from_uuid(claims.sub),
        username: claims.username,
    });

    Ok(next.run(req).await)
}

/// Pull the token out of an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
