//! Bearer-token and admin guards.
//!
//! `require_auth` resolves the caller and stores a [`Principal`] in the
//! request extensions; `require_admin` must be layered inside it.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use storefront_sdk::User;

use super::error::Problem;
use super::routes::ApiState;

/// Authenticated caller, as currently stored.
#[derive(Debug, Clone)]
pub struct Principal(pub User);

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.0.is_admin
    }
}

pub async fn require_auth(
    State(state): State<ApiState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer_token(req.headers()) else {
        return Problem::unauthorized("Missing or invalid Authorization header").into_response();
    };

    let claims = match state.tokens.validate(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!("Token rejected: {err}");
            return Problem::unauthorized("Unauthorized").into_response();
        }
    };

    match state.services.auth.validate_user(claims.user_id).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(Principal(user));
            next.run(req).await
        }
        Ok(None) => {
            tracing::debug!(user_id = %claims.user_id, "Token subject no longer exists");
            Problem::unauthorized("Unauthorized").into_response()
        }
        Err(err) => {
            tracing::error!("Principal lookup failed: {err}");
            Problem::unauthorized("Unauthorized").into_response()
        }
    }
}

pub async fn require_admin(req: Request, next: Next) -> Response {
    match req.extensions().get::<Principal>() {
        Some(principal) if principal.is_admin() => next.run(req).await,
        Some(_) => Problem::forbidden("You do not have admin privileges").into_response(),
        None => Problem::unauthorized("Unauthorized").into_response(),
    }
}

/// Extract Bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(str::trim))
        .filter(|t| !t.is_empty())
}
