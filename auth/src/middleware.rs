use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::authenticator::Authenticator;

/// Extension type holding the authenticated caller's identity.
///
/// Attached to request extensions exactly once by the [`authenticate`]
/// middleware; downstream handlers must read identity from here rather than
/// re-parsing the Authorization header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject_id: String,
    pub email: String,
}

/// Authorization header extraction failures.
///
/// Internal only: over the wire these collapse into the same uniform
/// response as a rejected token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Malformed Authorization header, expected: Bearer <token>")]
    MalformedHeader,
}

/// Middleware that validates bearer tokens and attaches the caller's
/// identity to request extensions.
///
/// Every failure, whether a missing header, a malformed header, or a
/// rejected token, produces the same 401 response; the internal reason is
/// logged but never sent to the caller.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).map_err(|e| {
        tracing::warn!(error = %e, "Rejected request without valid bearer token");
        unauthorized()
    })?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        subject_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

/// Uniform authentication failure response.
fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Authentication required"
        })),
    )
        .into_response()
}

/// Extract the bearer token from the Authorization header.
///
/// Requires the exact two-token form `Bearer <token>`.
fn extract_bearer_token(req: &Request) -> Result<&str, BearerError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| BearerError::MalformedHeader)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(BearerError::MalformedHeader)?;

    if token.is_empty() || token.contains(' ') {
        return Err(BearerError::MalformedHeader);
    }

    Ok(token)
}
