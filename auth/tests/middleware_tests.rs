use std::sync::Arc;

use auth::credentials::validate_registration;
use auth::middleware::authenticate;
use auth::AuthConfig;
use auth::AuthenticatedUser;
use auth::Authenticator;
use auth::JwtHandler;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::Extension;
use axum::Router;
use chrono::Duration;
use tower::ServiceExt;

const SECRET: &str = "test_secret_key_at_least_32_bytes!";

fn test_config() -> AuthConfig {
    AuthConfig {
        secret: SECRET.to_string(),
        access_token_hours: 1,
        refresh_token_days: 7,
        work_factor: 1,
    }
}

/// Handler that echoes the identity attached by the gate.
async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
    format!("{} {}", user.subject_id, user.email)
}

fn protected_router(authenticator: Arc<Authenticator>) -> Router {
    Router::new()
        .route("/me", get(whoami))
        .route_layer(middleware::from_fn_with_state(authenticator, authenticate))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8_lossy(&body).to_string())
}

#[tokio::test]
async fn valid_token_attaches_identity_context() {
    let authenticator = Arc::new(Authenticator::new(&test_config()));
    let tokens = authenticator
        .issue_tokens("user123", "user@example.com")
        .expect("Failed to issue tokens");

    let request = Request::builder()
        .uri("/me")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", tokens.access_token),
        )
        .body(Body::empty())
        .expect("Failed to build request");

    let (status, body) = send(protected_router(authenticator), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "user123 user@example.com");
}

#[tokio::test]
async fn registration_login_and_gate_flow() {
    let authenticator = Arc::new(Authenticator::new(&test_config()));

    // Register
    let email = validate_registration("user@example.com", "Secure123!", "Secure123!")
        .expect("Registration should validate");
    let hash = authenticator
        .hash_password("Secure123!")
        .expect("Failed to hash password");

    // Login
    let tokens = authenticator
        .login("Secure123!", &hash, "user123", email.as_str())
        .expect("Login failed");

    // Authenticated request through the gate
    let request = Request::builder()
        .uri("/me")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", tokens.access_token),
        )
        .body(Body::empty())
        .expect("Failed to build request");

    let (status, body) = send(protected_router(authenticator), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "user123 user@example.com");
}

#[tokio::test]
async fn garbage_token_is_rejected_with_generic_failure() {
    let authenticator = Arc::new(Authenticator::new(&test_config()));

    let request = Request::builder()
        .uri("/me")
        .header(header::AUTHORIZATION, "Bearer garbage")
        .body(Body::empty())
        .expect("Failed to build request");

    let (status, body) = send(protected_router(authenticator), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, r#"{"error":"Authentication required"}"#);
}

#[tokio::test]
async fn missing_header_is_rejected() {
    let authenticator = Arc::new(Authenticator::new(&test_config()));

    let request = Request::builder()
        .uri("/me")
        .body(Body::empty())
        .expect("Failed to build request");

    let (status, body) = send(protected_router(authenticator), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, r#"{"error":"Authentication required"}"#);
}

#[tokio::test]
async fn malformed_header_is_rejected() {
    let authenticator = Arc::new(Authenticator::new(&test_config()));

    let request = Request::builder()
        .uri("/me")
        .header(header::AUTHORIZATION, "Token abc.def.ghi")
        .body(Body::empty())
        .expect("Failed to build request");

    let (status, _) = send(protected_router(authenticator), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected_with_same_response_as_forged() {
    let authenticator = Arc::new(Authenticator::new(&test_config()));

    let expired = JwtHandler::new(SECRET.as_bytes())
        .issue("user123", "user@example.com", Duration::seconds(-10))
        .expect("Failed to issue token");
    let forged = JwtHandler::new(b"other_secret_key_at_least_32_byte!")
        .issue("user123", "user@example.com", Duration::hours(1))
        .expect("Failed to issue token");

    for token in [expired, forged] {
        let request = Request::builder()
            .uri("/me")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .expect("Failed to build request");

        let (status, body) = send(protected_router(authenticator.clone()), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"Authentication required"}"#);
    }
}
