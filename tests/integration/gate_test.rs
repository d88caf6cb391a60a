//! Integration tests for the authenticate and role gates.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};

use keygate_api::middleware::{auth::authenticate, rbac};

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let app = helpers::TestApp::new();
    let response = app.get_with_raw_header("/api/dashboard", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_scheme_is_unauthorized() {
    let app = helpers::TestApp::new();
    let response = app
        .get_with_raw_header("/api/dashboard", Some("Token abc"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_empty_credential_is_unauthorized_not_forbidden() {
    let app = helpers::TestApp::new();
    let response = app
        .get_with_raw_header("/api/dashboard", Some("Bearer "))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_three_part_header_is_unauthorized() {
    let app = helpers::TestApp::new();
    let response = app
        .get_with_raw_header("/api/dashboard", Some("Bearer abc def"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unverifiable_token_is_forbidden_with_generic_message() {
    let app = helpers::TestApp::new();
    let response = app
        .get_with_raw_header("/api/dashboard", Some("Bearer not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body.get("message").unwrap(),
        "Invalid or expired token"
    );
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let app = helpers::TestApp::new();
    let (access_token, _) = app.login("admin").await;

    let response = app
        .request("GET", "/api/dashboard", None, Some(&access_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("message").unwrap(), "Hello, admin");
}

#[tokio::test]
async fn test_admin_route_rejects_non_admin_role() {
    let app = helpers::TestApp::new();
    let (access_token, _) = app.login("user").await;

    let response = app
        .request("GET", "/api/admin/status", None, Some(&access_token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_route_allows_admin_role() {
    let app = helpers::TestApp::new();
    let (access_token, _) = app.login("admin").await;

    let response = app
        .request("GET", "/api/admin/status", None, Some(&access_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_allowed_roles_rejects_every_request() {
    let app = helpers::TestApp::new();
    let (access_token, _) = app.login("admin").await;

    // A route gated on an empty role list: membership in an empty set is
    // always false, so even an authenticated admin is rejected.
    let router = axum::Router::new()
        .route("/locked", axum::routing::get(|| async { "open" }))
        .layer(axum::middleware::from_fn(|req, next| {
            rbac::require_role(&[], req, next)
        }))
        .layer(axum::middleware::from_fn_with_state(
            app.state.clone(),
            authenticate,
        ));

    let request = Request::builder()
        .method("GET")
        .uri("/locked")
        .header("authorization", format!("Bearer {access_token}"))
        .body(Body::empty())
        .unwrap();

    let response = helpers::TestApp::send(router, request).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_role_gate_without_authenticate_layer_is_unauthorized() {
    let app = helpers::TestApp::new();
    let (access_token, _) = app.login("admin").await;

    // The role gate alone never sees an identity, even with a valid token.
    let router = axum::Router::new()
        .route("/locked", axum::routing::get(|| async { "open" }))
        .layer(axum::middleware::from_fn(|req, next| {
            rbac::require_role(&["admin"], req, next)
        }));

    let request = Request::builder()
        .method("GET")
        .uri("/locked")
        .header("authorization", format!("Bearer {access_token}"))
        .body(Body::empty())
        .unwrap();

    let response = helpers::TestApp::send(router, request).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
