//! Integration tests for credential issuance and rotation over HTTP.

mod helpers;

use http::StatusCode;
use serde_json::json;

use keygate_auth::jwt::TokenEncoder;

#[tokio::test]
async fn test_login_returns_token_pair() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "admin" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
    assert!(response.body.get("refresh_token").is_some());
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "nobody" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_empty_username_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_returns_access_token_with_original_claims() {
    let app = helpers::TestApp::new();
    let (_, refresh_token) = app.login("admin").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let access_token = response
        .body
        .get("access_token")
        .and_then(|v| v.as_str())
        .unwrap();

    // The rotated token carries the original identity payload, minus the
    // timing fields that were re-minted.
    let claims = app.state.decoder.verify_access(access_token).unwrap();
    assert_eq!(claims.extra.get("username").unwrap(), "admin");
    assert_eq!(claims.extra.get("role").unwrap(), "admin");
    assert!(claims.extra.contains_key("id"));
    assert!(!claims.extra.contains_key("iat"));
    assert!(!claims.extra.contains_key("exp"));
}

#[tokio::test]
async fn test_refresh_with_blank_token_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/auth/refresh", Some(json!({ "token": "" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_with_unissued_token_is_forbidden() {
    let app = helpers::TestApp::new();

    // Well-formed under the configured secret, but never issued through
    // login, so the ledger has no row for it.
    let encoder = TokenEncoder::new(&app.state.config.auth);
    let mut payload = keygate_auth::ClaimsMap::new();
    payload.insert("username".into(), "admin".into());
    let orphan = encoder.sign_refresh(&payload).unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "token": orphan.token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_refresh_token_is_reusable_until_expiry() {
    let app = helpers::TestApp::new();
    let (_, refresh_token) = app.login("user").await;

    for _ in 0..2 {
        let response = app
            .request(
                "POST",
                "/api/auth/refresh",
                Some(json!({ "token": refresh_token })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_me_returns_decoded_claims() {
    let app = helpers::TestApp::new();
    let (access_token, _) = app.login("admin").await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&access_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("username").unwrap(), "admin");
    assert!(response.body.get("iat").is_some());
    assert!(response.body.get("exp").is_some());
}
