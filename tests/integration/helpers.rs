//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use keygate_api::directory::{DirectoryUser, UserDirectory};
use keygate_api::router::build_router;
use keygate_api::state::AppState;
use keygate_auth::MemoryLedger;
use keygate_auth::jwt::{TokenDecoder, TokenEncoder};
use keygate_auth::rotation::RefreshManager;
use keygate_core::config::AppConfig;
use keygate_core::traits::RefreshTokenLedger;

/// Test application wired against the in-memory ledger, so the suite
/// needs no external services.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application state, for tests that build their own routers.
    pub state: AppState,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// JSON body, or `Null` when the body is empty or not JSON.
    pub body: Value,
}

impl TestApp {
    /// Create a test application with test secrets and default TTLs.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.access_secret = "test-access-secret".to_string();
        config.auth.refresh_secret = "test-refresh-secret".to_string();
        Self::with_config(config)
    }

    /// Create a test application from an explicit configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let encoder = Arc::new(TokenEncoder::new(&config.auth));
        let decoder = Arc::new(TokenDecoder::new(&config.auth));
        let ledger: Arc<dyn RefreshTokenLedger> = Arc::new(MemoryLedger::new());
        let refresh_manager = Arc::new(RefreshManager::new(
            Arc::clone(&encoder),
            Arc::clone(&decoder),
            ledger,
        ));

        let mut users = UserDirectory::new();
        users.insert(DirectoryUser::new("admin", "admin"));
        users.insert(DirectoryUser::new("user", "user"));

        let state = AppState {
            config: Arc::new(config),
            decoder,
            refresh_manager,
            users: Arc::new(users),
        };

        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    /// Issue a request against the router and decode the JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        Self::send(self.router.clone(), request).await
    }

    /// Issue a GET with a raw `Authorization` header value (or none at all).
    pub async fn get_with_raw_header(&self, path: &str, header: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(value) = header {
            builder = builder.header("authorization", value);
        }
        let request = builder.body(Body::empty()).unwrap();

        Self::send(self.router.clone(), request).await
    }

    /// Log in as a known user and return (access_token, refresh_token).
    pub async fn login(&self, username: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "username": username })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);

        let access = response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("login response missing access_token")
            .to_string();
        let refresh = response
            .body
            .get("refresh_token")
            .and_then(|v| v.as_str())
            .expect("login response missing refresh_token")
            .to_string();

        (access, refresh)
    }

    /// Drive a request through a router and decode the response.
    pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
