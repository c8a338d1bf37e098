#![allow(dead_code)]

use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use presetshop_api::auth::credentials::AdminCredentials;
use presetshop_api::auth::jwt::JwtConfig;
use presetshop_api::config::{ServerConfig, DEFAULT_BODY_LIMIT_BYTES};
use presetshop_api::router::build_app_router;
use presetshop_api::state::AppState;
use presetshop_core::catalog::CatalogStore;
use presetshop_mail::{LogRelay, MailError, MailRelay};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const JWT_SECRET: &str = "integration-test-secret";
pub const CONTACT_TO: &str = "owner@presetshop.test";

/// Argon2 hashing is slow in debug builds, so hash the test password once.
fn admin_credentials() -> AdminCredentials {
    static CREDS: OnceLock<AdminCredentials> = OnceLock::new();
    CREDS
        .get_or_init(|| {
            AdminCredentials::from_plaintext(ADMIN_USERNAME, ADMIN_PASSWORD)
                .expect("hashing should succeed")
        })
        .clone()
}

/// Build a test `ServerConfig` with a known secret and administrator.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
            expiry_hours: 24,
        },
        admin: Some(admin_credentials()),
        contact_to: CONTACT_TO.to_string(),
    }
}

/// Build the full application router over a seeded catalog and a log-only relay.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(CatalogStore::seeded()), Arc::new(LogRelay))
}

/// Build the full application router over the given catalog and relay.
pub fn build_test_app_with(catalog: Arc<CatalogStore>, mailer: Arc<dyn MailRelay>) -> Router {
    build_app_with_config(test_config(), catalog, mailer)
}

pub fn build_app_with_config(
    config: ServerConfig,
    catalog: Arc<CatalogStore>,
    mailer: Arc<dyn MailRelay>,
) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog,
        mailer,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body, None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send_json(app, Method::POST, uri, body, Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send_json(app, Method::PUT, uri, body, Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Log in as the test administrator and return the bearer token.
pub async fn login(app: Router) -> String {
    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}

// ---------------------------------------------------------------------------
// Mail relays
// ---------------------------------------------------------------------------

/// A message captured by [`RecordingRelay`].
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Default)]
pub struct RecordingRelay {
    pub sent: Mutex<Vec<SentMail>>,
}

#[async_trait]
impl MailRelay for RecordingRelay {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

pub struct FailingRelay;

#[async_trait]
impl MailRelay for FailingRelay {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), MailError> {
        Err(MailError::Build("relay unavailable: smtp.example.com refused".into()))
    }
}
