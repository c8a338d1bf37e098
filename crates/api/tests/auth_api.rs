//! HTTP-level integration tests for `POST /api/auth/login`.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, post_json, send, ADMIN_PASSWORD, ADMIN_USERNAME, JWT_SECRET};
use presetshop_api::auth::jwt::{verify_token, JwtConfig};
use presetshop_core::catalog::CatalogStore;
use presetshop_mail::LogRelay;

#[tokio::test]
async fn login_success_returns_verifiable_token() {
    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
    let response = post_json(common::build_test_app(), "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["expires_in"], 24 * 3600);

    let config = JwtConfig {
        secret: JWT_SECRET.to_string(),
        expiry_hours: 24,
    };
    let claims = verify_token(json["token"].as_str().unwrap(), &config)
        .expect("issued token should verify");
    assert_eq!(claims.username, ADMIN_USERNAME);
}

#[tokio::test]
async fn login_wrong_password_returns_401_without_token() {
    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": "nope" });
    let response = post_json(common::build_test_app(), "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid credentials");
    assert!(json.get("token").is_none());
}

#[tokio::test]
async fn login_wrong_username_returns_401() {
    let body = serde_json::json!({ "username": "root", "password": ADMIN_PASSWORD });
    let response = post_json(common::build_test_app(), "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_missing_fields_returns_400() {
    let body = serde_json::json!({ "username": "" });
    let response = post_json(common::build_test_app(), "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<_> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["password", "username"]);
}

#[tokio::test]
async fn login_malformed_json_returns_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(common::build_test_app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn login_with_empty_body_returns_400_validation() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .body(Body::empty())
        .unwrap();
    let response = send(common::build_test_app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn login_without_configured_admin_is_always_rejected() {
    let mut config = common::test_config();
    config.admin = None;
    let app = common::build_app_with_config(
        config,
        Arc::new(CatalogStore::seeded()),
        Arc::new(LogRelay),
    );

    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
