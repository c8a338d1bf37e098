//! Handlers for the `/auth` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use presetshop_core::error::CoreError;
use presetshop_core::validation::validate_fields;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::json_or_default;
use crate::auth::jwt::issue_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/auth/login
///
/// Exchange the administrator's username and password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let input = json_or_default(payload)?;
    validate_fields(&input)?;

    let username = input.username.as_deref().unwrap_or_default();
    let password = input.password.as_deref().unwrap_or_default();

    let authenticated = state
        .config
        .admin
        .as_ref()
        .is_some_and(|admin| admin.verify(username, password));

    if !authenticated {
        tracing::warn!(username, "Rejected login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = issue_token(username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username, "Admin logged in");
    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}
