//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use presetshop_core::error::CoreError;

use crate::auth::jwt::{verify_token, TokenError};
use crate::error::AppError;
use crate::state::AppState;

/// Administrator authenticated by an `Authorization: Bearer <token>` header.
///
/// A missing header, or one without a token after the scheme, rejects with
/// 401. A token that is present but unreadable or failing verification
/// rejects with 403.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(username = %user.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Username carried in the token claims.
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let missing = || AppError::Core(CoreError::Unauthorized("Token missing".into()));

        let header = parts.headers.get(AUTHORIZATION).ok_or_else(missing)?;
        let header = header.to_str().map_err(|_| {
            tracing::warn!("Rejected Authorization header with non-ASCII bytes");
            AppError::Core(CoreError::Forbidden(TokenError::Invalid.to_string()))
        })?;
        let token = bearer_token(header).ok_or_else(missing)?;

        let claims = verify_token(token, &state.config.jwt).map_err(|e| {
            tracing::warn!(reason = %e, "Rejected bearer token");
            AppError::Core(CoreError::Forbidden(e.to_string()))
        })?;

        Ok(AuthUser {
            username: claims.username,
        })
    }
}

/// The credential following the scheme in an `Authorization` value.
fn bearer_token(header: &str) -> Option<&str> {
    header.split(' ').nth(1).filter(|t| !t.is_empty())
}
