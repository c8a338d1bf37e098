pub mod auth;
pub mod contact;
pub mod presets;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppResult;

/// Unwrap a JSON body, reading a request without a JSON content type as `{}`.
///
/// Clients posting an empty or non-JSON body then get the same field-level
/// validation as one that omitted every field. Malformed JSON and oversize
/// bodies still reject.
pub(crate) fn json_or_default<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> AppResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}
